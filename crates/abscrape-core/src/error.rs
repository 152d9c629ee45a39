use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AbscrapeError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl AbscrapeError {
    /// Process exit status for this error.
    ///
    /// A missing input file or a missing `pdftotext` binary exit with 2 so
    /// wrappers can tell setup problems apart from extraction failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            AbscrapeError::InputNotFound(_) | AbscrapeError::PdftotextNotFound => 2,
            _ => 1,
        }
    }
}
