use crate::error::AbscrapeError;
use crate::model::AbstractSet;
use std::io::Write;
use std::path::Path;

/// Write records as pretty-printed JSON (2-space indent, UTF-8, non-ASCII unescaped).
///
/// The JSON goes to a temp file next to `path` which is then renamed over
/// it, so a failed run never leaves a half-written output file.
pub fn write_records(path: &Path, records: &AbstractSet) -> Result<(), AbscrapeError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let json = serde_json::to_string_pretty(records)?;
    let mut tmpfile = tempfile::NamedTempFile::new_in(dir)?;
    tmpfile.write_all(json.as_bytes())?;
    tmpfile.as_file().sync_all()?;
    tmpfile.persist(path)?;
    Ok(())
}
