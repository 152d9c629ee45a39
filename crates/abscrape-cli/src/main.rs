mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "Living_Data_2025_Program.pdf";
const DEFAULT_OUTPUT: &str = "living_data_abstracts.json";

#[derive(Parser)]
#[command(
    name = "abscrape",
    version,
    about = "Extract abstracts from a conference program PDF into a JSON file"
)]
struct Cli {
    /// Program PDF, or a .txt file already extracted with pdftotext
    #[arg(default_value = DEFAULT_INPUT)]
    input_file: PathBuf,

    /// Write the extracted abstracts to this JSON file
    #[arg(short = 'O', long = "out", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Number of sample abstracts to show after writing
    #[arg(long, value_name = "N", default_value_t = 3)]
    preview: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::extract::run(cli.input_file, cli.out, cli.preview) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
