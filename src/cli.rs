use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about = "Profile survey-response files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a survey file into per-column statistics and text samples
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input file: .csv, .tsv, .xls, or .xlsx ('-' reads CSV from stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Output format for the analysis result
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Maximum number of data rows to ingest (0 means no limit)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON matching the analysis result contract
    Json,
    /// Human-readable tables for quantitative and qualitative sections
    Table,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" => Ok(b'\t'),
        value if value.chars().count() == 1 && value.is_ascii() => Ok(value.as_bytes()[0]),
        other => Err(format!(
            "Invalid delimiter '{other}'. Use a single ASCII character or 'tab'"
        )),
    }
}
