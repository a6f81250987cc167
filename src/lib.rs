pub mod analyze;
pub mod classify;
pub mod cli;
pub mod dataset;
pub mod ingest;
pub mod io_utils;
pub mod sample;
pub mod stats;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::{
    analyze::{AnalysisOutcome, AnalysisReport},
    cli::{AnalyzeArgs, Cli, Commands, OutputFormat},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("survey_stats", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => handle_analyze(&args),
    }
}

fn handle_analyze(args: &AnalyzeArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;

    let dataset = ingest::load_dataset(&args.input, delimiter, encoding, args.limit)
        .with_context(|| format!("Error processing file: {}", args.input.display()))?;

    let outcome = analyze::analyze(&dataset);
    match args.format {
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(&outcome).context("Serializing analysis result")?;
            println!("{rendered}");
        }
        OutputFormat::Table => match &outcome {
            AnalysisOutcome::Report(report) => print_report_tables(report),
            AnalysisOutcome::NoData { error } => println!("{error}"),
        },
    }
    Ok(())
}

fn print_report_tables(report: &AnalysisReport) {
    let quant_headers = vec![
        "column".to_string(),
        "count".to_string(),
        "sum".to_string(),
        "average".to_string(),
        "min".to_string(),
        "max".to_string(),
        "median".to_string(),
    ];
    let quant_rows: Vec<Vec<String>> = report
        .metadata
        .numeric_columns
        .iter()
        .filter_map(|name| report.quantitative.get(name).map(|stats| (name, stats)))
        .map(|(name, stats)| {
            vec![
                name.clone(),
                stats.count.to_string(),
                format_number(stats.sum),
                format_number(stats.average),
                format_number(stats.min),
                format_number(stats.max),
                format_number(stats.median),
            ]
        })
        .collect();
    table::print_table(&quant_headers, &quant_rows);

    println!();
    let qual_headers = vec![
        "column".to_string(),
        "total".to_string(),
        "non_empty".to_string(),
        "sample".to_string(),
    ];
    let qual_rows: Vec<Vec<String>> = report
        .metadata
        .text_columns
        .iter()
        .filter_map(|name| report.qualitative.get(name).map(|summary| (name, summary)))
        .map(|(name, summary)| {
            vec![
                name.clone(),
                summary.total_entries.to_string(),
                summary.non_empty_entries.to_string(),
                summary.sample_comments.join("; "),
            ]
        })
        .collect();
    table::print_table(&qual_headers, &qual_rows);

    println!();
    println!(
        "{} row(s), {} column(s): {} numeric, {} text",
        report.metadata.total_rows,
        report.metadata.total_columns,
        report.metadata.numeric_columns.len(),
        report.metadata.text_columns.len()
    );
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}
