//! File ingestion into the normalized [`Dataset`] form.
//!
//! Supported inputs are delimited text (`csv`, `tsv`, or stdin via `-`) and
//! spreadsheets (`xls`, `xlsx`, first sheet only). Both paths produce the
//! same structure: headers from the first (non-empty) row, one cell row per
//! data row. Everything downstream of this module is pure computation.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use encoding_rs::Encoding;
use log::info;
use thiserror::Error;

use crate::{
    dataset::{Cell, Dataset},
    io_utils,
};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file type '{extension}'. Expected csv, tsv, xls, or xlsx")]
    Unsupported { extension: String },
    #[error("Spreadsheet {path} contains no sheets")]
    NoSheets { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Delimited,
    Spreadsheet,
}

fn detect_format(path: &Path) -> Result<InputFormat, IngestError> {
    if io_utils::is_dash(path) {
        return Ok(InputFormat::Delimited);
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "csv" | "tsv" => Ok(InputFormat::Delimited),
        "xls" | "xlsx" => Ok(InputFormat::Spreadsheet),
        _ => Err(IngestError::Unsupported { extension }),
    }
}

/// Loads a survey file into a [`Dataset`].
///
/// `limit` caps the number of data rows read (0 means unlimited); it is a
/// defensive ceiling for oversized uploads, not part of the analysis itself.
pub fn load_dataset(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
    limit: usize,
) -> Result<Dataset> {
    let dataset = match detect_format(path)? {
        InputFormat::Delimited => load_delimited(path, delimiter, encoding, limit)?,
        InputFormat::Spreadsheet => load_spreadsheet(path, limit)?,
    };
    info!(
        "Loaded {} row(s) across {} column(s) from {}",
        dataset.row_count(),
        dataset.column_count(),
        path.display()
    );
    Ok(dataset)
}

fn load_delimited(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
    limit: usize,
) -> Result<Dataset> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let header_record = reader
        .byte_headers()
        .with_context(|| format!("Reading header row from {path:?}"))?
        .clone();
    let columns = io_utils::decode_record(&header_record, encoding)
        .with_context(|| format!("Decoding header row from {path:?}"))?;

    let mut rows = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        if limit > 0 && rows.len() >= limit {
            break;
        }
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {}", row_idx + 2))?;
        if decoded.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(
            decoded
                .into_iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field)
                    }
                })
                .collect(),
        );
    }
    Ok(Dataset::new(columns, rows))
}

fn load_spreadsheet(path: &Path, limit: usize) -> Result<Dataset> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("Opening spreadsheet {path:?}"))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.display().to_string(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .with_context(|| format!("Reading sheet '{sheet}' from {path:?}"))?;

    let mut row_iter = range.rows();
    let header_row = row_iter
        .find(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .ok_or_else(|| anyhow!("Sheet '{sheet}' in {path:?} has no header row"))?;
    let columns: Vec<String> = header_row.iter().map(header_cell_to_string).collect();

    let mut rows = Vec::new();
    for row in row_iter {
        if limit > 0 && rows.len() >= limit {
            break;
        }
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        rows.push(row.iter().map(convert_cell).collect());
    }
    Ok(Dataset::new(columns, rows))
}

fn header_cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
