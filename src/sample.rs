//! Representative sampling for qualitative (free-text) columns.

use serde::Serialize;

use crate::dataset::Dataset;

/// Maximum number of non-empty values retained per column before counting.
pub const WORKING_SET_CAP: usize = 50;
/// Maximum number of values surfaced as the display sample.
pub const SAMPLE_DISPLAY_LIMIT: usize = 10;

/// Entry counts and a bounded value sample for one text column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitativeSummary {
    /// Total dataset row count, empty cells included.
    pub total_entries: usize,
    /// Size of the capped working set. When a column holds more than
    /// [`WORKING_SET_CAP`] non-empty values this reports the cap, not the
    /// true count; callers rely on that reading, so it stays as-is.
    pub non_empty_entries: usize,
    /// First [`SAMPLE_DISPLAY_LIMIT`] values of the working set, in row order.
    pub sample_comments: Vec<String>,
}

/// Extracts the qualitative summary for one column.
///
/// Values are taken in row order, trimmed, and dropped when empty or missing.
/// The first 50 survivors form the working set; the first 10 of those are the
/// display sample.
pub fn summarize_text_column(dataset: &Dataset, column: usize) -> QualitativeSummary {
    let comments: Vec<String> = dataset
        .column_cells(column)
        .filter_map(|cell| cell.non_empty_text())
        .take(WORKING_SET_CAP)
        .collect();

    let non_empty_entries = comments.len();
    let mut sample_comments = comments;
    sample_comments.truncate(SAMPLE_DISPLAY_LIMIT);

    QualitativeSummary {
        total_entries: dataset.row_count(),
        non_empty_entries,
        sample_comments,
    }
}
