//! Column classification: quantitative vs. qualitative.
//!
//! Each column is inspected over a bounded sample window and tagged either
//! [`ColumnKind::Numeric`] or [`ColumnKind::Text`]. The tags live in a single
//! ordered mapping so the numeric/text split is a partition by construction:
//! no column can carry both tags or neither.

use log::debug;
use serde::Serialize;

use crate::dataset::Dataset;

/// Number of leading rows inspected per column when classifying.
pub const SAMPLE_WINDOW_ROWS: usize = 100;
/// Minimum share of numeric-like values (among non-empty sampled values)
/// required to tag a column Numeric.
pub const NUMERIC_RATIO_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Per-column classification in first-header-row column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClassification {
    entries: Vec<(String, ColumnKind)>,
}

impl ColumnClassification {
    pub fn entries(&self) -> &[(String, ColumnKind)] {
        &self.entries
    }

    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns_of_kind(ColumnKind::Numeric)
    }

    pub fn text_columns(&self) -> Vec<String> {
        self.columns_of_kind(ColumnKind::Text)
    }

    fn columns_of_kind(&self, kind: ColumnKind) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Classifies every column of a non-empty dataset.
///
/// For each column the first `min(row_count, 100)` rows are sampled. Values
/// that are present and non-empty count toward `total_valid`; of those, values
/// with a finite numeric prefix count toward `numeric_count`. A column is
/// Numeric iff it has at least one valid sampled value and the numeric share
/// reaches the 50% threshold. Columns whose sampled values are all empty
/// carry no numeric evidence and fall back to Text.
pub fn classify_columns(dataset: &Dataset) -> ColumnClassification {
    let window = dataset.row_count().min(SAMPLE_WINDOW_ROWS);
    let entries = dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let mut total_valid = 0usize;
            let mut numeric_count = 0usize;
            for cell in dataset.column_cells(idx).take(window) {
                if cell.is_empty() {
                    continue;
                }
                total_valid += 1;
                if cell.numeric_value().is_some() {
                    numeric_count += 1;
                }
            }
            let kind = if total_valid > 0
                && numeric_count as f64 / total_valid as f64 >= NUMERIC_RATIO_THRESHOLD
            {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            };
            debug!(
                "Column '{name}': {numeric_count}/{total_valid} numeric-like in {window}-row window -> {kind:?}"
            );
            (name.clone(), kind)
        })
        .collect();
    ColumnClassification { entries }
}
