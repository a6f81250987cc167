//! Descriptive statistics for quantitative columns.
//!
//! Runs over the full dataset (unlike classification, which samples). Cells
//! without a finite numeric reading are silently excluded; a column where
//! nothing parses yields no statistics at all.

use itertools::Itertools;
use itertools::MinMaxResult;
use serde::Serialize;

use crate::dataset::Dataset;

/// Five-number summary for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Computes statistics for one column over every row of the dataset.
///
/// Returns `None` when no cell in the column parses as a number. This happens
/// when a column classified Numeric from its sample window turns out to hold
/// no parseable values overall; the orchestrator then omits the column from
/// the quantitative section while keeping it listed in metadata.
pub fn compute_numeric_stats(dataset: &Dataset, column: usize) -> Option<NumericStats> {
    let values: Vec<f64> = dataset
        .column_cells(column)
        .filter_map(|cell| cell.numeric_value())
        .collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let (min, max) = match values.iter().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => unreachable!("values is non-empty"),
        MinMaxResult::OneElement(only) => (*only, *only),
        MinMaxResult::MinMax(min, max) => (*min, *max),
    };

    Some(NumericStats {
        count,
        sum,
        average: sum / count as f64,
        min,
        max,
        median: median(values),
    })
}

/// Median of a non-empty value list: middle element for odd counts, mean of
/// the two middle elements for even counts.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
