//! Analysis orchestration: classification, statistics, and sampling merged
//! into one result structure.
//!
//! [`analyze`] is a pure transformation over an in-memory [`Dataset`]. It
//! performs no I/O, holds no shared state, and is safe to call from any
//! number of threads at once.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::{
    classify::{self, ColumnKind},
    dataset::Dataset,
    sample::{self, QualitativeSummary},
    stats::{self, NumericStats},
};

pub const NO_DATA_ERROR: &str = "No data to analyze";

/// Dataset dimensions plus the ordered classification lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub total_rows: usize,
    pub total_columns: usize,
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
}

/// Full per-column summary for a non-empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub quantitative: BTreeMap<String, NumericStats>,
    pub qualitative: BTreeMap<String, QualitativeSummary>,
    pub metadata: AnalysisMetadata,
}

/// Result of one analysis invocation. Serializes either as the report or as
/// `{"error": "No data to analyze"}` for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    NoData { error: String },
}

impl AnalysisOutcome {
    fn no_data() -> Self {
        AnalysisOutcome::NoData {
            error: NO_DATA_ERROR.to_string(),
        }
    }
}

/// Analyzes a dataset into per-column summaries.
///
/// Columns are classified once over the sample window; Numeric columns then
/// get full-dataset statistics and Text columns get bounded value samples.
/// A Numeric column with zero parseable values overall is omitted from
/// `quantitative` but stays listed in `metadata.numericColumns`.
pub fn analyze(dataset: &Dataset) -> AnalysisOutcome {
    if dataset.is_empty() {
        return AnalysisOutcome::no_data();
    }

    let classification = classify::classify_columns(dataset);

    let mut quantitative = BTreeMap::new();
    let mut qualitative = BTreeMap::new();
    for (idx, (name, kind)) in classification.entries().iter().enumerate() {
        match kind {
            ColumnKind::Numeric => {
                if let Some(column_stats) = stats::compute_numeric_stats(dataset, idx) {
                    quantitative.insert(name.clone(), column_stats);
                }
            }
            ColumnKind::Text => {
                qualitative.insert(name.clone(), sample::summarize_text_column(dataset, idx));
            }
        }
    }

    let metadata = AnalysisMetadata {
        total_rows: dataset.row_count(),
        total_columns: dataset.column_count(),
        numeric_columns: classification.numeric_columns(),
        text_columns: classification.text_columns(),
    };
    info!(
        "Analyzed {} row(s): {} numeric, {} text column(s)",
        metadata.total_rows,
        metadata.numeric_columns.len(),
        metadata.text_columns.len()
    );

    AnalysisOutcome::Report(AnalysisReport {
        quantitative,
        qualitative,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Cell;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn survey_dataset() -> Dataset {
        Dataset::new(
            vec!["age".to_string(), "comment".to_string()],
            vec![
                vec![text("25"), text("good")],
                vec![text("30"), text("")],
                vec![text("invalid"), text("great")],
            ],
        )
    }

    #[test]
    fn empty_dataset_reports_the_designated_error() {
        let dataset = Dataset::new(vec!["age".to_string()], Vec::new());
        let outcome = analyze(&dataset);
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json, serde_json::json!({ "error": "No data to analyze" }));
    }

    #[test]
    fn mixed_dataset_produces_both_sections() {
        let AnalysisOutcome::Report(report) = analyze(&survey_dataset()) else {
            panic!("expected report");
        };

        let age = &report.quantitative["age"];
        assert_eq!(age.count, 2);
        assert_eq!(age.sum, 55.0);
        assert_eq!(age.average, 27.5);
        assert_eq!(age.min, 25.0);
        assert_eq!(age.max, 30.0);
        assert_eq!(age.median, 27.5);

        let comment = &report.qualitative["comment"];
        assert_eq!(comment.total_entries, 3);
        assert_eq!(comment.non_empty_entries, 2);
        assert_eq!(comment.sample_comments, vec!["good", "great"]);

        assert_eq!(report.metadata.total_rows, 3);
        assert_eq!(report.metadata.total_columns, 2);
        assert_eq!(report.metadata.numeric_columns, vec!["age"]);
        assert_eq!(report.metadata.text_columns, vec!["comment"]);
    }

    #[test]
    fn quantitative_section_is_a_subset_of_numeric_metadata() {
        // Statistics may omit a numeric column (zero parseable values), but
        // never add one the classifier did not tag.
        let dataset = Dataset::new(
            vec!["age".to_string(), "rating".to_string()],
            vec![
                vec![text("25"), text("5")],
                vec![text("30"), Cell::Empty],
            ],
        );
        let AnalysisOutcome::Report(report) = analyze(&dataset) else {
            panic!("expected report");
        };
        for name in report.quantitative.keys() {
            assert!(report.metadata.numeric_columns.contains(name));
        }
        for name in report.qualitative.keys() {
            assert!(report.metadata.text_columns.contains(name));
        }
    }

    #[test]
    fn report_serializes_to_the_documented_shape() {
        let outcome = analyze(&survey_dataset());
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["metadata"]["totalRows"], 3);
        assert_eq!(json["metadata"]["numericColumns"][0], "age");
        assert_eq!(json["quantitative"]["age"]["median"], 27.5);
        assert_eq!(json["qualitative"]["comment"]["nonEmptyEntries"], 2);
    }
}
