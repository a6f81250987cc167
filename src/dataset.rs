//! In-memory dataset model and the numeric-prefix value parser.
//!
//! A [`Dataset`] is the normalized form every ingestion path produces: an
//! ordered list of column names (taken from the header row) plus rows of
//! [`Cell`] values. All analysis passes operate on this structure; none of
//! them touch files or readers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Numeric reading of the cell, if one exists.
    ///
    /// Text cells go through [`parse_numeric_prefix`], so `"25"` and
    /// `"12abc"` both yield a value while `"abc"` does not. Non-finite
    /// numbers are treated as absent.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => n.is_finite().then_some(*n),
            Cell::Text(s) => parse_numeric_prefix(s),
            Cell::Empty => None,
        }
    }

    /// Trimmed display form of the cell, or `None` when the cell is empty
    /// or whitespace-only.
    pub fn non_empty_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Number(n) => Some(format_cell_number(*n)),
            Cell::Empty => None,
        }
    }

    /// True for absent cells and exact empty strings. Whitespace-only text
    /// is NOT empty here: classification counts it as a present value, while
    /// the qualitative sampler applies its own trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
            Cell::Empty => true,
        }
    }
}

/// Parses the longest valid numeric prefix of `value` as a finite float.
///
/// Mirrors leading-prefix float conversion: optional sign, digits, optional
/// fraction, optional exponent, with leading whitespace ignored. Trailing
/// non-numeric characters are allowed and discarded, so `"12abc"` parses to
/// `12.0`. Returns `None` when no digit is found or the result is not finite.
///
/// Prefix-only strings counting as numeric is deliberate: it matches how
/// survey exports with unit suffixes ("25 yrs") behave, at the cost of
/// treating mixed identifiers ("12abc") as numeric evidence.
pub fn parse_numeric_prefix(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut saw_digit = false;
    while matches!(bytes.get(end), Some(b'0'..=b'9')) {
        end += 1;
        saw_digit = true;
    }
    if matches!(bytes.get(end), Some(b'.')) {
        end += 1;
        while matches!(bytes.get(end), Some(b'0'..=b'9')) {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        if matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
                exp_end += 1;
            }
            end = exp_end;
        }
    }

    let parsed: f64 = trimmed[..end].parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

fn format_cell_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Ordered tabular data: column names from the header row plus one `Vec` of
/// cells per data row. Rows are padded or truncated to the column count at
/// construction, so every accessor can assume a rectangular shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.rows[row][column]
    }

    /// Iterates one column's cells in row order.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_parses_plain_numbers() {
        assert_eq!(parse_numeric_prefix("25"), Some(25.0));
        assert_eq!(parse_numeric_prefix("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric_prefix("  42 "), Some(42.0));
        assert_eq!(parse_numeric_prefix("+0.125"), Some(0.125));
        assert_eq!(parse_numeric_prefix(".5"), Some(0.5));
    }

    #[test]
    fn numeric_prefix_keeps_longest_valid_prefix() {
        assert_eq!(parse_numeric_prefix("12abc"), Some(12.0));
        assert_eq!(parse_numeric_prefix("3.14 rad"), Some(3.14));
        assert_eq!(parse_numeric_prefix("1e3x"), Some(1000.0));
        // A bare exponent marker is not part of the number.
        assert_eq!(parse_numeric_prefix("7e"), Some(7.0));
        assert_eq!(parse_numeric_prefix("2e+"), Some(2.0));
    }

    #[test]
    fn numeric_prefix_rejects_non_numeric_input() {
        assert_eq!(parse_numeric_prefix("abc"), None);
        assert_eq!(parse_numeric_prefix(""), None);
        assert_eq!(parse_numeric_prefix("   "), None);
        assert_eq!(parse_numeric_prefix("-"), None);
        assert_eq!(parse_numeric_prefix("."), None);
        assert_eq!(parse_numeric_prefix("e10"), None);
    }

    #[test]
    fn cell_numeric_value_covers_all_variants() {
        assert_eq!(Cell::Number(2.5).numeric_value(), Some(2.5));
        assert_eq!(Cell::Number(f64::NAN).numeric_value(), None);
        assert_eq!(Cell::Text("30".into()).numeric_value(), Some(30.0));
        assert_eq!(Cell::Text("invalid".into()).numeric_value(), None);
        assert_eq!(Cell::Empty.numeric_value(), None);
    }

    #[test]
    fn cell_non_empty_text_trims_and_filters() {
        assert_eq!(
            Cell::Text("  good  ".into()).non_empty_text(),
            Some("good".to_string())
        );
        assert_eq!(Cell::Text("   ".into()).non_empty_text(), None);
        assert_eq!(Cell::Number(4.0).non_empty_text(), Some("4".to_string()));
        assert_eq!(Cell::Empty.non_empty_text(), None);
    }

    #[test]
    fn dataset_pads_short_rows() {
        let dataset = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Cell::Text("1".into())]],
        );
        assert_eq!(dataset.cell(0, 1), &Cell::Empty);
        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.column_count(), 2);
    }
}
