//! Typed cell values and their ordering.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cmp::Ordering;

use time::Date;

/// Raw value of a single cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Date cells may be blank.
    Date(Option<Date>),
    /// Columns without a backing field (e.g. actions).
    Empty,
}

impl CellValue {
    /// Unformatted text used by text and set filters.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => n.to_string(),
            Self::Date(Some(d)) => d.to_string(),
            Self::Date(None) | Self::Empty => String::new(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(d) => *d,
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Date(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

/// Ascending order between two cells of the same column.
///
/// Text compares case-insensitively, blank dates sort before any date.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}
