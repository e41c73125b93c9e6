//! Display formatting for cell values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::cell::CellValue;

/// Short en-US date, e.g. `3/1/2024`.
const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// How a column turns a raw cell into display text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Formatter {
    /// Pass the raw value through.
    #[default]
    Raw,
    /// Locale short date; `blank` is shown when the date is absent.
    Date { blank: &'static str },
}

impl Formatter {
    pub fn format(self, value: &CellValue) -> String {
        match (self, value) {
            (Self::Date { blank }, CellValue::Date(date)) => format_optional_date(*date, blank),
            (_, value) => value.as_text(),
        }
    }
}

/// Format a date as `M/D/YYYY`.
pub fn format_date(date: Date) -> String {
    date.format(SHORT_DATE).unwrap_or_else(|_| date.to_string())
}

/// Format an optional date, substituting `blank` when absent.
pub fn format_optional_date(date: Option<Date>, blank: &str) -> String {
    date.map_or_else(|| blank.to_owned(), format_date)
}
