//! Per-column filter models.
//!
//! DESIGN
//! ======
//! Each filter kind has an option enum (the comparison) and a model (the
//! comparison plus its operands). Models are built from raw input text;
//! input that does not parse produces no model, which leaves the column
//! unfiltered rather than hiding every row.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::cell::CellValue;

/// Format produced by `<input type="date">`.
const INPUT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// =============================================================================
// TEXT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFilterType {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
}

impl TextFilterType {
    pub const ALL: &'static [Self] =
        &[Self::Contains, Self::NotContains, Self::Equals, Self::NotEqual, Self::StartsWith, Self::EndsWith];

    pub fn key(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::Equals => "equals",
            Self::NotEqual => "notEqual",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::NotContains => "Does not contain",
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::StartsWith => "Begins with",
            Self::EndsWith => "Ends with",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

/// Case-insensitive text comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFilter {
    pub kind: TextFilterType,
    pub text: String,
}

impl TextFilter {
    /// Build a filter from raw input; blank input yields `None`.
    pub fn from_input(kind: TextFilterType, raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { kind, text: text.to_owned() })
    }

    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        let needle = self.text.to_lowercase();
        match self.kind {
            TextFilterType::Contains => value.contains(&needle),
            TextFilterType::NotContains => !value.contains(&needle),
            TextFilterType::Equals => value == needle,
            TextFilterType::NotEqual => value != needle,
            TextFilterType::StartsWith => value.starts_with(&needle),
            TextFilterType::EndsWith => value.ends_with(&needle),
        }
    }
}

// =============================================================================
// NUMBER
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberFilterType {
    #[default]
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InRange,
}

impl NumberFilterType {
    pub const ALL: &'static [Self] = &[
        Self::Equals,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::InRange,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEqual => "notEqual",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqual => "lessThanOrEqual",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::InRange => "inRange",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::LessThan => "Less than",
            Self::LessThanOrEqual => "Less than or equal to",
            Self::GreaterThan => "Greater than",
            Self::GreaterThanOrEqual => "Greater than or equal to",
            Self::InRange => "Between",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

/// Numeric comparison. `InRange` bounds are exclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberFilter {
    pub kind: NumberFilterType,
    pub value: f64,
    pub value_to: Option<f64>,
}

impl NumberFilter {
    /// Build a filter from raw input; unparsable input yields `None`.
    /// `InRange` also needs a parsable upper bound.
    pub fn from_input(kind: NumberFilterType, raw: &str, raw_to: &str) -> Option<Self> {
        let value = raw.trim().parse::<f64>().ok()?;
        let value_to = match kind {
            NumberFilterType::InRange => Some(raw_to.trim().parse::<f64>().ok()?),
            _ => None,
        };
        Some(Self { kind, value, value_to })
    }

    #[allow(clippy::float_cmp)]
    pub fn matches(&self, cell: Option<f64>) -> bool {
        let Some(n) = cell else {
            return false;
        };
        match self.kind {
            NumberFilterType::Equals => n == self.value,
            NumberFilterType::NotEqual => n != self.value,
            NumberFilterType::LessThan => n < self.value,
            NumberFilterType::LessThanOrEqual => n <= self.value,
            NumberFilterType::GreaterThan => n > self.value,
            NumberFilterType::GreaterThanOrEqual => n >= self.value,
            NumberFilterType::InRange => {
                let upper = self.value_to.unwrap_or(f64::INFINITY);
                n > self.value && n < upper
            }
        }
    }
}

// =============================================================================
// DATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFilterType {
    #[default]
    Equals,
    NotEqual,
    LessThan,
    GreaterThan,
    InRange,
    Blank,
    NotBlank,
}

impl DateFilterType {
    pub const ALL: &'static [Self] =
        &[Self::Equals, Self::NotEqual, Self::LessThan, Self::GreaterThan, Self::InRange, Self::Blank, Self::NotBlank];

    pub fn key(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEqual => "notEqual",
            Self::LessThan => "lessThan",
            Self::GreaterThan => "greaterThan",
            Self::InRange => "inRange",
            Self::Blank => "blank",
            Self::NotBlank => "notBlank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::LessThan => "Before",
            Self::GreaterThan => "After",
            Self::InRange => "Between",
            Self::Blank => "Blank",
            Self::NotBlank => "Not blank",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }

    /// Whether this comparison takes no operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Blank | Self::NotBlank)
    }
}

/// Calendar-date comparison. Blank cells only satisfy `Blank`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFilter {
    pub kind: DateFilterType,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateFilter {
    /// Build a filter from `YYYY-MM-DD` input.
    pub fn from_input(kind: DateFilterType, raw: &str, raw_to: &str) -> Option<Self> {
        if kind.is_unary() {
            return Some(Self { kind, from: None, to: None });
        }
        let from = Some(parse_input_date(raw)?);
        let to = match kind {
            DateFilterType::InRange => Some(parse_input_date(raw_to)?),
            _ => None,
        };
        Some(Self { kind, from, to })
    }

    pub fn matches(&self, cell: Option<Date>) -> bool {
        match (self.kind, cell, self.from) {
            (DateFilterType::Blank, cell, _) => cell.is_none(),
            (DateFilterType::NotBlank, cell, _) => cell.is_some(),
            (_, None, _) | (_, _, None) => false,
            (DateFilterType::Equals, Some(date), Some(from)) => date == from,
            (DateFilterType::NotEqual, Some(date), Some(from)) => date != from,
            (DateFilterType::LessThan, Some(date), Some(from)) => date < from,
            (DateFilterType::GreaterThan, Some(date), Some(from)) => date > from,
            (DateFilterType::InRange, Some(date), Some(from)) => self.to.is_some_and(|to| date > from && date < to),
        }
    }
}

/// Parse the value of a date input (`YYYY-MM-DD`).
pub fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), INPUT_DATE).ok()
}

// =============================================================================
// SET
// =============================================================================

/// Categorical filter: only the selected values pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetFilter {
    pub selected: BTreeSet<String>,
}

impl SetFilter {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { selected: values.into_iter().map(Into::into).collect() }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    /// Flip one value in or out of the selection.
    pub fn toggle(&mut self, value: &str) {
        if !self.selected.remove(value) {
            self.selected.insert(value.to_owned());
        }
    }
}

// =============================================================================
// COLUMN FILTER
// =============================================================================

/// An active filter on one column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnFilter {
    Text(TextFilter),
    Number(NumberFilter),
    Date(DateFilter),
    Set(SetFilter),
}

impl ColumnFilter {
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            Self::Text(filter) => filter.matches(&cell.as_text()),
            Self::Number(filter) => filter.matches(cell.as_number()),
            Self::Date(filter) => filter.matches(cell.as_date()),
            Self::Set(filter) => filter.matches(&cell.as_text()),
        }
    }
}
