//! Case record shape and status vocabulary.
//!
//! DESIGN
//! ======
//! A case is a flat, immutable record. Status is kept as an enum with an
//! `Other` escape hatch so unknown strings still render (with a neutral
//! badge) instead of being rejected.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// One tracked legal/administrative matter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub case_name: String,
    pub status: CaseStatus,
    pub created: Date,
    pub due: Option<Date>,
    pub total_files: u32,
    /// Free-form display text such as `"2 of 4"`.
    pub releasable_files: String,
}

/// Workflow status of a case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    InProgress,
    Completed,
    PendingReview,
    Archived,
    /// Any status string outside the known set.
    Other(String),
}

impl CaseStatus {
    /// Display label, e.g. `"Pending Review"`.
    pub fn label(&self) -> &str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::PendingReview => "Pending Review",
            Self::Archived => "Archived",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a display label. Matching is exact after trimming; anything
    /// unrecognized becomes `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "In Progress" => Self::InProgress,
            "Completed" => Self::Completed,
            "Pending Review" => Self::PendingReview,
            "Archived" => Self::Archived,
            _ => Self::Other(raw.to_owned()),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for CaseStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CaseStatus> for String {
    fn from(value: CaseStatus) -> Self {
        match value {
            CaseStatus::Other(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}
