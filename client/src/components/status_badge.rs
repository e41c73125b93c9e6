//! Color-coded case status pill.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::types::case::CaseStatus;

/// Palette entry for a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Info,
    Success,
    Warning,
    Archived,
    /// Fallback for statuses with no mapping.
    Neutral,
}

impl BadgeTone {
    pub fn for_status(status: &CaseStatus) -> Self {
        match status {
            CaseStatus::InProgress => Self::Info,
            CaseStatus::Completed => Self::Success,
            CaseStatus::PendingReview => Self::Warning,
            CaseStatus::Archived => Self::Archived,
            CaseStatus::Other(_) => Self::Neutral,
        }
    }

    /// Background color of the pill.
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#0288d1",
            Self::Success => "#2e7d32",
            Self::Warning => "#ed6c02",
            Self::Archived => "#546e7a",
            Self::Neutral => "#9e9e9e",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "status-badge status-badge--info",
            Self::Success => "status-badge status-badge--success",
            Self::Warning => "status-badge status-badge--warning",
            Self::Archived => "status-badge status-badge--archived",
            Self::Neutral => "status-badge status-badge--neutral",
        }
    }
}

/// Status pill for one case; `status` is the display label.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let tone = BadgeTone::for_status(&CaseStatus::parse(&status));
    view! {
        <span class=tone.class() style=format!("background-color: {}", tone.color())>
            {status}
        </span>
    }
}
