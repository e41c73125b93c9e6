//! Free-text quick filter.

#[cfg(test)]
#[path = "quick_filter_test.rs"]
mod quick_filter_test;

/// Which cells the quick filter searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickFilterScope<F> {
    /// Formatted text of every field-backed column.
    AllColumns,
    /// Formatted text of one column.
    Column(F),
}

/// Case-insensitive substring search over a row's searchable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickFilter<F> {
    pub text: String,
    pub scope: QuickFilterScope<F>,
}

impl<F> QuickFilter<F> {
    pub fn new(scope: QuickFilterScope<F>) -> Self {
        Self { text: String::new(), scope }
    }

    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether `haystack` contains the filter text. Inactive filters match everything.
    pub fn matches(&self, haystack: &str) -> bool {
        let needle = self.text.trim();
        needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}
