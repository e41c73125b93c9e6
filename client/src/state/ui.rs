//! App-wide presentation state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI chrome state shared by the navbar and shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}
