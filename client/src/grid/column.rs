//! Column configuration with a fixed vocabulary of recognized options.

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use super::filter::{NumberFilterType, TextFilterType};
use super::format::Formatter;

/// Which filter editor a column offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    /// Column cannot be filtered.
    #[default]
    None,
    Text { options: &'static [TextFilterType], default: TextFilterType },
    /// Categorical match over the distinct values present in the rows.
    Set,
    Number { options: &'static [NumberFilterType] },
    Date,
}

impl FilterKind {
    /// Text filter offering every comparison, defaulting to `contains`.
    pub const fn text() -> Self {
        Self::Text { options: TextFilterType::ALL, default: TextFilterType::Contains }
    }

    pub const fn number() -> Self {
        Self::Number { options: NumberFilterType::ALL }
    }
}

/// How a cell is presented beyond its formatted text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellRenderer {
    #[default]
    Text,
    /// Color-coded pill keyed by the cell text.
    StatusBadge,
    /// A button with no row value; clicking it does nothing yet.
    ActionButton { label: &'static str },
}

/// Defaults merged into every column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultColDef {
    pub flex: u32,
    pub min_width: u32,
    pub filterable: bool,
    pub sortable: bool,
    pub resizable: bool,
}

impl Default for DefaultColDef {
    fn default() -> Self {
        Self { flex: 1, min_width: 150, filterable: true, sortable: true, resizable: true }
    }
}

/// One column of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef<F> {
    /// Backing row field; `None` for decoration columns such as actions.
    pub field: Option<F>,
    pub header_name: &'static str,
    pub filter: FilterKind,
    pub formatter: Formatter,
    pub renderer: CellRenderer,
    /// Overrides `DefaultColDef::sortable` when set.
    pub sortable: Option<bool>,
    /// Overrides `DefaultColDef::flex` when set.
    pub flex: Option<u32>,
    pub checkbox_selection: bool,
    pub header_checkbox_selection: bool,
}

impl<F: Copy> ColumnDef<F> {
    pub fn new(field: F, header_name: &'static str) -> Self {
        Self {
            field: Some(field),
            header_name,
            filter: FilterKind::None,
            formatter: Formatter::Raw,
            renderer: CellRenderer::Text,
            sortable: None,
            flex: None,
            checkbox_selection: false,
            header_checkbox_selection: false,
        }
    }

    /// A column with no backing field.
    pub fn decoration(header_name: &'static str, renderer: CellRenderer) -> Self {
        Self {
            field: None,
            header_name,
            filter: FilterKind::None,
            formatter: Formatter::Raw,
            renderer,
            sortable: Some(false),
            flex: None,
            checkbox_selection: false,
            header_checkbox_selection: false,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterKind) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: CellRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Row checkboxes in this column plus a select-all box in its header.
    #[must_use]
    pub fn with_checkbox_selection(mut self) -> Self {
        self.checkbox_selection = true;
        self.header_checkbox_selection = true;
        self
    }

    pub fn is_sortable(&self, defaults: &DefaultColDef) -> bool {
        self.field.is_some() && self.sortable.unwrap_or(defaults.sortable)
    }

    pub fn is_filterable(&self, defaults: &DefaultColDef) -> bool {
        self.field.is_some() && defaults.filterable && self.filter != FilterKind::None
    }

    pub fn flex(&self, defaults: &DefaultColDef) -> u32 {
        self.flex.unwrap_or(defaults.flex)
    }

    /// Inline style of the header cell. Flex weights become a share of the
    /// table width; `total_flex` is the sum over all columns.
    pub fn header_style(&self, defaults: &DefaultColDef, total_flex: u32) -> String {
        let mut style = format!("min-width: {}px", defaults.min_width);
        if total_flex > 0 {
            let share = f64::from(self.flex(defaults)) * 100.0 / f64::from(total_flex);
            style.push_str(&format!("; width: {share:.2}%"));
        }
        style
    }
}

/// Sum of the flex weights of `columns`.
pub fn total_flex<F: Copy>(columns: &[ColumnDef<F>], defaults: &DefaultColDef) -> u32 {
    columns.iter().map(|c| c.flex(defaults)).sum()
}
