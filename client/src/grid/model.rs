//! Grid state and view computation.
//!
//! DESIGN
//! ======
//! `GridModel` owns the row data plus every piece of interaction state
//! (column filters, quick filter, sort, page, selection). `view()` derives
//! the visible page in one pass: filter -> sort -> paginate. Mutators that
//! change the filtered row set send the user back to the first page.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeSet;

use super::GridRow;
use super::column::{ColumnDef, DefaultColDef};
use super::filter::ColumnFilter;
use super::pagination::{PageSummary, Pagination};
use super::quick_filter::{QuickFilter, QuickFilterScope};
use super::selection::Selection;
use super::sort::{SortDirection, SortModel};

/// Full interaction state for one grid instance.
#[derive(Clone, Debug)]
pub struct GridModel<R: GridRow> {
    rows: Vec<R>,
    columns: Vec<ColumnDef<R::Field>>,
    default_col_def: DefaultColDef,
    filters: Vec<(R::Field, ColumnFilter)>,
    quick_filter: QuickFilter<R::Field>,
    sort: Option<SortModel<R::Field>>,
    pagination: Pagination,
    selection: Selection,
}

/// One rendered page of the grid.
#[derive(Debug)]
pub struct GridView<'a, R> {
    pub rows: Vec<&'a R>,
    /// 0-based page actually shown (after clamping).
    pub page: usize,
    pub page_count: usize,
    pub summary: PageSummary,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<R: GridRow> GridModel<R> {
    pub fn new(rows: Vec<R>, columns: Vec<ColumnDef<R::Field>>) -> Self {
        Self {
            rows,
            columns,
            default_col_def: DefaultColDef::default(),
            filters: Vec::new(),
            quick_filter: QuickFilter::new(QuickFilterScope::AllColumns),
            sort: None,
            pagination: Pagination::default(),
            selection: Selection::default(),
        }
    }

    #[must_use]
    pub fn with_default_col_def(mut self, defaults: DefaultColDef) -> Self {
        self.default_col_def = defaults;
        self
    }

    #[must_use]
    pub fn with_quick_filter_scope(mut self, scope: QuickFilterScope<R::Field>) -> Self {
        self.quick_filter.scope = scope;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pagination = Pagination::new(page_size);
        self
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnDef<R::Field>] {
        &self.columns
    }

    pub fn default_col_def(&self) -> &DefaultColDef {
        &self.default_col_def
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sort(&self) -> Option<SortModel<R::Field>> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn filter_for(&self, field: R::Field) -> Option<&ColumnFilter> {
        self.filters.iter().find(|(f, _)| *f == field).map(|(_, filter)| filter)
    }

    /// Install or clear (`None`) the filter on one column.
    pub fn set_filter(&mut self, field: R::Field, filter: Option<ColumnFilter>) {
        self.filters.retain(|(f, _)| *f != field);
        if let Some(filter) = filter {
            self.filters.push((field, filter));
        }
        self.pagination.first();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.quick_filter.text.clear();
        self.pagination.first();
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.len() + usize::from(self.quick_filter.is_active())
    }

    pub fn quick_filter_text(&self) -> &str {
        &self.quick_filter.text
    }

    pub fn set_quick_filter(&mut self, text: impl Into<String>) {
        self.quick_filter.text = text.into();
        self.pagination.first();
    }

    /// Distinct raw values of a column, sorted, for set-filter choices.
    pub fn distinct_values(&self, field: R::Field) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.cell(field).as_text())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Formatted display text of one cell.
    pub fn formatted(&self, row: &R, column: &ColumnDef<R::Field>) -> String {
        column
            .field
            .map(|field| column.formatter.format(&row.cell(field)))
            .unwrap_or_default()
    }

    fn searchable_text(&self, row: &R) -> String {
        match self.quick_filter.scope {
            QuickFilterScope::Column(field) => self
                .columns
                .iter()
                .find(|c| c.field == Some(field))
                .map_or_else(|| row.cell(field).as_text(), |c| self.formatted(row, c)),
            QuickFilterScope::AllColumns => self
                .columns
                .iter()
                .filter(|c| c.field.is_some())
                .map(|c| self.formatted(row, c))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn passes(&self, row: &R) -> bool {
        self.filters.iter().all(|(field, filter)| filter.matches(&row.cell(*field)))
            && (!self.quick_filter.is_active() || self.quick_filter.matches(&self.searchable_text(row)))
    }

    /// Indices of rows passing every filter, in display order.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.rows.len()).filter(|&i| self.passes(&self.rows[i])).collect();
        if let Some(sort) = self.sort {
            indices.sort_by(|&a, &b| {
                let ord = super::cell::compare_cells(&self.rows[a].cell(sort.field), &self.rows[b].cell(sort.field));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        indices
    }

    pub fn filtered_count(&self) -> usize {
        self.rows.iter().filter(|row| self.passes(row)).count()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header click on `field`. Ignored for columns that are not sortable.
    pub fn toggle_sort(&mut self, field: R::Field) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.field == Some(field) && c.is_sortable(&self.default_col_def));
        if sortable {
            self.sort = SortModel::toggle(self.sort, field);
        }
    }

    pub fn sort_direction(&self, field: R::Field) -> Option<SortDirection> {
        SortModel::direction_for(self.sort, field)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        let total = self.filtered_count();
        self.pagination.previous(total);
    }

    pub fn next_page(&mut self) {
        let total = self.filtered_count();
        self.pagination.next(total);
    }

    pub fn last_page(&mut self) {
        let total = self.filtered_count();
        self.pagination.last(total);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn toggle_row(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox: select every row (filtered or not), or clear.
    pub fn toggle_all_rows(&mut self) {
        let rows = &self.rows;
        self.selection.toggle_all(rows.iter().map(GridRow::row_id));
    }

    pub fn all_rows_selected(&self) -> bool {
        self.selection.contains_all(self.rows.iter().map(GridRow::row_id))
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    pub fn view(&self) -> GridView<'_, R> {
        let ordered = self.ordered_indices();
        let filtered_count = ordered.len();
        let bounds = self.pagination.bounds(filtered_count);
        let rows = ordered[bounds].iter().map(|&i| &self.rows[i]).collect();
        GridView {
            rows,
            page: self.pagination.effective_page(filtered_count),
            page_count: self.pagination.page_count(filtered_count),
            summary: self.pagination.summary(filtered_count),
            filtered_count,
            total_count: self.rows.len(),
            has_previous: self.pagination.has_previous(filtered_count),
            has_next: self.pagination.has_next(filtered_count),
        }
    }
}
