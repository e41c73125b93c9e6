use super::*;
use crate::grid::filter::{ColumnFilter, DateFilter, DateFilterType, SetFilter, TextFilter};
use crate::services::case_service::get_cases;
use crate::types::case::CaseStatus;

fn column(grid: &GridModel<Case>, header: &str) -> ColumnDef<CaseField> {
    grid.columns()
        .iter()
        .find(|c| c.header_name == header)
        .cloned()
        .unwrap()
}

fn names(grid: &GridModel<Case>) -> Vec<String> {
    grid.view().rows.iter().map(|c| c.case_name.clone()).collect()
}

// =============================================================
// Column layout
// =============================================================

#[test]
fn columns_appear_in_display_order() {
    let headers: Vec<&str> = case_columns().iter().map(|c| c.header_name).collect();
    assert_eq!(
        headers,
        ["Case Name", "Status", "Created", "Due", "Total Files", "Releasable Files", "Actions"]
    );
}

#[test]
fn column_filter_kinds_match_field_types() {
    let cols = case_columns();
    assert!(matches!(cols[0].filter, FilterKind::Text { default: TextFilterType::Contains, .. }));
    assert_eq!(cols[1].filter, FilterKind::Set);
    assert_eq!(cols[2].filter, FilterKind::Date);
    assert_eq!(cols[3].filter, FilterKind::Date);
    assert_eq!(cols[4].filter, FilterKind::Number { options: TOTAL_FILES_FILTERS });
    assert_eq!(cols[5].filter, FilterKind::text());
    assert_eq!(cols[6].filter, FilterKind::None);
    assert_eq!(cols[6].renderer, CellRenderer::ActionButton { label: "View" });
}

#[test]
fn only_case_name_has_checkbox_selection() {
    let cols = case_columns();
    assert!(cols[0].checkbox_selection && cols[0].header_checkbox_selection);
    assert!(cols[1..].iter().all(|c| !c.checkbox_selection));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn cases_view_shows_every_record_on_one_page() {
    let grid = case_grid_model(get_cases());
    let view = grid.view();
    assert_eq!(view.rows.len(), get_cases().len());
    assert_eq!(view.page_count, 1);
    assert_eq!(grid.page_size(), 10);
}

#[test]
fn absent_due_date_renders_dash() {
    let grid = case_grid_model(get_cases());
    let due = column(&grid, "Due");
    let rows = grid.rows();
    assert_eq!(grid.formatted(&rows[2], &due), "-");
    assert_eq!(grid.formatted(&rows[0], &due), "3/1/2024");
    assert_eq!(grid.formatted(&rows[1], &due), "3/15/2024");
}

#[test]
fn created_date_and_raw_columns_format() {
    let grid = case_grid_model(get_cases());
    let row = &grid.rows()[1];
    assert_eq!(grid.formatted(row, &column(&grid, "Created")), "1/15/2024");
    assert_eq!(grid.formatted(row, &column(&grid, "Status")), "Pending Review");
    assert_eq!(grid.formatted(row, &column(&grid, "Total Files")), "6");
    assert_eq!(grid.formatted(row, &column(&grid, "Releasable Files")), "3 of 6");
    assert_eq!(grid.formatted(row, &column(&grid, "Actions")), "");
}

#[test]
fn empty_case_list_renders_empty_table() {
    let grid = case_grid_model(Vec::new());
    let view = grid.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.page_count, 1);
}

// =============================================================
// Quick filter
// =============================================================

#[test]
fn quick_filter_case_2_leaves_one_row() {
    let mut grid = case_grid_model(get_cases());
    grid.set_quick_filter("Case 2");
    assert_eq!(names(&grid), ["Case 2"]);
}

#[test]
fn quick_filter_is_case_insensitive() {
    let mut grid = case_grid_model(get_cases());
    grid.set_quick_filter("cAsE 3");
    assert_eq!(names(&grid), ["Case 3"]);
    grid.set_quick_filter("case");
    assert_eq!(grid.view().rows.len(), 3);
    grid.set_quick_filter("Case 9");
    assert!(grid.view().rows.is_empty());
}

#[test]
fn quick_filter_searches_case_name_only() {
    let mut grid = case_grid_model(get_cases());
    grid.set_quick_filter("Pending");
    assert!(grid.view().rows.is_empty());
}

// =============================================================
// Column filters and sorting on real data
// =============================================================

#[test]
fn status_set_filter_keeps_selected_statuses() {
    let mut grid = case_grid_model(get_cases());
    assert_eq!(grid.distinct_values(CaseField::Status), ["Completed", "In Progress", "Pending Review"]);
    grid.set_filter(CaseField::Status, Some(ColumnFilter::Set(SetFilter::new(["Completed"]))));
    let view = grid.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].status, CaseStatus::Completed);
}

#[test]
fn due_blank_filter_finds_open_ended_case() {
    let mut grid = case_grid_model(get_cases());
    let blank = DateFilter::from_input(DateFilterType::Blank, "", "").unwrap();
    grid.set_filter(CaseField::Due, Some(ColumnFilter::Date(blank)));
    assert_eq!(names(&grid), ["Case 3"]);

    let before = DateFilter::from_input(DateFilterType::LessThan, "2024-03-10", "").unwrap();
    grid.set_filter(CaseField::Due, Some(ColumnFilter::Date(before)));
    assert_eq!(names(&grid), ["Case 1"]);
}

#[test]
fn releasable_files_text_filter() {
    let mut grid = case_grid_model(get_cases());
    let filter = TextFilter::from_input(TextFilterType::EndsWith, "of 3").unwrap();
    grid.set_filter(CaseField::ReleasableFiles, Some(ColumnFilter::Text(filter)));
    assert_eq!(names(&grid), ["Case 3"]);
}

#[test]
fn sorting_by_total_files_descending() {
    let mut grid = case_grid_model(get_cases());
    grid.toggle_sort(CaseField::TotalFiles);
    assert_eq!(names(&grid), ["Case 3", "Case 1", "Case 2"]);
    grid.toggle_sort(CaseField::TotalFiles);
    assert_eq!(names(&grid), ["Case 2", "Case 1", "Case 3"]);
}

#[test]
fn sorting_by_due_puts_blank_first() {
    let mut grid = case_grid_model(get_cases());
    grid.toggle_sort(CaseField::Due);
    assert_eq!(names(&grid), ["Case 3", "Case 1", "Case 2"]);
}

#[test]
fn selecting_rows_does_not_change_view() {
    let mut grid = case_grid_model(get_cases());
    grid.toggle_row("1");
    grid.toggle_row("3");
    assert_eq!(grid.selection().len(), 2);
    assert_eq!(grid.view().rows.len(), 3);
}

#[test]
fn header_helpers_pick_css_classes() {
    assert_eq!(header_class(true, true), "grid__header grid__header--sortable grid__header--resizable");
    assert_eq!(header_class(false, true), "grid__header grid__header--resizable");
    assert_eq!(filter_row_class(false), "grid__filter-row grid__filter-row--hidden");
    assert!(filter_button_class(true).contains("btn--active"));
}

#[test]
fn non_resizable_default_drops_resize_class() {
    let defaults = DefaultColDef { resizable: false, ..DefaultColDef::default() };
    let class = header_class(true, defaults.resizable);
    assert_eq!(class, "grid__header grid__header--sortable");
    assert!(!class.contains("resizable"));
}

#[test]
fn case_grid_model_uses_default_col_def() {
    let grid = case_grid_model(get_cases());
    let defaults = grid.default_col_def();
    assert_eq!(defaults.min_width, 150);
    assert!(defaults.resizable);
    let total = total_flex(grid.columns(), defaults);
    assert_eq!(total, 7);
    assert_eq!(grid.columns()[0].header_style(defaults, total), "min-width: 150px; width: 14.29%");
}

// =============================================================
// Server rendering
// =============================================================

#[cfg(feature = "ssr")]
fn render_grid(cases: Vec<Case>) -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| view! { <CasesGrid cases=cases/> }.to_html())
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_cases_grid_has_one_table_row_per_case() {
    let html = render_grid(get_cases());
    assert_eq!(html.matches("data-row-id=").count(), get_cases().len());
    for case in get_cases() {
        assert!(html.contains(&case.case_name), "missing {}", case.case_name);
    }
    assert!(!html.contains("No Rows To Show"));
    assert!(html.contains("Page 1 of 1"));
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_headers_carry_width_and_resize_hooks() {
    let html = render_grid(get_cases());
    assert_eq!(html.matches("grid__header--resizable").count(), case_columns().len());
    assert!(html.contains("min-width: 150px"));
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_empty_grid_shows_placeholder_row() {
    let html = render_grid(Vec::new());
    assert_eq!(html.matches("data-row-id=").count(), 0);
    assert!(html.contains("No Rows To Show"));
}
