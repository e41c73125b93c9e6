//! Cases table: column configuration plus the grid rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns a `GridModel<Case>` in a local signal. Every control
//! (search box, filter row, header clicks, checkboxes, pager) mutates that
//! model; the table body re-renders from `GridModel::view`.

#[cfg(test)]
#[path = "cases_grid_test.rs"]
mod cases_grid_test;

use leptos::prelude::*;

use crate::components::column_filter::ColumnFilterEditor;
use crate::components::grid_pager::GridPager;
use crate::components::status_badge::StatusBadge;
use crate::grid::GridRow;
use crate::grid::cell::CellValue;
use crate::grid::column::{CellRenderer, ColumnDef, DefaultColDef, FilterKind, total_flex};
use crate::grid::filter::{NumberFilterType, TextFilterType};
use crate::grid::format::Formatter;
use crate::grid::model::GridModel;
use crate::grid::pagination::DEFAULT_PAGE_SIZE;
use crate::grid::quick_filter::QuickFilterScope;
use crate::types::case::Case;

/// Filterable/sortable fields of a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseField {
    CaseName,
    Status,
    Created,
    Due,
    TotalFiles,
    ReleasableFiles,
}

impl GridRow for Case {
    type Field = CaseField;

    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, field: CaseField) -> CellValue {
        match field {
            CaseField::CaseName => CellValue::Text(self.case_name.clone()),
            CaseField::Status => CellValue::Text(self.status.label().to_owned()),
            CaseField::Created => CellValue::Date(Some(self.created)),
            CaseField::Due => CellValue::Date(self.due),
            CaseField::TotalFiles => CellValue::Number(f64::from(self.total_files)),
            CaseField::ReleasableFiles => CellValue::Text(self.releasable_files.clone()),
        }
    }
}

const CASE_NAME_FILTERS: &[TextFilterType] =
    &[TextFilterType::Contains, TextFilterType::Equals, TextFilterType::StartsWith, TextFilterType::EndsWith];

const TOTAL_FILES_FILTERS: &[NumberFilterType] =
    &[NumberFilterType::Equals, NumberFilterType::LessThan, NumberFilterType::GreaterThan];

/// Column layout of the cases table, left to right.
pub fn case_columns() -> Vec<ColumnDef<CaseField>> {
    vec![
        ColumnDef::new(CaseField::CaseName, "Case Name")
            .with_checkbox_selection()
            .with_filter(FilterKind::Text { options: CASE_NAME_FILTERS, default: TextFilterType::Contains }),
        ColumnDef::new(CaseField::Status, "Status")
            .with_filter(FilterKind::Set)
            .with_renderer(CellRenderer::StatusBadge),
        ColumnDef::new(CaseField::Created, "Created")
            .with_filter(FilterKind::Date)
            .with_formatter(Formatter::Date { blank: "" }),
        ColumnDef::new(CaseField::Due, "Due")
            .with_filter(FilterKind::Date)
            .with_formatter(Formatter::Date { blank: "-" }),
        ColumnDef::new(CaseField::TotalFiles, "Total Files")
            .with_filter(FilterKind::Number { options: TOTAL_FILES_FILTERS }),
        ColumnDef::new(CaseField::ReleasableFiles, "Releasable Files").with_filter(FilterKind::text()),
        ColumnDef::decoration("Actions", CellRenderer::ActionButton { label: "View" }),
    ]
}

/// Grid model configured for the cases table.
pub fn case_grid_model(cases: Vec<Case>) -> GridModel<Case> {
    GridModel::new(cases, case_columns())
        .with_default_col_def(DefaultColDef::default())
        .with_quick_filter_scope(QuickFilterScope::Column(CaseField::CaseName))
        .with_page_size(DEFAULT_PAGE_SIZE)
}

fn header_class(sortable: bool, resizable: bool) -> String {
    let mut class = String::from("grid__header");
    if sortable {
        class.push_str(" grid__header--sortable");
    }
    if resizable {
        class.push_str(" grid__header--resizable");
    }
    class
}

fn filter_button_class(open: bool) -> &'static str {
    if open { "btn btn--outlined cases-grid__filter-toggle btn--active" } else { "btn btn--outlined cases-grid__filter-toggle" }
}

fn filter_row_class(open: bool) -> &'static str {
    if open { "grid__filter-row" } else { "grid__filter-row grid__filter-row--hidden" }
}

/// Interactive, paginated, filterable, sortable table of cases.
#[component]
pub fn CasesGrid(cases: Vec<Case>) -> impl IntoView {
    let grid = RwSignal::new(case_grid_model(cases));
    let show_filters = RwSignal::new(false);
    let filter_reset = RwSignal::new(0_u64);
    let (columns, defaults) = grid.with_untracked(|g| (g.columns().to_vec(), *g.default_col_def()));
    let flex_total = total_flex(&columns, &defaults);

    let headers = columns
        .iter()
        .map(|column| {
            let label = column.header_name;
            let field = column.field;
            let sortable = column.is_sortable(&defaults);
            let class = header_class(sortable, defaults.resizable);
            let style = column.header_style(&defaults, flex_total);
            let select_all = column.header_checkbox_selection.then(|| {
                view! {
                    <input
                        type="checkbox"
                        class="grid__checkbox"
                        aria-label="Select all rows"
                        prop:checked=move || grid.with(GridModel::all_rows_selected)
                        on:change=move |_| grid.update(GridModel::toggle_all_rows)
                    />
                }
            });
            let indicator = move || {
                field
                    .and_then(|f| grid.with(|g| g.sort_direction(f)))
                    .map(|d| d.indicator())
                    .unwrap_or_default()
            };
            let aria_sort = move || {
                field
                    .and_then(|f| grid.with(|g| g.sort_direction(f)))
                    .map_or("none", |d| d.aria())
            };
            let on_sort = move |_: leptos::ev::MouseEvent| {
                if let Some(f) = field {
                    grid.update(|g| g.toggle_sort(f));
                }
            };
            view! {
                <th class=class style=style aria-sort=aria_sort scope="col">
                    {select_all}
                    <span class="grid__header-label" on:click=on_sort>
                        {label}
                        <span class="grid__sort-indicator">{indicator}</span>
                    </span>
                </th>
            }
        })
        .collect_view();

    let filter_cells = columns
        .iter()
        .map(|column| {
            let editor = column
                .is_filterable(&defaults)
                .then(|| view! { <ColumnFilterEditor grid=grid column=column.clone() reset=filter_reset/> });
            view! { <th class="grid__filter-cell">{editor}</th> }
        })
        .collect_view();

    let body_columns = columns;
    let body = move || {
        grid.with(|g| {
            let page = g.view();
            if page.rows.is_empty() {
                return view! {
                    <tr class="grid__row grid__row--empty">
                        <td colspan=body_columns.len().to_string()>"No Rows To Show"</td>
                    </tr>
                }
                .into_any();
            }
            page.rows
                .into_iter()
                .map(|case| render_row(grid, g, case, &body_columns))
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="cases-grid">
            <div class="cases-grid__header">
                <h1 class="cases-grid__title">"Cases"</h1>
                <button class="btn btn--contained cases-grid__create">"+ Create New"</button>
            </div>

            <div class="cases-grid__toolbar">
                <input
                    type="search"
                    class="cases-grid__search"
                    placeholder="Search"
                    prop:value=move || grid.with(|g| g.quick_filter_text().to_owned())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        #[cfg(feature = "hydrate")]
                        log::debug!("quick filter: {text:?}");
                        grid.update(|g| g.set_quick_filter(text));
                    }
                />
                <button
                    class=move || filter_button_class(show_filters.get())
                    on:click=move |_| show_filters.update(|open| *open = !*open)
                >
                    "Filter"
                    {move || {
                        let count = grid.with(GridModel::active_filter_count);
                        (count > 0).then(|| view! { <span class="cases-grid__filter-count">{count}</span> })
                    }}
                </button>
                <Show when=move || grid.with(|g| g.active_filter_count() > 0)>
                    <button
                        class="btn btn--text"
                        on:click=move |_| {
                            grid.update(GridModel::clear_filters);
                            filter_reset.update(|n| *n += 1);
                        }
                    >
                        "Clear"
                    </button>
                </Show>
            </div>

            <div class="grid" role="grid">
                <table class="grid__table">
                    <thead>
                        <tr class="grid__header-row">{headers}</tr>
                        <tr class=move || filter_row_class(show_filters.get())>
                            {filter_cells}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
                <GridPager grid=grid/>
            </div>
        </div>
    }
}

fn render_row(
    grid: RwSignal<GridModel<Case>>,
    model: &GridModel<Case>,
    case: &Case,
    columns: &[ColumnDef<CaseField>],
) -> impl IntoView + use<> {
    let selected = model.selection().is_selected(&case.id);
    let row_class = if selected { "grid__row grid__row--selected" } else { "grid__row" };
    let cells = columns
        .iter()
        .map(|column| {
            let text = model.formatted(case, column);
            let checkbox = column.checkbox_selection.then(|| {
                let id = case.id.clone();
                view! {
                    <input
                        type="checkbox"
                        class="grid__checkbox"
                        aria-label="Select row"
                        prop:checked=selected
                        on:change=move |_| grid.update(|g| g.toggle_row(&id))
                    />
                }
            });
            let content = match column.renderer {
                CellRenderer::Text => text.into_any(),
                CellRenderer::StatusBadge => view! { <StatusBadge status=text/> }.into_any(),
                CellRenderer::ActionButton { label } => {
                    view! { <button class="btn btn--text grid__action">{label}</button> }.into_any()
                }
            };
            view! { <td class="grid__cell">{checkbox}{content}</td> }
        })
        .collect_view();

    view! { <tr class=row_class data-row-id=case.id.clone()>{cells}</tr> }
}
