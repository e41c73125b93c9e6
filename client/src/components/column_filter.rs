//! Per-column filter editors shown in the grid's filter row.
//!
//! DESIGN
//! ======
//! Editors keep the raw input locally and rebuild the column's filter model
//! on every change. Input that does not form a valid filter clears the
//! column filter instead of hiding rows. A shared `reset` counter lets the
//! grid's "Clear" action wipe every editor's local input.

#[cfg(test)]
#[path = "column_filter_test.rs"]
mod column_filter_test;

use leptos::prelude::*;

use crate::components::cases_grid::CaseField;
use crate::grid::column::{ColumnDef, FilterKind};
use crate::grid::filter::{
    ColumnFilter, DateFilter, DateFilterType, NumberFilter, NumberFilterType, SetFilter, TextFilter, TextFilterType,
};
use crate::grid::model::GridModel;
use crate::types::case::Case;

type Grid = RwSignal<GridModel<Case>>;

/// Set-filter model after toggling `value`; `None` means everything is selected.
pub fn toggle_set_value(current: Option<&SetFilter>, all: &[String], value: &str) -> Option<SetFilter> {
    let mut next = current.cloned().unwrap_or_else(|| SetFilter::new(all.iter().cloned()));
    next.toggle(value);
    if all.iter().all(|v| next.matches(v)) { None } else { Some(next) }
}

/// Set-filter model after clicking "(Select All)".
pub fn toggle_set_all(current: Option<&SetFilter>) -> Option<SetFilter> {
    match current {
        None => Some(SetFilter::default()),
        Some(_) => None,
    }
}

/// Whether `value` shows as checked in a set-filter list.
pub fn is_set_value_checked(current: Option<&SetFilter>, value: &str) -> bool {
    current.map_or(true, |filter| filter.matches(value))
}

fn current_set_filter(grid: Grid, field: CaseField) -> Option<SetFilter> {
    grid.with(|g| match g.filter_for(field) {
        Some(ColumnFilter::Set(filter)) => Some(filter.clone()),
        _ => None,
    })
}

/// Filter editor matching the column's configured filter kind.
#[component]
pub fn ColumnFilterEditor(grid: Grid, column: ColumnDef<CaseField>, reset: RwSignal<u64>) -> impl IntoView {
    let Some(field) = column.field else {
        return ().into_any();
    };
    match column.filter {
        FilterKind::Text { options, default } => text_editor(grid, field, options, default, reset),
        FilterKind::Number { options } => number_editor(grid, field, options, reset),
        FilterKind::Date => date_editor(grid, field, reset),
        FilterKind::Set => set_editor(grid, field),
        FilterKind::None => ().into_any(),
    }
}

fn text_editor(
    grid: Grid,
    field: CaseField,
    options: &'static [TextFilterType],
    default: TextFilterType,
    reset: RwSignal<u64>,
) -> AnyView {
    let kind = RwSignal::new(default);
    let text = RwSignal::new(String::new());
    let apply = move || {
        let filter = TextFilter::from_input(kind.get_untracked(), &text.get_untracked()).map(ColumnFilter::Text);
        grid.update(|g| g.set_filter(field, filter));
    };
    Effect::watch(
        move || reset.get(),
        move |_, _, _| {
            kind.set(default);
            text.set(String::new());
        },
        false,
    );

    view! {
        <div class="column-filter column-filter--text">
            <select
                class="column-filter__op"
                prop:value=move || kind.get().key()
                on:change=move |ev| {
                    if let Some(next) = TextFilterType::from_key(&event_target_value(&ev)) {
                        kind.set(next);
                        apply();
                    }
                }
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=option.key()>{option.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                class="column-filter__input"
                placeholder="Filter..."
                prop:value=move || text.get()
                on:input=move |ev| {
                    text.set(event_target_value(&ev));
                    apply();
                }
            />
        </div>
    }
    .into_any()
}

fn number_editor(grid: Grid, field: CaseField, options: &'static [NumberFilterType], reset: RwSignal<u64>) -> AnyView {
    let default = options.first().copied().unwrap_or_default();
    let kind = RwSignal::new(default);
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let apply = move || {
        let filter = NumberFilter::from_input(kind.get_untracked(), &from.get_untracked(), &to.get_untracked())
            .map(ColumnFilter::Number);
        grid.update(|g| g.set_filter(field, filter));
    };
    Effect::watch(
        move || reset.get(),
        move |_, _, _| {
            kind.set(default);
            from.set(String::new());
            to.set(String::new());
        },
        false,
    );

    view! {
        <div class="column-filter column-filter--number">
            <select
                class="column-filter__op"
                prop:value=move || kind.get().key()
                on:change=move |ev| {
                    if let Some(next) = NumberFilterType::from_key(&event_target_value(&ev)) {
                        kind.set(next);
                        apply();
                    }
                }
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=option.key()>{option.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="number"
                class="column-filter__input"
                placeholder="Filter..."
                prop:value=move || from.get()
                on:input=move |ev| {
                    from.set(event_target_value(&ev));
                    apply();
                }
            />
            <Show when=move || kind.get() == NumberFilterType::InRange>
                <input
                    type="number"
                    class="column-filter__input"
                    placeholder="To"
                    prop:value=move || to.get()
                    on:input=move |ev| {
                        to.set(event_target_value(&ev));
                        apply();
                    }
                />
            </Show>
        </div>
    }
    .into_any()
}

fn date_editor(grid: Grid, field: CaseField, reset: RwSignal<u64>) -> AnyView {
    let kind = RwSignal::new(DateFilterType::default());
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let apply = move || {
        let filter = DateFilter::from_input(kind.get_untracked(), &from.get_untracked(), &to.get_untracked())
            .map(ColumnFilter::Date);
        grid.update(|g| g.set_filter(field, filter));
    };
    Effect::watch(
        move || reset.get(),
        move |_, _, _| {
            kind.set(DateFilterType::default());
            from.set(String::new());
            to.set(String::new());
        },
        false,
    );

    view! {
        <div class="column-filter column-filter--date">
            <select
                class="column-filter__op"
                prop:value=move || kind.get().key()
                on:change=move |ev| {
                    if let Some(next) = DateFilterType::from_key(&event_target_value(&ev)) {
                        kind.set(next);
                        apply();
                    }
                }
            >
                {DateFilterType::ALL
                    .iter()
                    .map(|option| view! { <option value=option.key()>{option.label()}</option> })
                    .collect_view()}
            </select>
            <Show when=move || !kind.get().is_unary()>
                <input
                    type="date"
                    class="column-filter__input"
                    prop:value=move || from.get()
                    on:input=move |ev| {
                        from.set(event_target_value(&ev));
                        apply();
                    }
                />
            </Show>
            <Show when=move || kind.get() == DateFilterType::InRange>
                <input
                    type="date"
                    class="column-filter__input"
                    prop:value=move || to.get()
                    on:input=move |ev| {
                        to.set(event_target_value(&ev));
                        apply();
                    }
                />
            </Show>
        </div>
    }
    .into_any()
}

fn set_editor(grid: Grid, field: CaseField) -> AnyView {
    let values = StoredValue::new(grid.with_untracked(|g| g.distinct_values(field)));

    let all_checked = move || current_set_filter(grid, field).is_none();
    let on_select_all = move |_: leptos::ev::Event| {
        let next = toggle_set_all(current_set_filter(grid, field).as_ref());
        grid.update(|g| g.set_filter(field, next.map(ColumnFilter::Set)));
    };

    let items = values
        .get_value()
        .into_iter()
        .map(|value| {
            let label = value.clone();
            let checked_value = value.clone();
            let checked = move || is_set_value_checked(current_set_filter(grid, field).as_ref(), &checked_value);
            let on_toggle = move |_: leptos::ev::Event| {
                let next = values.with_value(|all| toggle_set_value(current_set_filter(grid, field).as_ref(), all, &value));
                grid.update(|g| g.set_filter(field, next.map(ColumnFilter::Set)));
            };
            view! {
                <label class="column-filter__option">
                    <input type="checkbox" prop:checked=checked on:change=on_toggle/>
                    {label}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="column-filter column-filter--set">
            <label class="column-filter__option column-filter__option--all">
                <input type="checkbox" prop:checked=all_checked on:change=on_select_all/>
                "(Select All)"
            </label>
            {items}
        </div>
    }
    .into_any()
}
