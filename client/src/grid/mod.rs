//! Client-side grid engine: column configuration, filtering, sorting,
//! pagination and row selection over an in-memory row list.
//!
//! ARCHITECTURE
//! ============
//! The engine is pure data. Components own a `GridModel` inside a signal,
//! mutate it in event handlers, and render whatever `GridModel::view` yields.
//! Nothing here touches the DOM, so every behavior is unit-testable.
//!
//! Row types plug in through [`GridRow`], which maps a typed field key to a
//! [`cell::CellValue`]. Column behavior is declared with
//! [`column::ColumnDef`] using a fixed set of recognized options.

pub mod cell;
pub mod column;
pub mod filter;
pub mod format;
pub mod model;
pub mod pagination;
pub mod quick_filter;
pub mod selection;
pub mod sort;

use std::fmt;

use self::cell::CellValue;

/// A row the grid can display.
pub trait GridRow {
    /// Typed column key (usually a small `Copy` enum).
    type Field: Copy + Eq + fmt::Debug;

    /// Stable identity used for selection.
    fn row_id(&self) -> &str;

    /// Raw value of one field, before formatting.
    fn cell(&self, field: Self::Field) -> CellValue;
}
