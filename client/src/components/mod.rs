//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (`navbar`) and the cases grid with its
//! filter editors, pager and status badges.

pub mod cases_grid;
pub mod column_filter;
pub mod grid_pager;
pub mod navbar;
pub mod status_badge;
