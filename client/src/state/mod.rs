//! Shared client-side state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Only app-wide presentation state lives here. Grid interaction state is
//! local to the grid component.

pub mod ui;
