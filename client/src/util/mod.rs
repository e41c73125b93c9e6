//! Browser-facing helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything that touches `window` lives here behind the `hydrate` feature so
//! pages and components stay renderable on the server.

pub mod theme;
