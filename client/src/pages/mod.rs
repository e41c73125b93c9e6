//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted by the router in `app` and delegates rendering of
//! anything non-trivial to `components`.

pub mod analytics;
pub mod cases;
pub mod dashboard;
pub mod not_found;
