//! Data providers feeding pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend; providers return static sample data so pages can be
//! rendered identically on the server and after hydration.

pub mod case_service;
