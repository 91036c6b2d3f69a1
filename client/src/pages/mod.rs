//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, form state)
//! and delegates rendering details to `components`.

pub mod api_docs;
pub mod create_test;
pub mod dashboard;
pub mod login;
pub mod new_password;
pub mod new_school;
