//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is provided app-wide through Leptos context; `load` is a per-page
//! value type for async fetch outcomes.

pub mod auth;
pub mod load;
