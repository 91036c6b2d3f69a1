//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` is the single HTTP entry point, `api` wraps it per endpoint, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod fetch;
pub mod types;
