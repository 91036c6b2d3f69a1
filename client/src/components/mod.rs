//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render fixed page chrome from props; they own no business logic
//! and read shared state only through Leptos context.

pub mod auth_header;
pub mod field_message;
pub mod news_content;
pub mod test_page_layout;
