//! HTML templates for the task page.
//!
//! Templates are embedded at compile time using `include_str!` and filled
//! in with `{{placeholder}}` substitution at render time.

/// The task page: creation form, task table, and edit modal.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
