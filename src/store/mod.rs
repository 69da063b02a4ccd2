//! Storage boundary for the task backend.
//!
//! Persistence is delegated to a remote hosted database; this module
//! defines the four operations the page needs as a trait so the web layer
//! and tests never depend on a live service. [`http::HttpStore`] is the
//! production implementation; [`memory::MemoryStore`] backs the tests.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{NewTask, Task, TaskId};

/// The generic query client over the logical `task` table.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert one row; the backend assigns `id` and `created_at` and the
    /// created row is returned. All-or-nothing: a failure inserts nothing.
    async fn insert(&self, draft: &NewTask) -> StoreResult<Task>;

    /// All rows, ordered ascending by `created_at`. Empty vec when none.
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Set `description` on the row with the given id. Succeeds even when
    /// the filter matches no rows, mirroring the backend's semantics.
    async fn update_description(&self, id: TaskId, description: &str) -> StoreResult<()>;

    /// Delete the row with the given id. Succeeds when no row matches.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}
