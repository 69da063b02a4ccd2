//! In-memory [`TaskStore`] for testing.
//!
//! Mirrors the backend's observable behavior: ids and creation timestamps
//! are assigned on insert, listing returns rows ascending by `created_at`,
//! and update/delete succeed even when the id filter matches nothing.
//! `set_fail` makes every subsequent operation return an error, which is
//! how the failure-path behavior of the page is exercised.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use super::TaskStore;
use crate::error::{RequestFailed, StoreResult};
use crate::types::{NewTask, Task, TaskId};

/// Fixed epoch for assigned timestamps; each insert advances one second,
/// so ordering is strict and deterministic.
const CREATED_AT_EPOCH: i64 = 1_750_000_000;

#[derive(Default)]
struct Inner {
    next_id: TaskId,
    rows: Vec<Task>,
    fail: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation returns `RequestFailed` until cleared.
    pub fn set_fail(&self, fail: bool) {
        self.inner.lock().unwrap().fail = fail;
    }

    fn check(inner: &Inner) -> StoreResult<()> {
        if inner.fail {
            Err(RequestFailed::new("injected backend failure"))
        } else {
            Ok(())
        }
    }

    fn stamp(id: TaskId) -> DateTime<Utc> {
        DateTime::from_timestamp(CREATED_AT_EPOCH + id, 0).expect("epoch offset in range")
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, draft: &NewTask) -> StoreResult<Task> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at: Self::stamp(inner.next_id),
        };
        inner.rows.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        let mut rows = inner.rows.clone();
        rows.sort_by_key(|t| t.created_at);
        Ok(rows)
    }

    async fn update_description(&self, id: TaskId, description: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        if let Some(row) = inner.rows.iter_mut().find(|t| t.id == id) {
            row.description = description.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner)?;
        inner.rows.retain(|t| t.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_stamps() {
        let store = MemoryStore::new();
        let a = store.insert(&NewTask::new("a", "1")).await.unwrap();
        let b = store.insert(&NewTask::new("b", "2")).await.unwrap();
        assert!(b.id > a.id);
        assert!(b.created_at > a.created_at);
    }

    #[tokio::test]
    async fn update_of_missing_id_succeeds_without_effect() {
        let store = MemoryStore::new();
        store.insert(&NewTask::new("a", "1")).await.unwrap();

        store.update_description(99, "x").await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows[0].description, "1");
    }

    #[tokio::test]
    async fn injected_failure_poisons_every_operation() {
        let store = MemoryStore::new();
        store.set_fail(true);
        assert!(store.list().await.is_err());
        assert!(store.insert(&NewTask::new("a", "1")).await.is_err());
        assert!(store.delete(1).await.is_err());

        store.set_fail(false);
        assert!(store.list().await.unwrap().is_empty());
    }
}
