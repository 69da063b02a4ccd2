//! Core types for taskdesk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier, assigned by the backend on insert.
/// The client never generates ids.
pub type TaskId = i64;

/// A task row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Set once at creation; immutable through this UI.
    pub title: String,
    /// The only field mutable after creation.
    pub description: String,
    /// Backend-assigned insertion timestamp; the list's sort key.
    pub created_at: DateTime<Utc>,
}

/// Draft for a task to be created. The backend assigns `id` and
/// `created_at`, so the insert payload carries only these two columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// True when both fields are empty, i.e. the form has been cleared.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}
