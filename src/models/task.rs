use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Subject, TaskStatus};

/// A study task. The id is assigned by the store at creation time and never
/// changes; only `status` is ever mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub subject: Subject,
    pub priority: u8,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Request to add a task
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub subject: String,
    pub priority: u8,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Validated task fields, before the store assigns an id
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub subject: Subject,
    pub priority: u8,
    pub status: TaskStatus,
}

/// Request to update a task's status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: String,
}
