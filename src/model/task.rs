use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Undone,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecurrenceType {
    None,
    Daily,
    Weekly,
    Monthly,
    CustomDays,
}

/// A task snapshot as fetched from storage. Recurring tasks form a chain
/// linked through `original_task_id`, which points at the first occurrence;
/// the first occurrence itself carries `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<u64>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub recurrence_type: RecurrenceType,
    /// Days between occurrences. Required (and positive) for `custom_days`.
    pub recurrence_interval: Option<u32>,
    pub original_task_id: Option<u64>,
}

impl Task {
    /// Root id shared by the whole recurrence chain.
    pub fn chain_root(&self) -> u64 {
        self.original_task_id.unwrap_or(self.id)
    }
}

/// The next occurrence of a recurring task, produced by the scheduler and
/// persisted by the external storage layer. Has no id of its own yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<u64>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: DateTime<Utc>,
    pub recurrence_type: RecurrenceType,
    pub recurrence_interval: Option<u32>,
    pub original_task_id: u64,
}
