use chrono::{Duration, Months};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::model::{RecurrenceType, Task, TaskDraft, TaskStatus};

/// Computes the next occurrence of a recurring task once it has been
/// completed. Returns `Ok(None)` when there is nothing to schedule: the
/// task does not recur, or it has no base due date to advance from.
///
/// The next due date advances from the task's own due date, so completing
/// late or early never shifts the cadence. The caller (one external
/// update-task trigger per completion transition) persists the draft;
/// at-most-once semantics are the storage layer's concern.
pub fn next_occurrence(task: &Task) -> Result<Option<TaskDraft>, ConfigurationError> {
    let interval = match task.recurrence_type {
        RecurrenceType::None => return Ok(None),
        RecurrenceType::CustomDays => match task.recurrence_interval {
            Some(days) if days > 0 => Some(days),
            _ => {
                return Err(ConfigurationError::MissingRecurrenceInterval { task_id: task.id });
            }
        },
        _ => None,
    };

    let Some(due) = task.due_date else {
        debug!(task_id = task.id, "recurring task has no due date, nothing to schedule");
        return Ok(None);
    };

    let next_due = match task.recurrence_type {
        RecurrenceType::None => unreachable!(),
        RecurrenceType::Daily => due + Duration::days(1),
        RecurrenceType::Weekly => due + Duration::weeks(1),
        // Day-of-month clamps: Jan 31 advances to Feb 29/28.
        RecurrenceType::Monthly => due + Months::new(1),
        RecurrenceType::CustomDays => due + Duration::days(i64::from(interval.unwrap())),
    };

    Ok(Some(TaskDraft {
        title: task.title.clone(),
        description: task.description.clone(),
        assignee_id: task.assignee_id,
        status: TaskStatus::NotStarted,
        priority: task.priority,
        due_date: next_due,
        recurrence_type: task.recurrence_type,
        recurrence_interval: task.recurrence_interval,
        original_task_id: task.chain_root(),
    }))
}
