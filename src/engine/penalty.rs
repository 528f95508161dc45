use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{PenaltySettings, Task, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PenaltyAssessment {
    pub total: f64,
    /// Penalty amounts bucketed by the overdue task's due day.
    pub by_day: BTreeMap<NaiveDate, f64>,
}

/// Sums penalties for overdue, incomplete tasks.
///
/// A task is overdue once its due instant is strictly before `now`; a task
/// due later today is not yet penalized. `now` is an explicit parameter so
/// historical reports can pass their `as_of` instant and stay reproducible
/// instead of drifting with the wall clock.
pub fn assess_penalties(
    tasks: &[Task],
    settings: &PenaltySettings,
    now: DateTime<Utc>,
) -> PenaltyAssessment {
    let mut assessment = PenaltyAssessment::default();

    for task in tasks {
        if task.status == TaskStatus::Completed {
            continue;
        }
        let Some(due) = task.due_date else { continue };
        if due >= now {
            continue;
        }

        let amount = settings.amount_for(task.priority);
        debug!(task_id = task.id, priority = %task.priority, amount, "overdue task penalized");
        assessment.total += amount;
        *assessment.by_day.entry(due.date_naive()).or_insert(0.0) += amount;
    }

    assessment
}
