use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Months, NaiveTime, TimeZone, Utc};
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::{assess_penalties, build_salary_report, next_occurrence, SalaryReport};
use crate::model::{AttendanceRecord, PenaltySettings, Task, TaskDraft, User};

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub assignee_id: Option<u64>,
    pub due_from: Option<DateTime<Utc>>,
    pub due_to: Option<DateTime<Utc>>,
}

/// The external storage collaborator. The engine itself never performs
/// I/O; everything it consumes arrives through this trait and the only
/// thing it ever writes back is the next occurrence of a recurring task.
#[async_trait]
pub trait HrStore: Send + Sync {
    async fn attendance_for(
        &self,
        user_id: u64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AttendanceRecord>>;

    async fn tasks_for(&self, filter: &TaskFilter) -> Result<Vec<Task>>;

    async fn penalty_settings(&self) -> Result<PenaltySettings>;

    async fn user(&self, user_id: u64) -> Result<Option<User>>;

    /// Persists a scheduler-produced draft and returns its new id. The
    /// store must treat "mark completed + spawn next" as one logical unit
    /// so a completion transition spawns at most one successor.
    async fn create_task(&self, draft: &TaskDraft) -> Result<u64>;
}

/// Wires the storage collaborator into the pure engine. Adds nothing
/// algorithmic; every figure comes from `engine`.
pub struct ReportService<S> {
    store: S,
    cfg: EngineConfig,
}

impl<S: HrStore> ReportService<S> {
    pub fn new(store: S, cfg: EngineConfig) -> Self {
        Self { store, cfg }
    }

    /// Full salary report for the month containing `any_date_in_month`,
    /// with penalties assessed as of `as_of`. Passing the report's own
    /// boundary instant keeps historical runs reproducible.
    pub async fn monthly_salary_report(
        &self,
        user_id: u64,
        any_date_in_month: chrono::NaiveDate,
        as_of: DateTime<Utc>,
    ) -> Result<SalaryReport> {
        let user = self
            .store
            .user(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("unknown user {user_id}"))?;

        let first = any_date_in_month.with_day(1).unwrap();
        let from = Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN));
        let to = Utc.from_utc_datetime(&(first + Months::new(1)).and_time(NaiveTime::MIN));

        let records = self.store.attendance_for(user_id, from, to).await?;
        let tasks = self
            .store
            .tasks_for(&TaskFilter {
                assignee_id: Some(user_id),
                ..TaskFilter::default()
            })
            .await?;
        let settings = self.store.penalty_settings().await?;

        let penalties = assess_penalties(&tasks, &settings, as_of);
        let report = build_salary_report(&user, &records, first, Some(penalties), &self.cfg)?;
        Ok(report)
    }

    /// Completion hand-off for a recurring task: computes the next
    /// occurrence and persists it. Returns the new task's id, or `None`
    /// when the task does not recur. Must be invoked exactly once per
    /// completion transition.
    pub async fn complete_task(&self, task: &Task) -> Result<Option<u64>> {
        let Some(draft) = next_occurrence(task)? else {
            return Ok(None);
        };

        let id = self.store.create_task(&draft).await?;
        info!(
            completed_id = task.id,
            next_id = id,
            next_due = %draft.due_date,
            "spawned next occurrence"
        );
        Ok(Some(id))
    }
}
