use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Misconfiguration that must surface to the caller instead of being
/// silently defaulted away. Everything else the engine computes is total.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum ConfigurationError {
    /// Target hours must be positive before anything divides by them.
    #[display(fmt = "target hours must be positive, got {}", _0)]
    NonPositiveTargetHours(f64),

    #[display(fmt = "no monthly salary configured for this user")]
    MissingMonthlySalary,

    /// `custom_days` recurrence needs a positive day interval.
    #[display(fmt = "task {} has custom_days recurrence without a positive interval", task_id)]
    MissingRecurrenceInterval { task_id: u64 },
}

impl std::error::Error for ConfigurationError {}

/// A malformed event sequence the pairer recovered from locally. Reported
/// as metadata next to the numeric result, never as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    /// A clock-in arrived while a session was already open; ignored.
    DuplicateClockIn { record_id: u64, time: DateTime<Utc> },
    /// A clock-out arrived with no open session; ignored.
    UnmatchedClockOut { record_id: u64, time: DateTime<Utc> },
}
