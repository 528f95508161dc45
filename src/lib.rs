//! Attendance and payroll computation engine.
//!
//! Turns raw, unordered clock-in/clock-out/day-off/absence logs into worked
//! hours, monthly targets, salary figures, task-penalty deductions, and
//! recurring-task schedules. Every computation is a pure function over
//! immutable snapshots; persistence, transport, and UI live behind the
//! [`store::HrStore`] seam.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use config::EngineConfig;
pub use engine::{
    DailyPay, HoursTotal, PairingOutcome, PenaltyAssessment, PerDayHours, SalaryBreakdown,
    SalaryReport, Session, WeekdayRates, assess_penalties, build_salary_report, compute_salary,
    hours_per_day, monthly_target, next_occurrence, pair_sessions, salary_per_day, target_for_month,
    total_hours,
};
pub use error::{ConfigurationError, IntegrityWarning};
pub use model::{
    AttendanceRecord, AttendanceStatus, ClockAction, PenaltySettings, RecurrenceType, Task,
    TaskDraft, TaskPriority, TaskStatus, User,
};
pub use store::{HrStore, ReportService, TaskFilter};
