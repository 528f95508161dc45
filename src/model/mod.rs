pub mod attendance;
pub mod penalty;
pub mod task;
pub mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus, ClockAction};
pub use penalty::PenaltySettings;
pub use task::{RecurrenceType, Task, TaskDraft, TaskPriority, TaskStatus};
pub use user::User;
