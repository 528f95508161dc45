pub mod hours;
pub mod penalty;
pub mod recurrence;
pub mod report;
pub mod salary;
pub mod sessions;
pub mod target;

pub use hours::{HoursTotal, PerDayHours, hours_per_day, total_hours};
pub use penalty::{PenaltyAssessment, assess_penalties};
pub use recurrence::next_occurrence;
pub use report::{DailyPay, SalaryReport, build_salary_report};
pub use salary::{SalaryBreakdown, compute_salary, salary_per_day};
pub use sessions::{PairingOutcome, Session, pair_sessions};
pub use target::{WeekdayRates, monthly_target, target_for_month};
