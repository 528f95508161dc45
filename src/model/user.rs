use serde::{Deserialize, Serialize};

/// Payroll-relevant user fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    /// Expected hours for a regular working day. Must be positive.
    pub daily_target_hours: f64,
    /// Expected hours on Fridays; falls back to `daily_target_hours`.
    pub friday_target_hours: Option<f64>,
    pub monthly_salary: Option<f64>,
}

impl User {
    pub fn friday_rate(&self) -> f64 {
        self.friday_target_hours.unwrap_or(self.daily_target_hours)
    }
}
