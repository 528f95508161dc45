use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::ConfigurationError;

/// Period salary figures derived from target hours, monthly salary, and the
/// hours actually worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Monthly salary over the month's target hours. Left unrounded so
    /// per-day amounts stay consistent with the period gross.
    pub effective_hourly_rate: f64,
    pub gross_salary: f64,
    /// Gross minus penalties. May go negative; over-penalization is
    /// surfaced, not floored away.
    pub net_salary: f64,
    pub total_penalties: f64,
    /// Informational only: the user worked less than the period target.
    pub is_prorated: bool,
}

/// Rounds half away from zero to the configured number of decimals.
pub(crate) fn round_money(amount: f64, cfg: &EngineConfig) -> f64 {
    let scale = 10f64.powi(cfg.money_decimals as i32);
    (amount * scale).round() / scale
}

/// Derives the effective hourly rate and gross/net salary for a period.
/// Fails on zero target hours or a missing salary instead of producing
/// `Infinity`/`NaN`.
pub fn compute_salary(
    target_hours: f64,
    monthly_salary: Option<f64>,
    worked_hours: f64,
    total_penalties: Option<f64>,
    cfg: &EngineConfig,
) -> Result<SalaryBreakdown, ConfigurationError> {
    if !(target_hours > 0.0) || !target_hours.is_finite() {
        return Err(ConfigurationError::NonPositiveTargetHours(target_hours));
    }
    let monthly_salary = monthly_salary.ok_or(ConfigurationError::MissingMonthlySalary)?;

    let effective_hourly_rate = monthly_salary / target_hours;
    let gross_salary = round_money(worked_hours * effective_hourly_rate, cfg);
    let total_penalties = total_penalties.unwrap_or(0.0);

    Ok(SalaryBreakdown {
        effective_hourly_rate,
        gross_salary,
        net_salary: round_money(gross_salary - total_penalties, cfg),
        total_penalties,
        is_prorated: worked_hours < target_hours,
    })
}

/// Per-day pay amounts: each day's hours at the single period-level rate.
/// The rate is never recomputed per day.
pub fn salary_per_day(
    by_day_hours: &BTreeMap<NaiveDate, f64>,
    effective_hourly_rate: f64,
    cfg: &EngineConfig,
) -> BTreeMap<NaiveDate, f64> {
    by_day_hours
        .iter()
        .map(|(day, hours)| (*day, round_money(hours * effective_hourly_rate, cfg)))
        .collect()
}
