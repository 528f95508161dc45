use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hours::{hours_per_day, total_hours};
use super::penalty::PenaltyAssessment;
use super::salary::{SalaryBreakdown, compute_salary, round_money};
use super::target::monthly_target;
use crate::config::EngineConfig;
use crate::error::{ConfigurationError, IntegrityWarning};
use crate::model::{AttendanceRecord, User};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPay {
    pub hours: f64,
    pub amount: f64,
}

/// A month's salary report for one user: the single place every salary
/// screen computes from, so call sites cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryReport {
    pub user_id: u64,
    /// First day of the report month.
    pub month: NaiveDate,
    pub target_hours: f64,
    pub worked_hours: f64,
    pub breakdown: SalaryBreakdown,
    pub per_day: BTreeMap<NaiveDate, DailyPay>,
    /// Present when penalty deduction was composed into the report.
    pub penalties: Option<PenaltyAssessment>,
    pub warnings: Vec<IntegrityWarning>,
}

/// Chains pairing, aggregation, target, and salary into one report.
/// `records` should already be scoped to the report's date range by the
/// storage query; `penalties` is an optional composed step.
pub fn build_salary_report(
    user: &User,
    records: &[AttendanceRecord],
    any_date_in_month: NaiveDate,
    penalties: Option<PenaltyAssessment>,
    cfg: &EngineConfig,
) -> Result<SalaryReport, ConfigurationError> {
    let target_hours = monthly_target(user, any_date_in_month)?;
    let totals = total_hours(records, cfg, None);
    let per_day_hours = hours_per_day(records, cfg);

    let breakdown = compute_salary(
        target_hours,
        user.monthly_salary,
        totals.hours,
        penalties.as_ref().map(|p| p.total),
        cfg,
    )?;

    let per_day = per_day_hours
        .by_day
        .iter()
        .map(|(day, hours)| {
            (
                *day,
                DailyPay {
                    hours: *hours,
                    amount: round_money(hours * breakdown.effective_hourly_rate, cfg),
                },
            )
        })
        .collect();

    debug!(
        user_id = user.id,
        target_hours,
        worked_hours = totals.hours,
        warning_count = totals.warnings.len(),
        "salary report built"
    );

    Ok(SalaryReport {
        user_id: user.id,
        month: any_date_in_month.with_day(1).unwrap(),
        target_hours,
        worked_hours: totals.hours,
        breakdown,
        per_day,
        penalties,
        warnings: totals.warnings,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::model::{AttendanceStatus, ClockAction};

    fn user() -> User {
        User {
            id: 1,
            daily_target_hours: 8.0,
            friday_target_hours: Some(4.0),
            monthly_salary: Some(4560.0),
        }
    }

    fn clock(id: u64, action: ClockAction, day: u32, hour: u32) -> AttendanceRecord {
        AttendanceRecord {
            id,
            user_id: 1,
            action,
            time: Utc.from_utc_datetime(
                &NaiveDate::from_ymd_opt(2024, 3, day)
                    .unwrap()
                    .and_hms_opt(hour, 0, 0)
                    .unwrap(),
            ),
            status: AttendanceStatus::Present,
            paid_hours: None,
            notes: None,
        }
    }

    #[test]
    fn report_chains_target_hours_and_salary() {
        // March 2024 target: 26 * 8 + 5 * 4 = 228h, so 4560 / 228 = 20/h.
        let records = vec![
            clock(1, ClockAction::In, 4, 9),
            clock(2, ClockAction::Out, 4, 17),
            clock(3, ClockAction::In, 5, 9),
            clock(4, ClockAction::Out, 5, 13),
        ];

        let report = build_salary_report(
            &user(),
            &records,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            None,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(report.target_hours, 228.0);
        assert_eq!(report.worked_hours, 12.0);
        assert_eq!(report.breakdown.effective_hourly_rate, 20.0);
        assert_eq!(report.breakdown.gross_salary, 240.0);
        assert!(report.breakdown.is_prorated);
        assert_eq!(report.month, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let monday = report.per_day[&NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()];
        assert_eq!(monday.hours, 8.0);
        assert_eq!(monday.amount, 160.0);
    }

    #[test]
    fn penalties_compose_into_the_net() {
        let records = vec![
            clock(1, ClockAction::In, 4, 9),
            clock(2, ClockAction::Out, 4, 17),
        ];
        let mut penalties = PenaltyAssessment::default();
        penalties.total = 60.0;

        let report = build_salary_report(
            &user(),
            &records,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Some(penalties),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(report.breakdown.gross_salary, 160.0);
        assert_eq!(report.breakdown.net_salary, 100.0);
        assert!(report.penalties.is_some());
    }

    #[test]
    fn missing_salary_fails_the_whole_report() {
        let mut no_salary = user();
        no_salary.monthly_salary = None;

        let result = build_salary_report(
            &no_salary,
            &[],
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            None,
            &EngineConfig::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigurationError::MissingMonthlySalary);
    }

    #[test]
    fn integrity_warnings_surface_on_the_report() {
        // Clock-out with nothing open: absorbed, reported, not fatal.
        let records = vec![clock(1, ClockAction::Out, 4, 17)];

        let report = build_salary_report(
            &user(),
            &records,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            None,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(report.worked_hours, 0.0);
        assert_eq!(report.warnings.len(), 1);
    }
}
