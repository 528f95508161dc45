use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::sessions::pair_sessions;
use crate::config::EngineConfig;
use crate::error::IntegrityWarning;
use crate::model::{AttendanceRecord, AttendanceStatus};

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursTotal {
    pub hours: f64,
    pub warnings: Vec<IntegrityWarning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerDayHours {
    /// Calendar day (UTC) to hours. Days that have records but produced no
    /// hours are present with 0.0, so "present but 0h" and "no record" stay
    /// distinguishable.
    pub by_day: BTreeMap<NaiveDate, f64>,
    pub warnings: Vec<IntegrityWarning>,
}

fn day_off_seconds(record: &AttendanceRecord, cfg: &EngineConfig) -> f64 {
    record.paid_hours.unwrap_or(cfg.day_off_default_hours) * SECONDS_PER_HOUR
}

/// Total worked hours over the record set: completed sessions plus paid
/// day-off credits. Absences contribute zero. Passing `live_now` opts in to
/// counting the still-open session up to that instant, for "today so far"
/// views; it is never implied.
pub fn total_hours(
    records: &[AttendanceRecord],
    cfg: &EngineConfig,
    live_now: Option<DateTime<Utc>>,
) -> HoursTotal {
    let outcome = pair_sessions(records);

    let mut seconds = outcome.completed_seconds() as f64;
    if let (Some(now), Some(open)) = (live_now, outcome.open_clock_in) {
        seconds += (now - open).num_seconds().max(0) as f64;
    }

    for record in records {
        if record.status == AttendanceStatus::DayOff {
            seconds += day_off_seconds(record, cfg);
        }
    }

    HoursTotal {
        hours: seconds / SECONDS_PER_HOUR,
        warnings: outcome.warnings,
    }
}

/// Hours keyed by calendar day. A session is credited entirely to the day
/// of its clock-in, so a shift crossing midnight lands on its start day.
/// Day-off credits accumulate under the day-off record's own date.
pub fn hours_per_day(records: &[AttendanceRecord], cfg: &EngineConfig) -> PerDayHours {
    let outcome = pair_sessions(records);

    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        by_day.entry(record.time.date_naive()).or_insert(0.0);
    }

    for session in &outcome.sessions {
        *by_day.entry(session.start.date_naive()).or_insert(0.0) +=
            session.seconds() as f64 / SECONDS_PER_HOUR;
    }

    for record in records {
        if record.status == AttendanceStatus::DayOff {
            *by_day.entry(record.time.date_naive()).or_insert(0.0) +=
                day_off_seconds(record, cfg) / SECONDS_PER_HOUR;
        }
    }

    PerDayHours {
        by_day,
        warnings: outcome.warnings,
    }
}
