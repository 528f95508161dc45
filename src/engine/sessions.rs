use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::IntegrityWarning;
use crate::model::{AttendanceRecord, AttendanceStatus, ClockAction};

/// A paired clock-in/clock-out interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Session {
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// Result of one pairing pass over a user's attendance events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingOutcome {
    pub sessions: Vec<Session>,
    /// A clock-in that was never closed. Callers opt in to counting the
    /// elapsed time against it; completed-session totals never include it.
    pub open_clock_in: Option<DateTime<Utc>>,
    pub warnings: Vec<IntegrityWarning>,
}

impl PairingOutcome {
    /// Seconds across completed sessions only.
    pub fn completed_seconds(&self) -> i64 {
        self.sessions.iter().map(Session::seconds).sum()
    }
}

/// Pairs `in`/`out` events into worked sessions. Input order does not
/// matter; records are sorted by time internally, so re-running over the
/// same set always yields the same intervals.
///
/// Only `present` records take part. A second consecutive `in` is ignored
/// (it does not restart the open session) and an `out` with no open session
/// contributes nothing; both are recovered locally and reported as
/// warnings rather than aborting the scan.
pub fn pair_sessions(records: &[AttendanceRecord]) -> PairingOutcome {
    let mut ordered: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .collect();
    ordered.sort_by_key(|r| r.time);

    let mut outcome = PairingOutcome::default();
    let mut open: Option<DateTime<Utc>> = None;

    for record in ordered {
        match record.action {
            ClockAction::In => {
                if open.is_some() {
                    warn!(record_id = record.id, time = %record.time, "duplicate clock-in ignored");
                    outcome.warnings.push(IntegrityWarning::DuplicateClockIn {
                        record_id: record.id,
                        time: record.time,
                    });
                } else {
                    open = Some(record.time);
                }
            }
            ClockAction::Out => match open.take() {
                Some(start) => outcome.sessions.push(Session {
                    start,
                    end: record.time,
                }),
                None => {
                    warn!(record_id = record.id, time = %record.time, "clock-out without open session ignored");
                    outcome.warnings.push(IntegrityWarning::UnmatchedClockOut {
                        record_id: record.id,
                        time: record.time,
                    });
                }
            },
        }
    }

    outcome.open_clock_in = open;
    outcome
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::logging::TEST_LOGGING;
    use crate::model::{AttendanceStatus, ClockAction};

    const DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    fn record(id: u64, action: ClockAction, hour: u32, minute: u32) -> AttendanceRecord {
        AttendanceRecord {
            id,
            user_id: 1,
            action,
            time: Utc.from_utc_datetime(&DAY.and_hms_opt(hour, minute, 0).unwrap()),
            status: AttendanceStatus::Present,
            paid_hours: None,
            notes: None,
        }
    }

    #[test]
    fn pairs_in_out_into_sessions() {
        *TEST_LOGGING;

        let records = vec![
            record(1, ClockAction::In, 9, 0),
            record(2, ClockAction::Out, 12, 0),
            record(3, ClockAction::In, 13, 0),
            record(4, ClockAction::Out, 17, 30),
        ];

        let outcome = pair_sessions(&records);
        assert_eq!(outcome.sessions.len(), 2);
        assert_eq!(outcome.completed_seconds(), 3 * 3600 + 4 * 3600 + 1800);
        assert!(outcome.open_clock_in.is_none());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn pairing_is_order_independent() {
        let mut records = vec![
            record(4, ClockAction::Out, 17, 0),
            record(1, ClockAction::In, 9, 0),
            record(3, ClockAction::In, 13, 0),
            record(2, ClockAction::Out, 12, 0),
        ];
        let shuffled = pair_sessions(&records);
        records.sort_by_key(|r| r.id);
        let sorted = pair_sessions(&records);

        assert_eq!(shuffled.sessions, sorted.sessions);
        assert_eq!(shuffled.completed_seconds(), sorted.completed_seconds());
    }

    #[test]
    fn duplicate_clock_in_keeps_first_open_session() {
        let records = vec![
            record(1, ClockAction::In, 9, 0),
            record(2, ClockAction::In, 10, 0),
            record(3, ClockAction::Out, 11, 0),
        ];

        let outcome = pair_sessions(&records);
        assert_eq!(outcome.sessions.len(), 1);
        // Session runs from the first in, not the ignored second one.
        assert_eq!(outcome.completed_seconds(), 2 * 3600);
        assert_eq!(
            outcome.warnings,
            vec![IntegrityWarning::DuplicateClockIn {
                record_id: 2,
                time: records[1].time
            }]
        );
    }

    #[test]
    fn unmatched_out_is_a_noop_and_does_not_abort() {
        let records = vec![
            record(1, ClockAction::Out, 8, 0),
            record(2, ClockAction::In, 9, 0),
            record(3, ClockAction::Out, 10, 0),
        ];

        let outcome = pair_sessions(&records);
        assert_eq!(outcome.completed_seconds(), 3600);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn lone_in_yields_no_completed_seconds() {
        let records = vec![record(1, ClockAction::In, 9, 0)];

        let outcome = pair_sessions(&records);
        assert_eq!(outcome.completed_seconds(), 0);
        assert_eq!(outcome.open_clock_in, Some(records[0].time));
    }

    #[test]
    fn day_off_and_absent_records_do_not_pair() {
        let mut day_off = record(1, ClockAction::In, 0, 0);
        day_off.status = AttendanceStatus::DayOff;
        day_off.paid_hours = Some(8.0);
        let mut absent = record(2, ClockAction::Out, 9, 0);
        absent.status = AttendanceStatus::Absent;

        let outcome = pair_sessions(&[day_off, absent]);
        assert!(outcome.sessions.is_empty());
        assert!(outcome.open_clock_in.is_none());
        assert!(outcome.warnings.is_empty());
    }
}
