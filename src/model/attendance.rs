use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Clock event direction. Meaningless on day-off and absence records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClockAction {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    DayOff,
}

/// One raw attendance event as fetched from storage. The engine reads
/// snapshots only; records are created and mutated by the external layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u64,
    pub user_id: u64,
    pub action: ClockAction,
    pub time: DateTime<Utc>,
    pub status: AttendanceStatus,
    /// Hours credited for a paid day off. Only meaningful when
    /// `status` is `day_off`.
    pub paid_hours: Option<f64>,
    pub notes: Option<String>,
}
