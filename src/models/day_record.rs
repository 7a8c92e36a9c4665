//! Per-day attendance model.
//!
//! [`DayRecord`] is the engine's ephemeral per-day output: one calendar day
//! merged with the clock event recorded for it, if any.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The final classification of a calendar day.
///
/// Precedence when several apply is `Weekend` > `Future` > `Present`/`Absent`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// assert!(DayStatus::Present.is_eligible());
/// assert!(DayStatus::Absent.is_eligible());
/// assert!(!DayStatus::Weekend.is_eligible());
/// assert!(!DayStatus::Future.is_eligible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A clock record exists for a past or current working day.
    Present,
    /// No clock record for a past or current working day ("unmarked").
    #[serde(alias = "unmarked")]
    Absent,
    /// Saturday or Sunday; takes precedence over everything else.
    Weekend,
    /// A working day after the evaluation date; never counted as absent.
    Future,
}

impl DayStatus {
    /// Returns true if the day counts toward the attendance-rate denominator.
    pub fn is_eligible(&self) -> bool {
        matches!(self, DayStatus::Present | DayStatus::Absent)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::Weekend => write!(f, "Weekend"),
            DayStatus::Future => write!(f, "Future"),
        }
    }
}

/// One calendar day of the target month after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date.
    pub date: NaiveDate,
    /// ISO weekday index, 1 = Monday through 7 = Sunday.
    pub weekday_index: u32,
    /// Clock-in timestamp from the matching event, if any.
    pub clock_in: Option<DateTime<Utc>>,
    /// Clock-out timestamp from the matching event, if any.
    pub clock_out: Option<DateTime<Utc>>,
    /// The final classification of the day.
    pub status: DayStatus,
}

impl DayRecord {
    /// Returns true if the day counts as present.
    pub fn is_present(&self) -> bool {
        self.status == DayStatus::Present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DayStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&DayStatus::Weekend).unwrap(),
            "\"weekend\""
        );
    }

    #[test]
    fn test_unmarked_deserializes_as_absent() {
        let status: DayStatus = serde_json::from_str("\"unmarked\"").unwrap();
        assert_eq!(status, DayStatus::Absent);
    }

    #[test]
    fn test_day_record_serialization() {
        let record = DayRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            weekday_index: 6,
            clock_in: None,
            clock_out: None,
            status: DayStatus::Weekend,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2026-10-03\""));
        assert!(json.contains("\"weekday_index\":6"));
        assert!(json.contains("\"status\":\"weekend\""));
        assert!(json.contains("\"clock_in\":null"));
    }
}
