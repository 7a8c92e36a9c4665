//! Clock event model.
//!
//! A [`ClockEvent`] is the stored record of one employee's clock-in and
//! clock-out timestamps for a single calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One employee's clock record for one calendar day.
///
/// `(employee_id, schedule_date)` is unique. Either timestamp may be missing,
/// and no ordering between them is enforced.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockEvent;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let event = ClockEvent {
///     employee_id: "emp_001".to_string(),
///     schedule_date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
///     clock_in_at: Some(Utc.with_ymd_and_hms(2026, 10, 14, 1, 55, 0).unwrap()),
///     clock_out_at: None,
///     note: None,
/// };
/// assert!(event.clock_in_at.is_some());
/// assert!(event.clock_out_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day (local to the configured offset) the record is for.
    pub schedule_date: NaiveDate,
    /// When the employee clocked in, if they did.
    #[serde(default)]
    pub clock_in_at: Option<DateTime<Utc>>,
    /// When the employee clocked out, if they did.
    #[serde(default)]
    pub clock_out_at: Option<DateTime<Utc>>,
    /// Free-form note attached by an administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ClockEvent {
    /// Creates an empty record for the given employee and day.
    pub fn new(employee_id: impl Into<String>, schedule_date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            schedule_date,
            clock_in_at: None,
            clock_out_at: None,
            note: None,
        }
    }

    /// Applies a partial update, touching only the field the update names.
    pub fn apply(&mut self, update: ClockUpdate) {
        match update.kind {
            ClockKind::In => self.clock_in_at = Some(update.at),
            ClockKind::Out => self.clock_out_at = Some(update.at),
        }
    }
}

/// Which side of the day a clock action records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockKind {
    /// Start of the working day.
    In,
    /// End of the working day.
    Out,
}

impl std::fmt::Display for ClockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockKind::In => write!(f, "clock in"),
            ClockKind::Out => write!(f, "clock out"),
        }
    }
}

/// A partial write against a [`ClockEvent`]: set one timestamp, leave the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockUpdate {
    /// The field being written.
    pub kind: ClockKind,
    /// The timestamp to write.
    pub at: DateTime<Utc>,
}
