//! Day type detection and day status classification.
//!
//! This module determines the day type (weekday, Saturday, Sunday) of a date
//! and combines it with the evaluation date and record existence to produce
//! the final [`DayStatus`] of a calendar day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::DayStatus;

/// Represents the type of day for attendance purposes.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday (weekday index 6).
    Saturday,
    /// Sunday (weekday index 7).
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-10-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-10-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Decides which days are non-working days.
///
/// Implementations must be pure: the same date always yields the same answer.
pub trait DayClassifier: Send + Sync {
    /// Returns true if `date` is a non-working day.
    fn is_rest_day(&self, date: NaiveDate) -> bool;
}

/// The fixed two-day weekend: Saturday and Sunday are rest days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedWeekend;

impl DayClassifier for FixedWeekend {
    fn is_rest_day(&self, date: NaiveDate) -> bool {
        get_day_type(date) != DayType::Weekday
    }
}

/// Classifies a calendar day.
///
/// Precedence is Weekend, then Future (strictly after `today`), then Present
/// if a clock record exists for the day, otherwise Absent. Presence depends
/// only on the record existing, not on which timestamps it holds.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{classify_day, FixedWeekend};
/// use attendance_engine::models::DayStatus;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
///
/// // A future Saturday is still a weekend.
/// let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
/// assert_eq!(classify_day(saturday, false, today, &FixedWeekend), DayStatus::Weekend);
///
/// // A future weekday is never absent.
/// let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
/// assert_eq!(classify_day(tuesday, false, today, &FixedWeekend), DayStatus::Future);
///
/// assert_eq!(classify_day(today, true, today, &FixedWeekend), DayStatus::Present);
/// ```
pub fn classify_day<C: DayClassifier + ?Sized>(
    date: NaiveDate,
    has_record: bool,
    today: NaiveDate,
    classifier: &C,
) -> DayStatus {
    if classifier.is_rest_day(date) {
        DayStatus::Weekend
    } else if date > today {
        DayStatus::Future
    } else if has_record {
        DayStatus::Present
    } else {
        DayStatus::Absent
    }
}
