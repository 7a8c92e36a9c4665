//! Calendar building.
//!
//! This module produces the ordered list of days in a target month, each
//! annotated with its ISO weekday index. It is the skeleton that clock
//! events are merged into.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::MonthPeriod;

/// A single day of a month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// ISO weekday index, 1 = Monday through 7 = Sunday.
    pub weekday_index: u32,
}

/// Returns the ISO weekday index of a date (1 = Monday through 7 = Sunday).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Builds the calendar for a month.
///
/// Returns exactly `period.days_in_month()` entries, first to last, strictly
/// increasing by one day.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_calendar;
/// use attendance_engine::models::MonthPeriod;
///
/// let calendar = build_calendar(MonthPeriod::new(2026, 2).unwrap());
/// assert_eq!(calendar.len(), 28);
/// // 2026-02-01 is a Sunday
/// assert_eq!(calendar[0].weekday_index, 7);
/// // 2026-02-02 is a Monday
/// assert_eq!(calendar[1].weekday_index, 1);
/// ```
pub fn build_calendar(period: MonthPeriod) -> Vec<CalendarDay> {
    period
        .first_day()
        .iter_days()
        .take_while(|date| *date < period.first_of_next_month())
        .map(|date| CalendarDay {
            date,
            weekday_index: weekday_index(date),
        })
        .collect()
}
