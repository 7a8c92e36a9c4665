//! Calendar month model.
//!
//! This module contains the [`MonthPeriod`] type that defines the calculation
//! window for attendance reconciliation: one calendar month, expressed as the
//! half-open interval `[first_day, first_of_next_month)`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A target calendar month.
///
/// Constructing a `MonthPeriod` is the only place where a year/month pair is
/// checked; everything downstream (calendar building, range queries) is
/// infallible for a valid period. The fields are private, so every value
/// comes from [`MonthPeriod::new`], [`MonthPeriod::containing`] or validated
/// deserialization.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MonthPeriod;
/// use chrono::NaiveDate;
///
/// let period = MonthPeriod::new(2026, 2).unwrap();
/// assert_eq!(period.days_in_month(), 28);
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(period.first_of_next_month(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()));
/// ```
///
/// A period cannot be built around the check:
///
/// ```compile_fail
/// use attendance_engine::models::MonthPeriod;
///
/// let period = MonthPeriod { year: 2026, month: 13 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthPeriod")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonthPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthPeriod> for MonthPeriod {
    type Error = String;

    fn try_from(raw: RawMonthPeriod) -> Result<Self, Self::Error> {
        MonthPeriod::new(raw.year, raw.month)
            .ok_or_else(|| format!("invalid month {}-{:02}", raw.year, raw.month))
    }
}

impl MonthPeriod {
    /// Creates a period for the given year and month.
    ///
    /// Returns `None` for a non-positive year, a month outside 1–12, or a
    /// month whose successor cannot be represented.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if year < 1 || !(1..=12).contains(&month) {
            return None;
        }
        let period = Self { year, month };
        // Both bounds must be representable for the half-open range.
        NaiveDate::from_ymd_opt(year, month, 1)?;
        period.next_month_start()?;
        Some(period)
    }

    /// The calendar year (proleptic Gregorian, positive).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the period containing the given date.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The first day of the month (inclusive lower bound).
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The first day of the following month (exclusive upper bound).
    pub fn first_of_next_month(&self) -> NaiveDate {
        self.next_month_start().unwrap_or(NaiveDate::MAX)
    }

    /// The last day of the month (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.first_of_next_month().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    /// The number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Checks whether `date` falls inside `[first_day, first_of_next_month)`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date < self.first_of_next_month()
    }

    fn next_month_start(&self) -> Option<NaiveDate> {
        if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
