//! Request types for the Attendance Engine API.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::MonthPeriod;

/// Query string for `GET /employees/{id}/attendance`.
///
/// Both fields are optional; when either is missing or empty (`?year=&month=`)
/// the current month is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// The calendar year.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    /// The month, 1 through 12.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub month: Option<u32>,
}

/// Parses a query value, treating an empty string as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl AttendanceQuery {
    /// Resolves the query to a month, falling back to the month containing `today`.
    pub fn resolve(&self, today: NaiveDate) -> EngineResult<MonthPeriod> {
        let (year, month) = match (self.year, self.month) {
            (Some(year), Some(month)) => (year, month),
            _ => (today.year(), today.month()),
        };
        MonthPeriod::new(year, month).ok_or(EngineError::InvalidPeriod { year, month })
    }
}
