//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure calculation functions: building the calendar
//! of a month, classifying days, merging clock events into the calendar,
//! aggregating the attendance rate, prorating the salary, and formatting
//! currency amounts.

mod attendance_rate;
mod calendar;
mod currency;
mod day_classification;
mod reconciliation;
mod salary_proration;

pub use attendance_rate::{AttendanceRateResult, calculate_attendance_rate};
pub use calendar::{CalendarDay, build_calendar, weekday_index};
pub use currency::format_currency;
pub use day_classification::{DayClassifier, DayType, FixedWeekend, classify_day, get_day_type};
pub use reconciliation::{ReconciliationResult, reconcile_month};
pub use salary_proration::{SalaryProrationResult, prorate_salary};
