//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_report;
mod clock_event;
mod day_record;
mod employee;
mod month_period;

pub use attendance_report::{
    AttendanceReport, AttendanceSummary, AuditStep, AuditTrace, AuditWarning, EmployeeOverview,
};
pub use clock_event::{ClockEvent, ClockKind, ClockUpdate};
pub use day_record::{DayRecord, DayStatus};
pub use employee::EmployeeProfile;
pub use month_period::MonthPeriod;
