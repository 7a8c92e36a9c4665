//! Attendance report models for the Attendance Engine.
//!
//! This module contains the [`AttendanceReport`] type and its associated structures
//! that capture all outputs of a monthly reconciliation: the per-day log, the
//! aggregated summary, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayRecord, EmployeeProfile, MonthPeriod};

/// Aggregated attendance and prorated salary for one month.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let summary = AttendanceSummary {
///     present_days: 20,
///     eligible_days: 26,
///     rate: 77,
///     base_salary: Decimal::new(3_000_000, 0),
///     salary: Decimal::new(2_310_000, 0),
///     formatted_salary: "Rp2.310.000,00".to_string(),
/// };
/// assert_eq!(summary.rate_label(), "77%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days with status Present.
    pub present_days: u32,
    /// Days with status Present or Absent.
    pub eligible_days: u32,
    /// Attendance rate as a whole percentage, 0 through 100.
    pub rate: u32,
    /// The base salary the proration was applied to.
    pub base_salary: Decimal,
    /// The prorated salary, rounded to two decimal places.
    pub salary: Decimal,
    /// The prorated salary formatted with the configured currency rules.
    pub formatted_salary: String,
}

impl AttendanceSummary {
    /// Returns the rate as a percentage label, e.g. `"77%"`.
    pub fn rate_label(&self) -> String {
        format!("{}%", self.rate)
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the result; they flag conditions worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of reconciling one employee's month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee_id: String,
    /// The month the report covers.
    pub period: MonthPeriod,
    /// One record per calendar day, first to last.
    pub days: Vec<DayRecord>,
    /// Aggregated attendance and salary.
    pub summary: AttendanceSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// One row of the employee overview: a profile with its current-month figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeOverview {
    /// 1-based position in the listing.
    pub index: usize,
    /// Name to show in listings; the email local part when no name is set.
    pub display_name: String,
    /// The employee's profile.
    pub profile: EmployeeProfile,
    /// The base salary formatted with the configured currency rules.
    pub formatted_base_salary: String,
    /// The attendance rate as a label, e.g. `"77%"`.
    pub attendance_rate: String,
    /// The month the figures cover.
    pub period: MonthPeriod,
    /// Aggregated attendance and prorated salary.
    pub summary: AttendanceSummary,
}
