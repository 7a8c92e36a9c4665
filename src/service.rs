//! Attendance service.
//!
//! [`AttendanceService`] ties the pure calculation functions to the storage
//! collaborators: it fetches clock events and profiles, reconciles the month,
//! aggregates the rate, prorates the salary, and records clock actions.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    DayClassifier, FixedWeekend, calculate_attendance_rate, format_currency, prorate_salary,
    reconcile_month,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceReport, AttendanceSummary, AuditTrace, AuditWarning, ClockEvent, ClockKind,
    ClockUpdate, DayRecord, EmployeeOverview, EmployeeProfile, MonthPeriod,
};
use crate::store::{ProfileProvider, RecordStore};

/// The engine version stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes attendance reports and records clock actions.
///
/// The service holds no mutable state of its own; every call works from
/// freshly fetched records.
#[derive(Clone)]
pub struct AttendanceService {
    config: Arc<ConfigLoader>,
    records: Arc<dyn RecordStore>,
    profiles: Arc<dyn ProfileProvider>,
    classifier: Arc<dyn DayClassifier>,
}

impl AttendanceService {
    /// Creates a service using the fixed Saturday/Sunday weekend rule.
    pub fn new(
        config: ConfigLoader,
        records: Arc<dyn RecordStore>,
        profiles: Arc<dyn ProfileProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            records,
            profiles,
            classifier: Arc::new(FixedWeekend),
        }
    }

    /// Replaces the rest-day classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn DayClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Builds the attendance report for one employee and month.
    ///
    /// `now` is the evaluation instant; its local date decides which days
    /// are in the future.
    pub async fn monthly_report(
        &self,
        employee_id: &str,
        period: MonthPeriod,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceReport> {
        let profile = self.require_profile(employee_id).await?;

        let events = self
            .records
            .find_events_in_range(
                employee_id,
                period.first_day(),
                period.first_of_next_month(),
            )
            .await?;
        debug!(
            employee_id,
            period = %period,
            events = events.len(),
            "Fetched clock events"
        );

        let report = self.assemble_report(&profile, period, &events, now);
        info!(
            employee_id,
            period = %period,
            rate = report.summary.rate,
            salary = %report.summary.salary,
            duration_us = report.audit_trace.duration_us,
            "Attendance report generated"
        );
        Ok(report)
    }

    /// Builds a report from already-fetched events.
    ///
    /// This is the whole calculation pipeline without any I/O.
    pub fn assemble_report(
        &self,
        profile: &EmployeeProfile,
        period: MonthPeriod,
        events: &[ClockEvent],
        now: DateTime<Utc>,
    ) -> AttendanceReport {
        let start_time = Instant::now();
        let today = self.config.local_date(now);

        let reconciliation = reconcile_month(period, events, today, self.classifier.as_ref(), 1);
        let rate_result = calculate_attendance_rate(&reconciliation.days, 2);
        let proration = prorate_salary(
            profile.base_salary,
            rate_result.rate,
            self.config.currency(),
            3,
        );

        let warnings = collect_warnings(&reconciliation.days, rate_result.eligible_days, today);

        let summary = AttendanceSummary {
            present_days: rate_result.present_days,
            eligible_days: rate_result.eligible_days,
            rate: rate_result.rate,
            base_salary: profile.base_salary,
            salary: proration.salary,
            formatted_salary: proration.formatted_salary,
        };

        AttendanceReport {
            report_id: Uuid::new_v4(),
            generated_at: now,
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: profile.id.clone(),
            period,
            days: reconciliation.days,
            summary,
            audit_trace: AuditTrace {
                steps: vec![
                    reconciliation.audit_step,
                    rate_result.audit_step,
                    proration.audit_step,
                ],
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        }
    }

    /// Records a clock-in for today.
    pub async fn clock_in(&self, employee_id: &str, now: DateTime<Utc>) -> EngineResult<ClockEvent> {
        self.record_clock(employee_id, ClockKind::In, now).await
    }

    /// Records a clock-out for today.
    pub async fn clock_out(
        &self,
        employee_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<ClockEvent> {
        self.record_clock(employee_id, ClockKind::Out, now).await
    }

    async fn record_clock(
        &self,
        employee_id: &str,
        kind: ClockKind,
        now: DateTime<Utc>,
    ) -> EngineResult<ClockEvent> {
        self.require_profile(employee_id).await?;

        let today = self.config.local_date(now);
        let event = self
            .records
            .upsert_event(employee_id, today, ClockUpdate { kind, at: now })
            .await?;

        info!(
            employee_id,
            action = %kind,
            schedule_date = %today,
            "Clock event recorded"
        );
        Ok(event)
    }

    /// Lists every employee with their figures for the month containing `now`.
    pub async fn employee_overview(
        &self,
        now: DateTime<Utc>,
    ) -> EngineResult<Vec<EmployeeOverview>> {
        let today = self.config.local_date(now);
        let period = MonthPeriod::containing(today).ok_or(EngineError::InvalidPeriod {
            year: today.year(),
            month: today.month(),
        })?;

        let profiles = self.profiles.list_profiles().await?;
        let mut rows = Vec::with_capacity(profiles.len());

        for (i, profile) in profiles.into_iter().enumerate() {
            let events = self
                .records
                .find_events_in_range(
                    &profile.id,
                    period.first_day(),
                    period.first_of_next_month(),
                )
                .await?;
            let report = self.assemble_report(&profile, period, &events, now);

            rows.push(EmployeeOverview {
                index: i + 1,
                display_name: profile.display_name().to_string(),
                formatted_base_salary: format_currency(profile.base_salary, self.config.currency()),
                attendance_rate: report.summary.rate_label(),
                period,
                summary: report.summary,
                profile,
            });
        }

        info!(employees = rows.len(), period = %period, "Employee overview generated");
        Ok(rows)
    }

    async fn require_profile(&self, employee_id: &str) -> EngineResult<EmployeeProfile> {
        self.profiles
            .get_profile(employee_id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }
}

fn collect_warnings(days: &[DayRecord], eligible_days: u32, today: NaiveDate) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if eligible_days == 0 {
        warnings.push(AuditWarning {
            code: "NO_ELIGIBLE_DAYS".to_string(),
            message: "No working days up to the evaluation date; rate is 0%".to_string(),
            severity: "low".to_string(),
        });
    }

    let missing_clock_out = days
        .iter()
        .filter(|d| d.is_present() && d.date < today && d.clock_out.is_none())
        .count();
    if missing_clock_out > 0 {
        warnings.push(AuditWarning {
            code: "MISSING_CLOCK_OUT".to_string(),
            message: format!(
                "{} past day(s) counted as present without a clock-out",
                missing_clock_out
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
