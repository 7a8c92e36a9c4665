//! Record-to-day reconciliation.
//!
//! This module merges sparse clock events into the full calendar of a month,
//! producing one [`DayRecord`] per day.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AuditStep, ClockEvent, DayRecord, DayStatus, MonthPeriod};

use super::calendar::build_calendar;
use super::day_classification::{DayClassifier, classify_day};

/// The result of reconciling a month, including the day log and audit step.
#[derive(Debug, Clone)]
pub struct ReconciliationResult {
    /// One record per calendar day, first to last.
    pub days: Vec<DayRecord>,
    /// The audit step recording this reconciliation.
    pub audit_step: AuditStep,
}

/// Merges clock events into the calendar of `period`.
///
/// Events are matched to days by `schedule_date` equality. Events outside the
/// period are ignored; if the store returned more than one event for a day,
/// the first one wins. A matched event always populates `clock_in` and
/// `clock_out`, even on a weekend or future day, while the status follows
/// [`classify_day`].
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{reconcile_month, FixedWeekend};
/// use attendance_engine::models::{ClockEvent, DayStatus, MonthPeriod};
/// use chrono::NaiveDate;
///
/// let period = MonthPeriod::new(2026, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let events = vec![ClockEvent::new("emp_001", NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())];
///
/// let result = reconcile_month(period, &events, today, &FixedWeekend, 1);
/// assert_eq!(result.days.len(), 31);
/// assert_eq!(result.days[0].status, DayStatus::Present);
/// // 2026-10-02 is a Friday with no record
/// assert_eq!(result.days[1].status, DayStatus::Absent);
/// ```
pub fn reconcile_month<C: DayClassifier + ?Sized>(
    period: MonthPeriod,
    events: &[ClockEvent],
    today: NaiveDate,
    classifier: &C,
    step_number: u32,
) -> ReconciliationResult {
    let mut by_date: HashMap<NaiveDate, &ClockEvent> = HashMap::with_capacity(events.len());
    let mut ignored_events = 0usize;
    for event in events {
        if period.contains_date(event.schedule_date) {
            by_date.entry(event.schedule_date).or_insert(event);
        } else {
            ignored_events += 1;
        }
    }

    let days: Vec<DayRecord> = build_calendar(period)
        .into_iter()
        .map(|day| {
            let event = by_date.get(&day.date).copied();
            DayRecord {
                date: day.date,
                weekday_index: day.weekday_index,
                clock_in: event.and_then(|e| e.clock_in_at),
                clock_out: event.and_then(|e| e.clock_out_at),
                status: classify_day(day.date, event.is_some(), today, classifier),
            }
        })
        .collect();

    let count = |status: DayStatus| days.iter().filter(|d| d.status == status).count();
    let (present, absent, weekend, future) = (
        count(DayStatus::Present),
        count(DayStatus::Absent),
        count(DayStatus::Weekend),
        count(DayStatus::Future),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_reconciliation".to_string(),
        rule_name: "Day Reconciliation".to_string(),
        input: serde_json::json!({
            "period": period.to_string(),
            "evaluation_date": today.to_string(),
            "events": events.len(),
        }),
        output: serde_json::json!({
            "days": days.len(),
            "matched_events": by_date.len(),
            "ignored_events": ignored_events,
            "present": present,
            "absent": absent,
            "weekend": weekend,
            "future": future,
        }),
        reasoning: format!(
            "Merged {} event(s) into {} day(s) of {}: {} present, {} absent, {} weekend, {} future",
            by_date.len(),
            days.len(),
            period,
            present,
            absent,
            weekend,
            future
        ),
    };

    ReconciliationResult { days, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::FixedWeekend;
    use chrono::{TimeZone, Utc};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn event(date_str: &str) -> ClockEvent {
        ClockEvent::new("emp_001", make_date(date_str))
    }

    fn october() -> MonthPeriod {
        MonthPeriod::new(2026, 10).unwrap()
    }

    fn status_on(days: &[DayRecord], date_str: &str) -> DayStatus {
        let date = make_date(date_str);
        days.iter().find(|d| d.date == date).unwrap().status
    }

    #[test]
    fn test_one_record_per_calendar_day() {
        let result = reconcile_month(october(), &[], make_date("2026-10-16"), &FixedWeekend, 1);
        assert_eq!(result.days.len(), 31);
        assert_eq!(result.days[0].date, make_date("2026-10-01"));
        assert_eq!(result.days[30].date, make_date("2026-10-31"));
    }

    #[test]
    fn test_clock_in_only_counts_as_present() {
        let mut e = event("2026-10-14");
        e.clock_in_at = Some(Utc.with_ymd_and_hms(2026, 10, 14, 1, 0, 0).unwrap());

        let result = reconcile_month(october(), &[e], make_date("2026-10-16"), &FixedWeekend, 1);
        let day = result
            .days
            .iter()
            .find(|d| d.date == make_date("2026-10-14"))
            .unwrap();
        assert_eq!(day.status, DayStatus::Present);
        assert!(day.clock_in.is_some());
        assert!(day.clock_out.is_none());
    }

    #[test]
    fn test_record_without_timestamps_counts_as_present() {
        let result = reconcile_month(
            october(),
            &[event("2026-10-13")],
            make_date("2026-10-16"),
            &FixedWeekend,
            1,
        );
        assert_eq!(status_on(&result.days, "2026-10-13"), DayStatus::Present);
    }

    #[test]
    fn test_weekend_record_keeps_times_but_reports_weekend() {
        let clock_in = Utc.with_ymd_and_hms(2026, 10, 10, 2, 0, 0).unwrap();
        let mut e = event("2026-10-10");
        e.clock_in_at = Some(clock_in);

        let result = reconcile_month(october(), &[e], make_date("2026-10-16"), &FixedWeekend, 1);
        let saturday = result
            .days
            .iter()
            .find(|d| d.date == make_date("2026-10-10"))
            .unwrap();
        assert_eq!(saturday.status, DayStatus::Weekend);
        assert_eq!(saturday.clock_in, Some(clock_in));
    }

    #[test]
    fn test_future_days_in_current_month() {
        let result = reconcile_month(
            october(),
            &[event("2026-10-20")],
            make_date("2026-10-16"),
            &FixedWeekend,
            1,
        );
        assert_eq!(status_on(&result.days, "2026-10-16"), DayStatus::Absent);
        assert_eq!(status_on(&result.days, "2026-10-19"), DayStatus::Future);
        assert_eq!(status_on(&result.days, "2026-10-20"), DayStatus::Future);
        assert_eq!(status_on(&result.days, "2026-10-24"), DayStatus::Weekend);
    }

    #[test]
    fn test_last_day_of_month_is_matched() {
        // 2026-09-30 is a Wednesday
        let result = reconcile_month(
            MonthPeriod::new(2026, 9).unwrap(),
            &[event("2026-09-30")],
            make_date("2026-10-16"),
            &FixedWeekend,
            1,
        );
        assert_eq!(status_on(&result.days, "2026-09-30"), DayStatus::Present);
    }

    #[test]
    fn test_events_outside_period_are_ignored() {
        let result = reconcile_month(
            october(),
            &[event("2026-09-30"), event("2026-11-02")],
            make_date("2026-12-01"),
            &FixedWeekend,
            3,
        );
        assert!(result.days.iter().all(|d| d.status != DayStatus::Present));
        assert_eq!(result.audit_step.output["ignored_events"], 2);
        assert_eq!(result.audit_step.step_number, 3);
    }

    #[test]
    fn test_audit_step_counts_statuses() {
        let result = reconcile_month(
            october(),
            &[event("2026-10-01"), event("2026-10-02")],
            make_date("2026-10-16"),
            &FixedWeekend,
            1,
        );
        let output = &result.audit_step.output;
        assert_eq!(result.audit_step.rule_id, "day_reconciliation");
        // Oct 1-16 holds 12 weekdays, Oct 17-31 holds 10, and 9 days are weekend days
        assert_eq!(output["present"], 2);
        assert_eq!(output["absent"], 10);
        assert_eq!(output["future"], 10);
        assert_eq!(output["weekend"], 9);
    }
}
