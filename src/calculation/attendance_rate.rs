//! Attendance rate aggregation.
//!
//! This module folds a month of [`DayRecord`]s into an attendance rate:
//! present days over eligible days, as a whole percentage.

use crate::models::{AuditStep, DayRecord, DayStatus};

/// The result of aggregating a month's attendance, including the audit step.
#[derive(Debug, Clone)]
pub struct AttendanceRateResult {
    /// Days with status Present.
    pub present_days: u32,
    /// Days with status Present or Absent.
    pub eligible_days: u32,
    /// `round(present_days / eligible_days * 100)`, or 0 with no eligible days.
    pub rate: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the attendance rate for a month.
///
/// Weekend and future days are excluded from the denominator. Rounding is
/// half-up, done in integer arithmetic so the result is exact. With no
/// eligible days the rate is 0.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_attendance_rate;
///
/// let result = calculate_attendance_rate(&[], 1);
/// assert_eq!(result.eligible_days, 0);
/// assert_eq!(result.rate, 0);
/// ```
pub fn calculate_attendance_rate(days: &[DayRecord], step_number: u32) -> AttendanceRateResult {
    let present_days = days
        .iter()
        .filter(|d| d.status == DayStatus::Present)
        .count() as u32;
    let eligible_days = days.iter().filter(|d| d.status.is_eligible()).count() as u32;

    let rate = rate_percent(present_days, eligible_days);

    let reasoning = if eligible_days == 0 {
        "No eligible days in period; rate defined as 0%".to_string()
    } else {
        format!(
            "round({} / {} x 100) = {}%",
            present_days, eligible_days, rate
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_rate".to_string(),
        rule_name: "Attendance Rate".to_string(),
        input: serde_json::json!({
            "present_days": present_days,
            "eligible_days": eligible_days,
        }),
        output: serde_json::json!({
            "rate": rate,
        }),
        reasoning,
    };

    AttendanceRateResult {
        present_days,
        eligible_days,
        rate,
        audit_step,
    }
}

/// Half-up rounded percentage: `floor((200p + e) / 2e)` equals `round(100p / e)`.
fn rate_percent(present: u32, eligible: u32) -> u32 {
    if eligible == 0 {
        return 0;
    }
    let present = u64::from(present.min(eligible));
    let eligible = u64::from(eligible);
    ((present * 200 + eligible) / (eligible * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn days_with(present: usize, absent: usize, weekend: usize, future: usize) -> Vec<DayRecord> {
        let statuses = std::iter::repeat_n(DayStatus::Present, present)
            .chain(std::iter::repeat_n(DayStatus::Absent, absent))
            .chain(std::iter::repeat_n(DayStatus::Weekend, weekend))
            .chain(std::iter::repeat_n(DayStatus::Future, future));

        let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        statuses
            .enumerate()
            .map(|(i, status)| DayRecord {
                date: start + chrono::Duration::days(i as i64),
                weekday_index: 1,
                clock_in: None,
                clock_out: None,
                status,
            })
            .collect()
    }

    /// 30-day month, 4 weekend days, 26 eligible, 20 present
    #[test]
    fn test_twenty_of_twenty_six_rounds_to_77() {
        let result = calculate_attendance_rate(&days_with(20, 6, 4, 0), 1);
        assert_eq!(result.present_days, 20);
        assert_eq!(result.eligible_days, 26);
        assert_eq!(result.rate, 77);
        assert_eq!(result.audit_step.reasoning, "round(20 / 26 x 100) = 77%");
    }

    #[test]
    fn test_future_and_weekend_days_excluded() {
        let result = calculate_attendance_rate(&days_with(5, 5, 8, 12), 1);
        assert_eq!(result.eligible_days, 10);
        assert_eq!(result.rate, 50);
    }

    #[test]
    fn test_no_eligible_days_is_zero_not_fault() {
        let result = calculate_attendance_rate(&days_with(0, 0, 8, 22), 2);
        assert_eq!(result.eligible_days, 0);
        assert_eq!(result.rate, 0);
        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("No eligible days"));
    }

    #[test]
    fn test_half_rounds_up() {
        // 1 / 8 = 12.5%
        assert_eq!(rate_percent(1, 8), 13);
        // 3 / 8 = 37.5%
        assert_eq!(rate_percent(3, 8), 38);
        // 1 / 3 = 33.33%
        assert_eq!(rate_percent(1, 3), 33);
        // 2 / 3 = 66.67%
        assert_eq!(rate_percent(2, 3), 67);
    }

    #[test]
    fn test_full_and_zero_attendance() {
        assert_eq!(calculate_attendance_rate(&days_with(22, 0, 8, 0), 1).rate, 100);
        assert_eq!(calculate_attendance_rate(&days_with(0, 22, 8, 0), 1).rate, 0);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let days = days_with(17, 4, 9, 1);
        let first = calculate_attendance_rate(&days, 1);
        let second = calculate_attendance_rate(&days, 1);
        assert_eq!(first.rate, second.rate);
        assert_eq!(first.audit_step, second.audit_step);
    }

    proptest! {
        #[test]
        fn prop_rate_is_bounded(present in 0usize..32, absent in 0usize..32, other in 0usize..32) {
            let result = calculate_attendance_rate(&days_with(present, absent, other, 0), 1);
            prop_assert!(result.rate <= 100);
            if present + absent == 0 {
                prop_assert_eq!(result.rate, 0);
            }
            if absent == 0 && present > 0 {
                prop_assert_eq!(result.rate, 100);
            }
        }
    }
}
