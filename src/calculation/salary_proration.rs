//! Salary proration.
//!
//! This module scales an employee's base salary by their attendance rate.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CurrencyFormat;
use crate::models::AuditStep;

use super::currency::format_currency;

/// The result of prorating a salary, including the audit step.
#[derive(Debug, Clone)]
pub struct SalaryProrationResult {
    /// `base_salary * rate / 100`, rounded to two decimal places.
    pub salary: Decimal,
    /// The salary formatted with the configured currency rules.
    pub formatted_salary: String,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prorates a base salary by an attendance rate.
///
/// Rounding to two decimal places (half away from zero) happens after the
/// multiplication. The base salary is not validated; zero or negative values
/// flow through unchanged.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::prorate_salary;
/// use attendance_engine::config::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let idr = CurrencyFormat {
///     code: "IDR".to_string(),
///     symbol: "Rp".to_string(),
///     decimal_separator: ",".to_string(),
///     grouping_separator: ".".to_string(),
///     precision: 2,
/// };
///
/// let result = prorate_salary(Decimal::new(3_000_000, 0), 77, &idr, 1);
/// assert_eq!(result.salary, Decimal::new(2_310_000, 0));
/// assert_eq!(result.formatted_salary, "Rp2.310.000,00");
/// ```
pub fn prorate_salary(
    base_salary: Decimal,
    rate: u32,
    currency: &CurrencyFormat,
    step_number: u32,
) -> SalaryProrationResult {
    let multiplier = Decimal::from(rate) / Decimal::ONE_HUNDRED;
    let salary = (base_salary * multiplier)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted_salary = format_currency(salary, currency);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_proration".to_string(),
        rule_name: "Salary Proration".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "rate": rate,
            "currency": currency.code,
        }),
        output: serde_json::json!({
            "salary": salary.to_string(),
            "formatted_salary": formatted_salary,
        }),
        reasoning: format!(
            "{} x {} = {}",
            base_salary.normalize(),
            multiplier.normalize(),
            salary.normalize()
        ),
    };

    SalaryProrationResult {
        salary,
        formatted_salary,
        audit_step,
    }
}
