//! Currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CurrencyFormat;

/// Formats an amount using the configured currency rules.
///
/// The amount is rounded half away from zero to `format.precision` places,
/// integer digits are grouped in threes, and negative amounts get a leading
/// `-` before the symbol.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::format_currency;
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
/// assert_eq!(format_currency(Decimal::new(2_310_000, 0), &idr), "Rp2.310.000,00");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(format.precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(format.precision);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + format.symbol.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&group_digits(integer, &format.grouping_separator));
    if let Some(fraction) = fraction {
        out.push_str(&format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
