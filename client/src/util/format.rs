//! Display formatting for amounts and rates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Ringgit display with thousands separators, no cents: `RM 50,000`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let mut digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() { rest } else { format!("{rest},{grouped}") };
    }
    grouped = if grouped.is_empty() { digits } else { format!("{digits},{grouped}") };
    let sign = if amount < -0.5 { "-" } else { "" };
    format!("{sign}RM {grouped}")
}

/// One-decimal percentage display: `12.5%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
