//! Display Formatting
//!
//! Pure helpers that turn raw API numbers and date strings into the strings
//! shown on the dashboard.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an amount as a currency string: `Ksh 50,000.00`.
///
/// Always renders exactly two decimal digits with US-style thousands
/// grouping. Non-finite input produces a best-effort string instead of
/// panicking, so a bad API value never takes the dashboard down.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "Ksh NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 {
            "Ksh ∞".to_string()
        } else {
            "Ksh -∞".to_string()
        };
    }

    let negative = amount < 0.0;
    // Round at cent precision before splitting, so 999.999 becomes 1,000.00.
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    format!(
        "Ksh {}{}.{:02}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        fraction
    )
}

/// Insert a comma between every group of three digits.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a date string as `Jan 5, 2026`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, and RFC 3339 timestamps.
/// Anything unparseable renders the `"Invalid Date"` marker.
pub fn format_date(raw: &str) -> String {
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()));

    match parsed {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
