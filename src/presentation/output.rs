//! Output Formatting
//!
//! Plain-text formatting shared by the terminal views: odometer readings,
//! inspection timestamps and the issue badge.

use chrono::{DateTime, Local, TimeZone, Utc};

/// `45210.5` -> `"45,210.5"`; at most three fraction digits, no trailing zeros.
pub fn format_odometer(km: f64) -> String {
    if !km.is_finite() {
        return km.to_string();
    }

    let fixed = format!("{:.3}", km.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    if km < 0.0 && fixed != "0.000" {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inspection timestamp in the local time zone, e.g. `3/7/2026, 2:05:09 PM`.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    format_created_at_in(created_at, &Local)
}

pub fn format_created_at_in<Tz: TimeZone>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Badge text for a record. ASCII variants avoid the symbols.
pub fn issue_badge(has_issue: bool, unicode: bool) -> &'static str {
    match (has_issue, unicode) {
        (true, true) => "⚠ Has Issues",
        (false, true) => "✓ All OK",
        (true, false) => "[!] Has Issues",
        (false, false) => "[OK] All OK",
    }
}
