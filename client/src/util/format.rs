//! Display formatting for money, percentages, and timestamps.
//!
//! Output follows the en-US conventions the dashboard has always shown:
//! comma-grouped thousands, no trailing fractional zeros, `M/D/YYYY` dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Group an amount with thousands separators, keeping at most two fraction digits.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `1000.0` -> `"$1,000"`.
pub fn format_usd(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// `100.0` -> `"100"`, `25.5` -> `"25.5"`.
pub fn format_percent(value: f64) -> String {
    format!("{value}")
}

/// Render an ISO-8601 timestamp as `M/D/YYYY`; unparseable input is shown as-is.
pub fn format_created_date(raw: &str) -> String {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return format!("{}/{}/{}", u8::from(ts.month()), ts.day(), ts.year());
    }
    // Naive timestamps without an offset still carry a usable date prefix.
    let date_only = format_description!("[year]-[month]-[day]");
    raw.get(..10)
        .and_then(|prefix| time::Date::parse(prefix, date_only).ok())
        .map_or_else(
            || raw.to_owned(),
            |date| format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        )
}
