//! Predicates that classify string content.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap())
}

fn unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?\d+(\.\d+)?(px|pt|pc|cm|mm|in|em|rem|ex|%|ch|vh|vw|vmin|vmax)$").unwrap()
    })
}

/// Coerce a string to a number with loose numeric-literal rules.
///
/// Surrounding whitespace is ignored, the empty string is `0`, `Infinity`
/// and `0x`/`0o`/`0b` prefixed literals are understood, and anything that is
/// not a decimal literal is NaN.
pub fn to_number(value: &str) -> f64 {
    let s = value.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }
    // `f64::from_str` also accepts "inf" and "nan", which are not literals here.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Decimal number literal with an optional leading minus: `"1"`, `"-1"`, `"1.5"`.
pub fn is_number_string(value: &str) -> bool {
    number_regex().is_match(value)
}

/// CSS length with a unit suffix: `"120px"`, `"-10.5pt"`, `"50%"`.
pub fn is_unit_string(value: &str) -> bool {
    unit_regex().is_match(value)
}

pub fn is_boolean_string(value: &str) -> bool {
    value == "true" || value == "false"
}

/// Parse an RFC 3339 timestamp, a `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp
/// without offset (read as UTC), or a bare `YYYY-MM-DD` date (UTC midnight).
pub fn parse_date_string(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(value) {
        return Some(d.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(d.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

/// A parseable date string that lies after the Unix epoch.
pub fn is_date_string(value: &str) -> bool {
    parse_date_string(value).is_some_and(|d| d.timestamp_millis() > 0)
}
