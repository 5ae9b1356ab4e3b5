//! Presentation formatting for numbers, money, and backend timestamps.
//!
//! Numbers follow en-US `toLocaleString()`: comma grouping, at most three
//! fraction digits, trailing zeros trimmed. Dates accept the backend's
//! `YYYY-MM-DD`, naive ISO datetimes, and RFC 3339.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

const DATE_INPUT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_INPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
const DATE_OUTPUT: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day], [year]");
const TIME_OUTPUT: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day], [hour]:[minute]");

/// Group a number the way en-US `toLocaleString()` does.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }

    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = whole.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `$` + grouped amount.
#[must_use]
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Money or a fallback label when the amount is absent.
#[must_use]
pub fn format_money_or(value: Option<f64>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_owned(), format_money)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse any timestamp shape the backend emits into wall-clock time.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(with_offset.date(), with_offset.time()));
    }
    if let Ok(naive) = PrimitiveDateTime::parse(raw, DATE_TIME_INPUT) {
        return Some(naive);
    }
    Date::parse(raw, DATE_INPUT).ok().map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

/// `MMM dd, yyyy`, e.g. `Jan 05, 2024`.
#[must_use]
pub fn format_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).and_then(|dt| dt.format(DATE_OUTPUT).ok())
}

/// `MMM dd, HH:mm`, e.g. `Mar 05, 14:07`.
#[must_use]
pub fn format_timestamp(raw: &str) -> Option<String> {
    parse_timestamp(raw).and_then(|dt| dt.format(TIME_OUTPUT).ok())
}

/// Optional date with a fallback label for absent or unparsable values.
#[must_use]
pub fn format_date_or(raw: Option<&str>, fallback: &str) -> String {
    raw.and_then(format_date).unwrap_or_else(|| fallback.to_owned())
}

/// First two characters of a name, uppercased, for avatar badges.
#[must_use]
pub fn initials(name: &str) -> String {
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Text or a placeholder when absent or empty.
#[must_use]
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => placeholder.to_owned(),
    }
}
