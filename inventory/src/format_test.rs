use super::*;

// =============================================================
// Numbers
// =============================================================

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1000.0), "1,000");
    assert_eq!(format_number(1_234_567.0), "1,234,567");
}

#[test]
fn format_number_trims_fraction_to_three_digits() {
    assert_eq!(format_number(12.5), "12.5");
    assert_eq!(format_number(1234.5678), "1,234.568");
    assert_eq!(format_number(2.10), "2.1");
}

#[test]
fn format_number_negative_values() {
    assert_eq!(format_number(-1500.25), "-1,500.25");
    assert_eq!(format_number(-0.0001), "0");
}

#[test]
fn format_money_prefixes_dollar() {
    assert_eq!(format_money(45_000.0), "$45,000");
    assert_eq!(format_money_or(None, "N/A"), "N/A");
    assert_eq!(format_money_or(Some(0.0), "N/A"), "$0");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_accepts_plain_date() {
    assert_eq!(format_date("2024-01-05").as_deref(), Some("Jan 05, 2024"));
}

#[test]
fn format_date_accepts_naive_datetime_with_micros() {
    assert_eq!(format_date("2023-11-30T10:30:00.123456").as_deref(), Some("Nov 30, 2023"));
}

#[test]
fn format_timestamp_uses_24_hour_clock() {
    assert_eq!(format_timestamp("2024-03-05T14:07:00").as_deref(), Some("Mar 05, 14:07"));
    assert_eq!(format_timestamp("2024-03-05T09:15:00Z").as_deref(), Some("Mar 05, 09:15"));
}

#[test]
fn unparsable_dates_fall_back() {
    assert_eq!(format_date("not a date"), None);
    assert_eq!(format_date_or(Some("garbage"), "N/A"), "N/A");
    assert_eq!(format_date_or(None, "N/A"), "N/A");
}

// =============================================================
// Text helpers
// =============================================================

#[test]
fn initials_takes_two_uppercased_chars() {
    assert_eq!(initials("laptop"), "LA");
    assert_eq!(initials("x"), "X");
    assert_eq!(initials(""), "");
}

#[test]
fn or_placeholder_treats_empty_as_missing() {
    assert_eq!(or_placeholder(Some("HQ"), "Not specified"), "HQ");
    assert_eq!(or_placeholder(Some(""), "Not specified"), "Not specified");
    assert_eq!(or_placeholder(None, "Unassigned"), "Unassigned");
}
