use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::*;

const SAMPLE: &str = "1/31(六) #陽光女子合唱團 3027.8萬，累計: 3億6604.6萬";

fn captured() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 1)
        .unwrap()
        .and_hms_opt(21, 15, 30)
        .unwrap()
}

// -----------------------------------------------------------------------
// full lines
// -----------------------------------------------------------------------

#[test]
fn parses_sample_line() {
    let snap = parse_daily_info(SAMPLE, captured()).expect("sample should parse");
    assert_eq!(snap.date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    assert_eq!(snap.day_of_week, "六");
    assert_eq!(snap.daily_revenue, 30_278_000);
    assert_eq!(snap.cumulative_revenue, 366_046_000);
    assert!(snap.is_estimate);
    assert!(snap.cumulative_tickets.is_none());
    assert!(snap.note.is_none());
    assert_eq!(snap.updated_at, captured());
}

#[test]
fn daily_figure_in_yi() {
    let snap = parse_daily_info("2/1(日) #片名 1.5億，累計: 4億", captured()).unwrap();
    assert_eq!(snap.daily_revenue, 150_000_000);
    assert_eq!(snap.cumulative_revenue, 400_000_000);
}

#[test]
fn cumulative_wan_only() {
    let snap = parse_daily_info("1/10(六) #片名 500萬，累計: 8888萬", captured()).unwrap();
    assert_eq!(snap.cumulative_revenue, 88_880_000);
}

#[test]
fn cumulative_decimal_yi_with_full_width_colon() {
    let snap = parse_daily_info("1/10(六) #片名 500萬，累計：1.5億", captured()).unwrap();
    assert_eq!(snap.cumulative_revenue, 150_000_000);
}

#[test]
fn cumulative_bare_number_reads_as_yi() {
    let snap = parse_daily_info("1/10(六) #片名 500萬，累計: 4", captured()).unwrap();
    assert_eq!(snap.cumulative_revenue, 400_000_000);
}

#[test]
fn rounds_to_whole_currency_units() {
    let snap = parse_daily_info("1/10(六) #片名 0.00006萬，累計: 0.00014萬", captured()).unwrap();
    assert_eq!(snap.daily_revenue, 1);
    assert_eq!(snap.cumulative_revenue, 1);
}

#[test]
fn timestamp_truncated_to_seconds() {
    let with_nanos = captured().with_nanosecond(123_456_789).unwrap();
    let snap = parse_daily_info(SAMPLE, with_nanos).unwrap();
    assert_eq!(snap.updated_at.nanosecond(), 0);
    assert_eq!(snap.updated_at, captured());
}

// -----------------------------------------------------------------------
// year inference
// -----------------------------------------------------------------------

#[test]
fn late_months_fall_in_previous_year() {
    let snap = parse_daily_info("12/31(三) #片名 100萬，累計: 300萬", captured()).unwrap();
    assert_eq!(snap.date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
}

#[test]
fn june_stays_in_reference_year() {
    let snap = parse_daily_info("6/30(二) #片名 100萬，累計: 300萬", captured()).unwrap();
    assert_eq!(snap.date, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
}

#[test]
fn explicit_year_overrides_inference() {
    let snap = parse_daily_info_for_year("12/31(三) #片名 100萬，累計: 300萬", 2030, captured())
        .unwrap();
    assert_eq!(snap.date, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
}

// -----------------------------------------------------------------------
// rejection
// -----------------------------------------------------------------------

#[test]
fn missing_date_returns_none() {
    assert!(parse_daily_info("#陽光女子合唱團 3027.8萬，累計: 3億6604.6萬", captured()).is_none());
}

#[test]
fn date_without_weekday_returns_none() {
    assert!(parse_daily_info("1/31 #片名 3027.8萬，累計: 3億", captured()).is_none());
}

#[test]
fn missing_daily_figure_returns_none() {
    assert!(parse_daily_info("1/31(六) 累計: 3億6604.6萬", captured()).is_none());
}

#[test]
fn missing_cumulative_returns_none() {
    assert!(parse_daily_info("1/31(六) #片名 3027.8萬", captured()).is_none());
}

#[test]
fn cumulative_without_digits_returns_none() {
    assert!(parse_daily_info("1/31(六) #片名 3027.8萬，累計: 萬", captured()).is_none());
}

#[test]
fn impossible_date_returns_none() {
    assert!(parse_daily_info("2/30(一) #片名 100萬，累計: 300萬", captured()).is_none());
}

#[test]
fn malformed_amount_returns_none() {
    assert!(parse_daily_info("1/31(六) #片名 30..2萬，累計: 300萬", captured()).is_none());
}

#[test]
fn empty_input_returns_none() {
    assert!(parse_daily_info("", captured()).is_none());
}

#[test]
fn now_variant_marks_estimate() {
    let snap = parse_daily_info_now(SAMPLE).expect("sample should parse");
    assert!(snap.is_estimate);
    assert_eq!(snap.updated_at.nanosecond(), 0);
}
