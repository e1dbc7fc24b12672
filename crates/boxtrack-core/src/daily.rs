//! Parser for informal daily box-office status lines.
//!
//! The expected template is
//! `"<M>/<D>(<weekday>) #<label> <amount><unit>，累計: <amount><unit>"`,
//! e.g. `"1/31(六) #陽光女子合唱團 3027.8萬，累計: 3億6604.6萬"`. Amounts use
//! the `萬` (×10⁴) and `億` (×10⁸) magnitude suffixes. Anything that does not
//! fit the template yields `None`; a partial snapshot is never produced.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;

use crate::metrics::as_f64;
use crate::model::DailySnapshot;

const WAN: f64 = 10_000.0;
const YI: f64 = 100_000_000.0;

/// Months up to this value are assumed to fall in the reference year; later
/// months belong to the year before.
const YEAR_ROLLOVER_MONTH: u32 = 6;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})\(([日一二三四五六])\)").expect("valid date regex")
});

static DAILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\S+\s+([0-9.]+)(萬|億)").expect("valid daily revenue regex"));

static CUMULATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"累計[：:]\s*(?:([0-9]+)億)?([0-9.]+)?(萬)?").expect("valid cumulative regex")
});

/// Parse a status line, inferring the year from `captured_at`.
///
/// Months 1–6 are placed in `captured_at`'s year and months 7–12 in the
/// previous year. This fits a run that starts in the second half of one year
/// and ends in the first half of the next; use [`parse_daily_info_for_year`]
/// when the year is known.
#[must_use]
pub fn parse_daily_info(input: &str, captured_at: NaiveDateTime) -> Option<DailySnapshot> {
    parse_snapshot(input, None, captured_at)
}

/// Parse a status line whose date is known to fall in `year`.
#[must_use]
pub fn parse_daily_info_for_year(
    input: &str,
    year: i32,
    captured_at: NaiveDateTime,
) -> Option<DailySnapshot> {
    parse_snapshot(input, Some(year), captured_at)
}

/// Parse a status line stamped with the local wall clock.
#[must_use]
pub fn parse_daily_info_now(input: &str) -> Option<DailySnapshot> {
    parse_daily_info(input, Local::now().naive_local())
}

fn parse_snapshot(
    input: &str,
    year: Option<i32>,
    captured_at: NaiveDateTime,
) -> Option<DailySnapshot> {
    let Some(date_caps) = DATE_RE.captures(input) else {
        tracing::debug!(input, "daily line has no date/weekday marker");
        return None;
    };
    let month: u32 = date_caps[1].parse().ok()?;
    let day: u32 = date_caps[2].parse().ok()?;
    let day_of_week = date_caps[3].to_string();

    let year = year.unwrap_or_else(|| infer_year(month, captured_at.year()));
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        tracing::debug!(input, year, month, day, "daily line has an impossible date");
        return None;
    };

    let Some(daily_revenue) = parse_daily_revenue(input) else {
        tracing::debug!(input, "daily line has no single-day figure");
        return None;
    };
    let Some(cumulative_revenue) = parse_cumulative_revenue(input) else {
        tracing::debug!(input, "daily line has no cumulative figure");
        return None;
    };

    Some(DailySnapshot {
        date,
        day_of_week,
        daily_revenue: round_currency(daily_revenue),
        cumulative_revenue: round_currency(cumulative_revenue),
        cumulative_tickets: None,
        updated_at: captured_at.with_nanosecond(0).unwrap_or(captured_at),
        is_estimate: true,
        note: None,
    })
}

fn infer_year(month: u32, reference_year: i32) -> i32 {
    if month <= YEAR_ROLLOVER_MONTH {
        reference_year
    } else {
        reference_year - 1
    }
}

fn parse_daily_revenue(input: &str) -> Option<f64> {
    let caps = DAILY_RE.captures(input)?;
    let value = parse_amount(&caps[1])?;
    let unit = if &caps[2] == "億" { YI } else { WAN };
    Some(value * unit)
}

/// Sum the `億` and `萬` components of the cumulative clause.
///
/// `"3億6604.6萬"`, `"8888萬"` and `"1.5億"` are all accepted. A bare number
/// with neither suffix nor `億` prefix is read as hundred-millions.
fn parse_cumulative_revenue(input: &str) -> Option<f64> {
    let caps = CUMULATIVE_RE.captures(input)?;
    let yi_part = caps.get(1);
    let rest = caps.get(2);
    if yi_part.is_none() && rest.is_none() {
        return None;
    }

    let mut total = 0.0;
    if let Some(yi) = yi_part {
        let yi: u64 = yi.as_str().parse().ok()?;
        total += as_f64(yi) * YI;
    }
    if let Some(rest) = rest {
        let value = parse_amount(rest.as_str())?;
        if caps.get(3).is_some() || yi_part.is_some() {
            total += value * WAN;
        } else {
            total += value * YI;
        }
    }
    Some(total)
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_currency(value: f64) -> u64 {
    value.round() as u64
}

#[cfg(test)]
#[path = "daily_test.rs"]
mod tests;
