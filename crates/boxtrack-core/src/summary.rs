//! Headline figures: latest totals, chart position, and progress to target.

use crate::metrics::as_f64;
use crate::model::{DailySnapshot, MovieRanking, WeeklyRecord};

/// Latest known cumulative revenue.
///
/// The provisional daily snapshot is preferred only while it is strictly
/// ahead of the last published week; otherwise the weekly figure wins.
#[must_use]
pub fn latest_cumulative_revenue(
    weekly: &[WeeklyRecord],
    latest_daily: Option<&DailySnapshot>,
) -> u64 {
    let weekly_total = weekly.last().map(|w| w.cumulative_revenue);
    prefer_newer(latest_daily.map(|d| d.cumulative_revenue), weekly_total)
}

/// Latest known cumulative ticket count, using the same precedence as
/// [`latest_cumulative_revenue`].
#[must_use]
pub fn latest_cumulative_tickets(
    weekly: &[WeeklyRecord],
    latest_daily: Option<&DailySnapshot>,
) -> u64 {
    let weekly_total = weekly.last().map(|w| w.cumulative_tickets);
    prefer_newer(latest_daily.and_then(|d| d.cumulative_tickets), weekly_total)
}

fn prefer_newer(daily: Option<u64>, weekly: Option<u64>) -> u64 {
    match (daily.filter(|&d| d > 0), weekly) {
        (Some(d), None) => d,
        (Some(d), Some(w)) if d > w => d,
        (_, w) => w.unwrap_or(0),
    }
}

/// 1-based chart position `current` would hold: the first entry whose
/// revenue does not exceed it.
///
/// `rankings` must be sorted by revenue, highest first. Returns `None` when
/// `current` is zero or below every entry.
#[must_use]
pub fn current_ranking(rankings: &[MovieRanking], current: u64) -> Option<u32> {
    if current == 0 {
        return None;
    }
    let index = rankings.iter().position(|m| m.revenue <= current)?;
    u32::try_from(index + 1).ok()
}

/// Revenue still needed to reach `target`. Negative once it is passed.
#[must_use]
pub fn gap_to_first(target: u64, current: u64) -> i64 {
    let gap = i128::from(target) - i128::from(current);
    i64::try_from(gap).unwrap_or(if gap > 0 { i64::MAX } else { i64::MIN })
}

/// `current` as a percentage of `target`, uncapped.
#[must_use]
pub fn progress_percentage(target: u64, current: u64) -> f64 {
    if current == 0 || target == 0 {
        return 0.0;
    }
    as_f64(current) / as_f64(target) * 100.0
}

/// Shorten `"2025/12/01~2025/12/07"` to the end date without padding, `"12/7"`.
///
/// Returns the input unchanged when it does not look like a date range.
#[must_use]
pub fn format_date_range_short(date_range: &str) -> String {
    let Some((_, end)) = date_range.split_once('~') else {
        return date_range.to_string();
    };
    let parts: Vec<&str> = end.split('/').collect();
    let [_, month, day] = parts.as_slice() else {
        return date_range.to_string();
    };
    match (month.trim().parse::<u32>(), day.trim().parse::<u32>()) {
        (Ok(month), Ok(day)) => format!("{month}/{day}"),
        _ => date_range.to_string(),
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
