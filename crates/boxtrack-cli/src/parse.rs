use boxtrack_core::{parse_daily_info_for_year, parse_daily_info_now, DailySnapshot, WeeklyRecord};
use chrono::Local;

use crate::{format, report::print_json, Context};

const EXAMPLE_LINE: &str = "1/31(六) #片名 3027.8萬，累計: 3億6604.6萬";

/// Parse a pasted daily status line and show what it contains.
///
/// An unrecognized line is reported but is not an error: it simply means
/// there is nothing new to show.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_parse(ctx: &Context, text: &str, year: Option<i32>) -> anyhow::Result<()> {
    let snapshot = match year.or(ctx.config.reference_year) {
        Some(year) => parse_daily_info_for_year(text, year, Local::now().naive_local()),
        None => parse_daily_info_now(text),
    };

    if ctx.json {
        return print_json(&snapshot);
    }

    match snapshot {
        Some(snapshot) => println!(
            "{}",
            render_snapshot(&snapshot, ctx.dataset.weekly.last())
        ),
        None => println!("no snapshot recognized; expected e.g. \"{EXAMPLE_LINE}\""),
    }
    Ok(())
}

pub(crate) fn render_snapshot(
    snapshot: &DailySnapshot,
    latest_week: Option<&WeeklyRecord>,
) -> String {
    let mut lines = vec![
        format!(
            "Date:               {} ({})",
            snapshot.date.format("%Y/%m/%d"),
            snapshot.day_of_week
        ),
        format!("Daily revenue:      {}", format::amount(snapshot.daily_revenue)),
        format!(
            "Cumulative revenue: {} ({})",
            format::amount(snapshot.cumulative_revenue),
            format::yi_u64(snapshot.cumulative_revenue)
        ),
        format!(
            "Captured at:        {}{}",
            snapshot.updated_at.format("%Y-%m-%d %H:%M:%S"),
            if snapshot.is_estimate { " (estimate)" } else { "" }
        ),
    ];
    if let Some(week) = latest_week {
        if snapshot.cumulative_revenue <= week.cumulative_revenue {
            lines.push(format!(
                "Not newer than week {} ({}); the weekly figure takes precedence.",
                week.week,
                format::amount(week.cumulative_revenue)
            ));
        }
    }
    lines.join("\n")
}
