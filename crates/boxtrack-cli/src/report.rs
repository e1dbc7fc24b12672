//! Read-only report handlers.
//!
//! Each `run_*` prints either a plain-text table or, with `--json`, the
//! serialized view. The `render_*` functions build the text so it can be
//! checked without capturing stdout.

use boxtrack_core::{
    calculate_derived_metrics, calculate_target_projection, current_ranking, explicit_ticks,
    format_date_range_short, gap_to_first, latest_cumulative_revenue, latest_cumulative_tickets,
    progress_percentage, DataAnomaly, DerivedMetrics, MovieRanking, TargetProjection,
    ViewportClass, WeeklyRecord,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{format, Context};

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryView<'a> {
    pub title: &'a str,
    pub english_title: &'a str,
    pub current_revenue: u64,
    pub current_tickets: u64,
    /// `true` when the totals come from the provisional daily snapshot.
    pub from_daily_estimate: bool,
    pub ranking: Option<u32>,
    pub target_revenue: u64,
    pub gap_to_first: i64,
    pub progress_percentage: f64,
    pub last_updated: NaiveDateTime,
    pub release_date: NaiveDate,
    pub rating: &'a str,
    pub runtime: &'a str,
    pub distributor: &'a str,
    pub data_source: &'a str,
    pub missing_data: &'a [String],
    pub anomalies: &'a [DataAnomaly],
}

pub(crate) fn summary_view(ctx: &Context) -> SummaryView<'_> {
    let dataset = &ctx.dataset;
    let movie = &dataset.movie;
    let daily = dataset.latest_daily.as_ref();
    let current_revenue = latest_cumulative_revenue(&dataset.weekly, daily);
    let weekly_revenue = dataset.weekly.last().map_or(0, |w| w.cumulative_revenue);

    SummaryView {
        title: &movie.title,
        english_title: &movie.english_title,
        current_revenue,
        current_tickets: latest_cumulative_tickets(&dataset.weekly, daily),
        from_daily_estimate: current_revenue > weekly_revenue,
        ranking: current_ranking(&dataset.rankings, current_revenue),
        target_revenue: ctx.target_revenue,
        gap_to_first: gap_to_first(ctx.target_revenue, current_revenue),
        progress_percentage: progress_percentage(ctx.target_revenue, current_revenue),
        last_updated: movie.last_updated,
        release_date: movie.release_date,
        rating: &movie.rating,
        runtime: &movie.runtime,
        distributor: &movie.distributor,
        data_source: &movie.data_quality.data_source,
        missing_data: &movie.data_quality.missing_data,
        anomalies: &movie.data_quality.anomalies,
    }
}

pub(crate) fn render_summary(view: &SummaryView<'_>) -> String {
    let estimate = if view.from_daily_estimate {
        " (daily estimate)"
    } else {
        ""
    };
    let mut lines = vec![
        format!("{} ({})", view.title, view.english_title),
        format!(
            "Cumulative revenue: {} ({}){estimate}",
            format::amount(view.current_revenue),
            format::yi_u64(view.current_revenue)
        ),
        format!("Cumulative tickets: {}", format::amount(view.current_tickets)),
        format!("All-time rank:      {}", format::optional(view.ranking)),
        format!("Target:             {}", format::amount(view.target_revenue)),
        format!("Gap to first:       {}", format::signed_amount(view.gap_to_first)),
        format!("Progress:           {}", format::percent(view.progress_percentage)),
        format!("Last updated:       {}", view.last_updated.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
        format!("Released:           {}", view.release_date.format("%Y-%m-%d")),
        format!("Rating:             {}", view.rating),
        format!("Runtime:            {}", view.runtime),
        format!("Distributor:        {}", view.distributor),
        format!("Data source:        {}", view.data_source),
    ];
    if !view.missing_data.is_empty() {
        lines.push(format!("Missing data:       {}", view.missing_data.join(", ")));
    }
    if !view.anomalies.is_empty() {
        lines.push("Data notes:".to_string());
        for anomaly in view.anomalies {
            lines.push(format!(
                "  week {} ({}): {}",
                anomaly.week, anomaly.field, anomaly.note
            ));
        }
    }
    lines.join("\n")
}

/// Print the headline figures.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_summary(ctx: &Context) -> anyhow::Result<()> {
    let view = summary_view(ctx);
    if ctx.json {
        return print_json(&view);
    }
    println!("{}", render_summary(&view));
    Ok(())
}

// ---------------------------------------------------------------------------
// weekly
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct WeeklyRow<'a> {
    #[serde(flatten)]
    pub record: &'a WeeklyRecord,
    pub metrics: &'a DerivedMetrics,
}

pub(crate) fn render_weekly(weekly: &[WeeklyRecord], metrics: &[DerivedMetrics]) -> String {
    let mut lines = vec![format!(
        "{:<6}{:<8}{:>14}{:>10}{:>15}{:>10}{:>10}{:>10}{:>13}{:>8}",
        "WEEK",
        "ENDING",
        "REVENUE",
        "TICKETS",
        "CUMULATIVE",
        "CHANGE",
        "THEATERS",
        "AVG PRICE",
        "PER THEATER",
        "DECAY"
    )];
    for (week, m) in weekly.iter().zip(metrics) {
        lines.push(format!(
            "{:<6}{:<8}{:>14}{:>10}{:>15}{:>10}{:>10}{:>10.0}{:>13}{:>8}",
            week.week,
            format_date_range_short(&week.date_range),
            format::amount(week.revenue),
            format::amount(week.tickets),
            format::amount(week.cumulative_revenue),
            format::optional(week.change_rate.map(format::percent)),
            week.theaters,
            m.average_ticket_price,
            format::amount_f64(m.revenue_per_theater),
            format::optional(m.decay_rate.map(|d| format!("{d:.2}"))),
        ));
    }
    lines.join("\n")
}

/// Print the weekly table joined with derived metrics.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_weekly(ctx: &Context) -> anyhow::Result<()> {
    let weekly = &ctx.dataset.weekly;
    let metrics = calculate_derived_metrics(weekly);

    if ctx.json {
        let rows: Vec<WeeklyRow<'_>> = weekly
            .iter()
            .zip(&metrics)
            .map(|(record, metrics)| WeeklyRow { record, metrics })
            .collect();
        return print_json(&rows);
    }

    if weekly.is_empty() {
        println!("no weekly data in dataset");
        return Ok(());
    }
    println!("{}", render_weekly(weekly, &metrics));
    Ok(())
}

// ---------------------------------------------------------------------------
// projection
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionView<'a> {
    target_revenue: u64,
    #[serde(flatten)]
    projection: &'a TargetProjection,
}

pub(crate) fn render_projection(target: u64, projection: &TargetProjection) -> String {
    let mut lines = vec![
        format!("Target:                  {}", format::amount(target)),
        format!(
            "Remaining:               {}",
            format::amount_f64(projection.remaining_to_target)
        ),
        format!(
            "Required weekly average: {}",
            format::amount_f64(projection.required_weekly_average)
        ),
        format!(
            "Recent weekly average:   {}",
            format::amount_f64(projection.recent_weekly_average)
        ),
        format!(
            "Projected final:         {} ({})",
            format::amount_f64(projection.projected_final_revenue),
            format::yi(projection.projected_final_revenue)
        ),
        format!(
            "Weeks to target:         {}",
            format::optional(projection.projected_weeks_to_target)
        ),
        format!("Feasibility:             {}", projection.feasibility_score),
    ];

    if !projection.projected_weekly_data.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<6}{:>15}{:>16}", "WEEK", "REVENUE", "CUMULATIVE"));
        for week in &projection.projected_weekly_data {
            lines.push(format!(
                "{:<6}{:>15}{:>16}",
                week.week,
                format::amount_f64(week.revenue),
                format::amount_f64(week.cumulative)
            ));
        }
    }
    lines.join("\n")
}

/// Print the target projection, using `target` instead of the configured
/// target when given.
///
/// # Errors
///
/// Returns an error if `target` is zero or JSON serialization fails.
pub(crate) fn run_projection(ctx: &Context, target: Option<u64>) -> anyhow::Result<()> {
    let target = target.unwrap_or(ctx.target_revenue);
    if target == 0 {
        anyhow::bail!("target revenue must be positive");
    }

    #[allow(clippy::cast_precision_loss)]
    let projection = calculate_target_projection(
        &ctx.dataset.weekly,
        target as f64,
        &ctx.config.projection_params(),
    );

    if ctx.json {
        return print_json(&ProjectionView {
            target_revenue: target,
            projection: &projection,
        });
    }
    println!("{}", render_projection(target, &projection));
    Ok(())
}

// ---------------------------------------------------------------------------
// ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankingView<'a> {
    current_revenue: u64,
    current_ranking: Option<u32>,
    listed_entry: Option<&'a MovieRanking>,
    rankings: &'a [MovieRanking],
}

pub(crate) fn render_ranking(
    rankings: &[MovieRanking],
    listed: Option<&MovieRanking>,
    current: Option<u32>,
) -> String {
    let mut lines = vec![format!("{:<6}{:>15}{:>6}  TITLE", "RANK", "REVENUE", "YEAR")];
    for entry in rankings {
        let marker = if entry.is_active { "  \u{25c0}" } else { "" };
        lines.push(format!(
            "{:<6}{:>15}{:>6}  {}{marker}",
            entry.rank,
            format::amount(entry.revenue),
            entry.year,
            entry.title
        ));
    }
    lines.push(String::new());
    if let Some(entry) = listed {
        lines.push(format!(
            "Listed entry:     {} at {}",
            entry.rank,
            format::amount(entry.revenue)
        ));
    }
    lines.push(format!("Current position: {}", format::optional(current)));
    lines.join("\n")
}

/// Print the all-time chart.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_ranking(ctx: &Context) -> anyhow::Result<()> {
    let dataset = &ctx.dataset;
    let current_revenue =
        latest_cumulative_revenue(&dataset.weekly, dataset.latest_daily.as_ref());
    let current = current_ranking(&dataset.rankings, current_revenue);
    let listed = dataset.active_ranking();

    if ctx.json {
        return print_json(&RankingView {
            current_revenue,
            current_ranking: current,
            listed_entry: listed,
            rankings: &dataset.rankings,
        });
    }
    println!("{}", render_ranking(&dataset.rankings, listed, current));
    Ok(())
}

// ---------------------------------------------------------------------------
// ticks
// ---------------------------------------------------------------------------

/// Print the x-axis tick indices for a chart of `length` points.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_ticks(ctx: &Context, length: Option<usize>, width: u32) -> anyhow::Result<()> {
    let length = length.unwrap_or(ctx.dataset.weekly.len());
    let viewport = ViewportClass::from_width(width);
    let ticks = explicit_ticks(length, viewport);

    if ctx.json {
        return print_json(&ticks);
    }
    let joined: Vec<String> = ticks.iter().map(ToString::to_string).collect();
    println!(
        "{} viewport, {} ticks: {}",
        format!("{viewport:?}").to_lowercase(),
        ticks.len(),
        joined.join(", ")
    );
    Ok(())
}
