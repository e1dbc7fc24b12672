use chrono::NaiveDate;

use super::*;
use crate::dataset::Dataset;

fn week(week: u32, cumulative_revenue: u64, cumulative_tickets: u64) -> WeeklyRecord {
    WeeklyRecord {
        week,
        date_range: String::new(),
        revenue: 0,
        tickets: 0,
        cumulative_revenue,
        cumulative_tickets,
        change_rate: None,
        theaters: 0,
    }
}

fn daily(cumulative_revenue: u64, cumulative_tickets: Option<u64>) -> DailySnapshot {
    DailySnapshot {
        date: NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
        day_of_week: "三".to_string(),
        daily_revenue: 1,
        cumulative_revenue,
        cumulative_tickets,
        updated_at: NaiveDate::from_ymd_opt(2026, 2, 5)
            .unwrap()
            .and_hms_opt(22, 1, 35)
            .unwrap(),
        is_estimate: true,
        note: None,
    }
}

fn ranking(rank: u32, revenue: u64) -> MovieRanking {
    MovieRanking {
        rank,
        title: format!("film {rank}"),
        revenue,
        year: 2020,
        is_active: false,
    }
}

// -----------------------------------------------------------------------
// latest totals
// -----------------------------------------------------------------------

#[test]
fn daily_ahead_of_weekly_wins() {
    let weekly = vec![week(1, 100, 10)];
    assert_eq!(latest_cumulative_revenue(&weekly, Some(&daily(150, Some(15)))), 150);
    assert_eq!(latest_cumulative_tickets(&weekly, Some(&daily(150, Some(15)))), 15);
}

#[test]
fn stale_daily_is_ignored() {
    let weekly = vec![week(1, 100, 10)];
    assert_eq!(latest_cumulative_revenue(&weekly, Some(&daily(100, Some(9)))), 100);
    assert_eq!(latest_cumulative_tickets(&weekly, Some(&daily(100, Some(9)))), 10);
}

#[test]
fn daily_without_tickets_falls_back_to_weekly() {
    let weekly = vec![week(1, 100, 10)];
    assert_eq!(latest_cumulative_tickets(&weekly, Some(&daily(150, None))), 10);
}

#[test]
fn daily_only_and_nothing_at_all() {
    assert_eq!(latest_cumulative_revenue(&[], Some(&daily(150, None))), 150);
    assert_eq!(latest_cumulative_revenue(&[], None), 0);
    assert_eq!(latest_cumulative_tickets(&[], None), 0);
}

// -----------------------------------------------------------------------
// ranking and progress
// -----------------------------------------------------------------------

#[test]
fn ranking_is_first_entry_not_above_current() {
    let rankings = vec![ranking(1, 500), ranking(2, 300), ranking(3, 100)];
    assert_eq!(current_ranking(&rankings, 600), Some(1));
    assert_eq!(current_ranking(&rankings, 300), Some(2));
    assert_eq!(current_ranking(&rankings, 299), Some(3));
}

#[test]
fn ranking_none_below_every_entry_or_zero() {
    let rankings = vec![ranking(1, 500), ranking(2, 300)];
    assert_eq!(current_ranking(&rankings, 299), None);
    assert_eq!(current_ranking(&rankings, 0), None);
}

#[test]
fn gap_goes_negative_once_passed() {
    assert_eq!(gap_to_first(500, 0), 500);
    assert_eq!(gap_to_first(500, 200), 300);
    assert_eq!(gap_to_first(500, 700), -200);
}

#[test]
fn progress_is_share_of_target() {
    assert!((progress_percentage(400, 100) - 25.0).abs() < 1e-12);
    assert_eq!(progress_percentage(400, 0), 0.0);
    assert_eq!(progress_percentage(0, 100), 0.0);
}

#[test]
fn embedded_dataset_headline_figures_are_consistent() {
    let dataset = Dataset::embedded();
    let current = latest_cumulative_revenue(&dataset.weekly, dataset.latest_daily.as_ref());
    let target = dataset.target_revenue;

    assert_eq!(current, 428_952_000);
    assert_eq!(target, 534_351_817);
    assert_eq!(current_ranking(&dataset.rankings, current), Some(4));
    assert_eq!(gap_to_first(target, current), 105_399_817);

    #[allow(clippy::cast_precision_loss)]
    let expected = 100.0 * current as f64 / target as f64;
    assert!((progress_percentage(target, current) - expected).abs() < 1e-9);

    assert_eq!(
        latest_cumulative_tickets(&dataset.weekly, dataset.latest_daily.as_ref()),
        1_558_415
    );
}

// -----------------------------------------------------------------------
// format_date_range_short
// -----------------------------------------------------------------------

#[test]
fn short_range_drops_padding() {
    assert_eq!(format_date_range_short("2025/12/01~2025/12/07"), "12/7");
    assert_eq!(format_date_range_short("2026/01/26~2026/02/01"), "2/1");
}

#[test]
fn short_range_passes_through_malformed_input() {
    assert_eq!(format_date_range_short("week one"), "week one");
    assert_eq!(format_date_range_short("2025/12/01~12/07"), "2025/12/01~12/07");
    assert_eq!(format_date_range_short("2025/12/01~2025/xx/07"), "2025/12/01~2025/xx/07");
}
