use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One officially published box-office week.
///
/// Weeks are counted from the first screening (including preview
/// screenings), so week 1 may predate the official release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRecord {
    /// 1-based week number since the first screening.
    pub week: u32,
    /// Reporting period, e.g. `"2025/12/01~2025/12/07"`.
    pub date_range: String,
    pub revenue: u64,
    pub tickets: u64,
    /// Running total including this week.
    pub cumulative_revenue: u64,
    pub cumulative_tickets: u64,
    /// Week-over-week revenue change in percent, as published. `None` for week 1.
    pub change_rate: Option<f64>,
    pub theaters: u32,
}

/// A provisional single-day figure captured ahead of the weekly report.
///
/// Superseded once a [`WeeklyRecord`] covering its date is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub date: NaiveDate,
    /// Single-character weekday label, e.g. `"六"`.
    pub day_of_week: String,
    pub daily_revenue: u64,
    pub cumulative_revenue: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_tickets: Option<u64>,
    pub updated_at: NaiveDateTime,
    pub is_estimate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub week: u32,
    pub average_ticket_price: f64,
    pub revenue_per_theater: f64,
    pub tickets_per_theater: f64,
    /// This week's revenue divided by last week's; below 1.0 means decline.
    pub decay_rate: Option<f64>,
    pub daily_average: f64,
}

/// Coarse likelihood that the target is reached by the projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Feasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feasibility::High => write!(f, "high"),
            Feasibility::Medium => write!(f, "medium"),
            Feasibility::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedWeek {
    pub week: u32,
    pub revenue: f64,
    pub cumulative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProjection {
    /// Target minus current cumulative revenue. Negative once the target is passed.
    pub remaining_to_target: f64,
    pub required_weekly_average: f64,
    pub recent_weekly_average: f64,
    pub projected_final_revenue: f64,
    /// Offset (1 = next week) of the first simulated week reaching the target.
    pub projected_weeks_to_target: Option<u32>,
    pub feasibility_score: Feasibility,
    pub projected_weekly_data: Vec<ProjectedWeek>,
}

/// An entry in the all-time national box-office chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRanking {
    pub rank: u32,
    pub title: String,
    pub revenue: u64,
    pub year: u16,
    /// `true` for the tracked film.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAnomaly {
    pub week: u32,
    pub field: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub last_updated: NaiveDateTime,
    pub data_source: String,
    pub total_weeks: u32,
    #[serde(default)]
    pub missing_data: Vec<String>,
    #[serde(default)]
    pub anomalies: Vec<DataAnomaly>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub title: String,
    pub english_title: String,
    pub release_date: NaiveDate,
    pub rating: String,
    /// Running time as `HH:MM:SS`.
    pub runtime: String,
    pub distributor: String,
    pub last_updated: NaiveDateTime,
    pub data_quality: DataQuality,
}
