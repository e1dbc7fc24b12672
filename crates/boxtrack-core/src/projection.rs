//! Forward projection of weekly revenue under a geometric decay model.
//!
//! The trend is estimated only from weeks after the official release, since
//! preview-screening weeks swing by orders of magnitude. Simulated weeks
//! never earn more than the week before, and weeks at or after the
//! theater-drop threshold decay faster to model the loss of screenings near
//! the end of the run.

use crate::metrics::as_f64;
use crate::model::{Feasibility, ProjectedWeek, TargetProjection, WeeklyRecord};

/// Latest week a projection horizon may reach. Later `final_week` values are
/// clamped to it.
pub const MAX_FINAL_WEEK: u32 = 52;

/// Tunables for [`calculate_target_projection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionParams {
    /// Last week included in the projection horizon.
    pub final_week: u32,
    /// First week used for trend estimation.
    pub official_release_week: u32,
    /// First simulated week that uses the accelerated decay.
    pub theater_drop_week: u32,
    /// Multiplier applied to the base decay rate from `theater_drop_week` on.
    pub theater_drop_factor: f64,
    /// Decay rate used when no week-over-week ratio can be computed.
    pub default_decay_rate: f64,
    /// Number of trailing official weeks averaged for `recent_weekly_average`.
    pub trailing_window: usize,
    /// Fraction of the target that still counts as [`Feasibility::Medium`].
    pub medium_threshold: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            final_week: 13,
            official_release_week: 5,
            theater_drop_week: 11,
            theater_drop_factor: 0.7,
            default_decay_rate: 0.9,
            trailing_window: 3,
            medium_threshold: 0.95,
        }
    }
}

/// Project cumulative revenue up to `params.final_week` and assess whether
/// `target` will be reached.
///
/// `data` must be ordered by week. The current week is taken to be
/// `data.len()`, matching a series that starts at week 1 without gaps.
#[must_use]
pub fn calculate_target_projection(
    data: &[WeeklyRecord],
    target: f64,
    params: &ProjectionParams,
) -> TargetProjection {
    let Some(latest) = data.last() else {
        return TargetProjection {
            remaining_to_target: target,
            required_weekly_average: target / 4.0,
            recent_weekly_average: 0.0,
            projected_final_revenue: 0.0,
            projected_weeks_to_target: None,
            feasibility_score: Feasibility::Low,
            projected_weekly_data: Vec::new(),
        };
    };

    let current_week_number = u32::try_from(data.len()).unwrap_or(u32::MAX);
    let current_revenue = as_f64(latest.cumulative_revenue);
    let remaining_to_target = target - current_revenue;
    let weeks_to_project = params
        .final_week
        .min(MAX_FINAL_WEEK)
        .saturating_sub(current_week_number);

    let official: Vec<&WeeklyRecord> = data
        .iter()
        .filter(|w| w.week >= params.official_release_week)
        .collect();

    let recent = &official[official.len().saturating_sub(params.trailing_window)..];
    let recent_revenues: Vec<f64> = recent.iter().map(|w| as_f64(w.revenue)).collect();
    let recent_weekly_average = mean(&recent_revenues).unwrap_or(0.0);

    let ratios: Vec<f64> = official
        .windows(2)
        .filter(|pair| pair[0].revenue > 0)
        .map(|pair| as_f64(pair[1].revenue) / as_f64(pair[0].revenue))
        .collect();
    let base_decay_rate = mean(&ratios).unwrap_or(params.default_decay_rate);

    let mut projected_weekly_data = Vec::new();
    let mut last_week_revenue = as_f64(latest.revenue);
    let mut projected_cumulative = current_revenue;
    let mut projected_weeks_to_target = None;

    for offset in 1..=weeks_to_project {
        let week = current_week_number + offset;
        let rate = if week >= params.theater_drop_week {
            base_decay_rate * params.theater_drop_factor
        } else {
            base_decay_rate
        };

        let revenue = (last_week_revenue * rate.min(1.0)).max(0.0);
        projected_cumulative += revenue;
        projected_weekly_data.push(ProjectedWeek {
            week,
            revenue,
            cumulative: projected_cumulative,
        });

        if projected_weeks_to_target.is_none() && projected_cumulative >= target {
            projected_weeks_to_target = Some(offset);
        }
        last_week_revenue = revenue;
    }

    let projected_final_revenue = projected_cumulative;

    let required_weekly_average = if remaining_to_target > 0.0 && weeks_to_project > 0 {
        remaining_to_target / f64::from(weeks_to_project)
    } else {
        0.0
    };

    let feasibility_score = if projected_final_revenue >= target {
        Feasibility::High
    } else if projected_final_revenue >= target * params.medium_threshold {
        Feasibility::Medium
    } else {
        Feasibility::Low
    };

    tracing::debug!(
        current_week = current_week_number,
        weeks_to_project,
        base_decay_rate,
        projected_final_revenue,
        feasibility = %feasibility_score,
        "target projection computed"
    );

    TargetProjection {
        remaining_to_target,
        required_weekly_average,
        recent_weekly_average,
        projected_final_revenue,
        projected_weeks_to_target,
        feasibility_score,
        projected_weekly_data,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod tests;
