use crate::model::{DerivedMetrics, WeeklyRecord};

const DAYS_PER_WEEK: f64 = 7.0;

/// Revenue per ticket sold, or `0.0` for a week with no tickets.
#[must_use]
pub fn average_ticket_price(week: &WeeklyRecord) -> f64 {
    if week.tickets == 0 {
        return 0.0;
    }
    as_f64(week.revenue) / as_f64(week.tickets)
}

/// Ratio of this week's revenue to the previous week's.
///
/// `None` for the first week or when the previous week earned nothing.
#[must_use]
pub fn decay_rate(current: &WeeklyRecord, previous: Option<&WeeklyRecord>) -> Option<f64> {
    let previous = previous.filter(|p| p.revenue > 0)?;
    Some(as_f64(current.revenue) / as_f64(previous.revenue))
}

/// Compute [`DerivedMetrics`] for every week, in input order.
#[must_use]
pub fn calculate_derived_metrics(data: &[WeeklyRecord]) -> Vec<DerivedMetrics> {
    data.iter()
        .enumerate()
        .map(|(index, week)| {
            let previous = index.checked_sub(1).and_then(|i| data.get(i));
            let theaters = f64::from(week.theaters);
            DerivedMetrics {
                week: week.week,
                average_ticket_price: average_ticket_price(week),
                revenue_per_theater: if week.theaters > 0 {
                    as_f64(week.revenue) / theaters
                } else {
                    0.0
                },
                tickets_per_theater: if week.theaters > 0 {
                    as_f64(week.tickets) / theaters
                } else {
                    0.0
                },
                decay_rate: decay_rate(week, previous),
                daily_average: as_f64(week.revenue) / DAYS_PER_WEEK,
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn as_f64(value: u64) -> f64 {
    value as f64
}
