use crate::stats::AggregateState;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedMetrics {
    pub visits_per_hour: f64,
    pub errors_per_hour: f64,
    pub visits_per_user: f64,
    pub traffic_per_hour: f64,
    pub peak_visits_per_second: u64,
    pub max_visits_per_user: u64,
}

/// Whole hours between the bounds, never less than one.
pub fn hours_between(min: DateTime<Utc>, max: DateTime<Utc>) -> i64 {
    (max - min).num_hours().max(1)
}

pub(crate) fn compute_derived(state: &AggregateState) -> DerivedMetrics {
    let Some((min, max)) = state.time_bounds() else {
        return DerivedMetrics::default();
    };

    let hours = hours_between(min, max) as f64;
    let unique_clients = state.unique_clients();

    DerivedMetrics {
        visits_per_hour: state.human_visits as f64 / hours,
        errors_per_hour: state.error_count as f64 / hours,
        visits_per_user: if unique_clients > 0 {
            state.human_visits as f64 / unique_clients as f64
        } else {
            0.0
        },
        traffic_per_hour: state.total_traffic as f64 / hours,
        peak_visits_per_second: state.visits_per_second.values().copied().max().unwrap_or(0),
        max_visits_per_user: state.visits_per_client.values().copied().max().unwrap_or(0),
    }
}
