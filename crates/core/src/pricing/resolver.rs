use std::cmp::Reverse;

use crate::domain::catalog::{BenchmarkRate, GeoScope};
use crate::domain::quote::Lane;

/// Filter catalog rates to the given lane and rank them by descending
/// geographic specificity. Ties keep catalog order (stable sort), so the
/// first match for a (mode, service_level) pair is the most specific one.
pub fn resolve_lane_rates<'a>(lane: &Lane, rates: &'a [BenchmarkRate]) -> Vec<&'a BenchmarkRate> {
    let mut candidates: Vec<&BenchmarkRate> = rates
        .iter()
        .filter(|rate| {
            endpoint_matches(&lane.origin, &rate.origin)
                && endpoint_matches(&lane.destination, &rate.destination)
        })
        .collect();
    candidates.sort_by_key(|rate| Reverse(rate_specificity(rate)));
    candidates
}

/// First candidate for the requested mode and service level, or `None` when
/// the catalog has no match (the category line is then simply omitted).
pub fn find_rate<'a>(
    candidates: &[&'a BenchmarkRate],
    mode: &str,
    service_level: &str,
) -> Option<&'a BenchmarkRate> {
    candidates
        .iter()
        .copied()
        .find(|rate| rate.mode == mode && rate.service_level == service_level)
}

/// An absent state/zip3 on either side is a wildcard, not a mismatch.
fn endpoint_matches(lane: &GeoScope, rate: &GeoScope) -> bool {
    if lane.country != rate.country {
        return false;
    }
    let state_matches = match (&lane.state, &rate.state) {
        (Some(lane_state), Some(rate_state)) => lane_state == rate_state,
        _ => true,
    };
    let zip3_matches = match (&lane.zip3, &rate.zip3) {
        (Some(lane_zip3), Some(rate_zip3)) => lane_zip3 == rate_zip3,
        _ => true,
    };
    state_matches && zip3_matches
}

/// Specificity of one endpoint scope: zip3 = 4, state = 2, country-only = 1.
fn scope_specificity(scope: &GeoScope) -> u8 {
    if scope.zip3.is_some() {
        4
    } else if scope.state.is_some() {
        2
    } else {
        1
    }
}

fn rate_specificity(rate: &BenchmarkRate) -> u8 {
    scope_specificity(&rate.origin) + scope_specificity(&rate.destination)
}
