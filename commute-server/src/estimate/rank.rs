//! Feasibility ceilings, suggestion and alternatives.

use crate::domain::{Mode, ModeResult, RecommendationResult};

/// Flights shorter than this are shown but never suggested.
pub const SHORT_HAUL_FLIGHT_KM: f64 = 500.0;

/// Number of alternatives shown next to the suggestion.
pub const MAX_ALTERNATIVES: usize = 3;

/// Whether `item` is within its mode's distance ceiling.
pub fn within_ceiling(item: &ModeResult) -> bool {
    item.mode
        .max_distance_km()
        .is_none_or(|max| item.distance_km <= max)
}

/// Drop every entry past its mode's ceiling, keeping order.
pub fn apply_ceilings(items: Vec<ModeResult>) -> Vec<ModeResult> {
    items.into_iter().filter(within_ceiling).collect()
}

fn is_short_haul_flight(item: &ModeResult) -> bool {
    item.mode == Mode::Aeroplane && item.distance_km < SHORT_HAUL_FLIGHT_KM
}

fn lowest<'a>(pool: Vec<&'a ModeResult>) -> Option<&'a ModeResult> {
    pool.into_iter().min_by(|a, b| a.score().total_cmp(&b.score()))
}

/// Lowest-scoring feasible entry, ignoring short-haul flights when possible.
///
/// Ties go to the earlier entry.
pub fn suggest(results: &[ModeResult]) -> Option<&ModeResult> {
    let feasible: Vec<&ModeResult> = results.iter().filter(|r| r.is_feasible()).collect();
    let preferred: Vec<&ModeResult> = feasible
        .iter()
        .copied()
        .filter(|r| !is_short_haul_flight(r))
        .collect();

    if preferred.is_empty() {
        lowest(feasible)
    } else {
        lowest(preferred)
    }
}

/// Apply ceilings to `items` and pick the suggestion.
///
/// `None` when no entry is feasible.
pub fn recommend(items: Vec<ModeResult>) -> Option<RecommendationResult> {
    let results = apply_ceilings(items);
    let suggested = suggest(&results)?.clone();
    Some(RecommendationResult::new(suggested, results))
}

/// Up to three feasible entries other than the suggestion.
///
/// Ordered by energy saved (highest first), then friendliness, then time.
/// A feasible bus that misses the cut is moved to the front, displacing the
/// last entry.
pub fn alternatives(result: &RecommendationResult) -> Vec<ModeResult> {
    let mut ranked: Vec<&ModeResult> = result
        .results
        .iter()
        .filter(|r| r.mode != result.suggested_mode && r.is_feasible())
        .collect();

    ranked.sort_by(|a, b| {
        b.energy_saved_kwh
            .total_cmp(&a.energy_saved_kwh)
            .then_with(|| a.mode.friendliness_rank().cmp(&b.mode.friendliness_rank()))
            .then_with(|| a.time_mins.cmp(&b.time_mins))
    });

    let mut top: Vec<&ModeResult> = ranked.iter().copied().take(MAX_ALTERNATIVES).collect();

    let bus = ranked.iter().copied().find(|r| r.mode == Mode::Bus);
    if let Some(bus) = bus {
        if !top.iter().any(|r| r.mode == Mode::Bus) {
            top.truncate(MAX_ALTERNATIVES - 1);
            top.insert(0, bus);
        }
    }

    top.into_iter().cloned().collect()
}
