//! Scent following: which way the nearby food trail pulls an ant.

use fg_core::{AgentRng, Vec2};
use fg_field::{PheromoneField, PheromoneKind};

/// Markers closer than this are ignored.  An ant's own fresh drops would
/// otherwise pin it in place.
pub const MIN_SENSE_DISTANCE: f32 = 10.0;

/// Weight multiplier for ants carrying food.
pub const CARRYING_WEIGHT: f32 = 15.0;

/// Unit direction toward the strength-weighted centroid of the food markers
/// within `sense_radius` of `position`, with ±0.3 noise.
///
/// Each marker's weight is `strength / max(d, 1)` times a random factor in
/// `[1, 1.5]`.  Returns `Vec2::ZERO` when no marker qualifies.
pub fn pheromone_influence(
    position:     Vec2,
    carrying:     bool,
    field:        &PheromoneField,
    sense_radius: f32,
    rng:          &mut AgentRng,
) -> Vec2 {
    let mut weighted = Vec2::ZERO;
    let mut total = 0.0_f32;

    for (marker, distance) in field.query_within(position, sense_radius) {
        if marker.kind != PheromoneKind::Food || distance < MIN_SENSE_DISTANCE {
            continue;
        }
        let mut weight = marker.strength / distance.max(1.0) * rng.gen_range(1.0..=1.5_f32);
        if carrying {
            weight *= CARRYING_WEIGHT;
        }
        weighted += marker.position * weight;
        total += weight;
    }

    if total <= 0.0 {
        return Vec2::ZERO;
    }
    let centroid = weighted / total;
    let direction = rng.normalize_or_random(centroid - position) + rng.jitter(0.3);
    rng.normalize_or_random(direction)
}
