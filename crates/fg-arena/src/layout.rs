//! Placement helpers used while seeding a world.
//!
//! These run once, before the first tick, and only read the obstacle set.
//! Positions are drawn from the world-level `SimRng`.

use fg_core::{Arena, SimRng, Vec2};

use crate::obstacle::ObstacleSet;

/// Minimum clearance between a food spot or nest and any obstacle center.
pub const OBSTACLE_CLEARANCE: f32 = 100.0;

/// Distance kept from the arena edges when sampling spot centers.
pub const EDGE_MARGIN: f32 = 100.0;

/// Default minimum spacing between two food spots.
pub const DEFAULT_SPOT_SPACING: f32 = 200.0;

/// `true` if `p` is at least [`OBSTACLE_CLEARANCE`] from every obstacle
/// center and at least `min_distance` from every spot in `spots`.
pub fn is_valid_food_spot(
    p:            Vec2,
    obstacles:    &ObstacleSet,
    spots:        &[Vec2],
    min_distance: f32,
) -> bool {
    clear_of_obstacles(p, obstacles, OBSTACLE_CLEARANCE)
        && spots.iter().all(|s| s.distance(p) >= min_distance)
}

/// `true` if `p` is at least [`OBSTACLE_CLEARANCE`] from every obstacle
/// center.
pub fn is_valid_nest_position(p: Vec2, obstacles: &ObstacleSet) -> bool {
    clear_of_obstacles(p, obstacles, OBSTACLE_CLEARANCE)
}

fn clear_of_obstacles(p: Vec2, obstacles: &ObstacleSet, clearance: f32) -> bool {
    obstacles.iter().all(|o| o.center().distance(p) >= clearance)
}

/// Rejection-sample up to `count` food-spot centers inside the arena,
/// keeping [`EDGE_MARGIN`] from the edges.
///
/// Gives up after `max_attempts` draws, so the result may be shorter than
/// `count` on a crowded or small arena.
pub fn scatter_food_spots(
    count:        usize,
    arena:        Arena,
    obstacles:    &ObstacleSet,
    min_distance: f32,
    max_attempts: usize,
    rng:          &mut SimRng,
) -> Vec<Vec2> {
    let mut spots = Vec::with_capacity(count);
    let (lo_x, hi_x) = margin_range(arena.width);
    let (lo_y, hi_y) = margin_range(arena.height);

    for _ in 0..max_attempts {
        if spots.len() >= count {
            break;
        }
        let p = Vec2::new(rng.gen_range(lo_x..=hi_x), rng.gen_range(lo_y..=hi_y));
        if is_valid_food_spot(p, obstacles, &spots, min_distance) {
            spots.push(p);
        }
    }
    spots
}

/// Sampling interval along one axis.  Collapses to the midpoint when the
/// arena is narrower than twice the margin.
fn margin_range(len: f32) -> (f32, f32) {
    if len > 2.0 * EDGE_MARGIN {
        (EDGE_MARGIN, len - EDGE_MARGIN)
    } else {
        (len * 0.5, len * 0.5)
    }
}
