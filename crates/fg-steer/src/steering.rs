//! Wander and obstacle-avoidance steering forces.

use fg_arena::ObstacleSet;
use fg_core::{AgentRng, SteeringConfig, Vec2};

/// Pure steering helper.  Every force it returns has magnitude
/// `<= max_force`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Steering {
    pub max_force:         f32,
    /// Obstacles whose center lies within this distance (plus half their
    /// width) push the ant away.
    pub perception_radius: f32,
    pub wander_radius:     f32,
    pub wander_distance:   f32,
}

impl Default for Steering {
    fn default() -> Self {
        Self::from_config(&SteeringConfig::default())
    }
}

impl Steering {
    pub fn from_config(cfg: &SteeringConfig) -> Self {
        Self {
            max_force:         cfg.max_force,
            perception_radius: cfg.perception_radius,
            wander_radius:     cfg.wander_radius,
            wander_distance:   cfg.wander_distance,
        }
    }

    /// Random-walk force.
    ///
    /// A target is placed on a circle of `wander_radius` centred
    /// `wander_distance` ahead of `position` along the current heading.  The
    /// result steers the velocity toward that target at `max_speed`.  A zero
    /// velocity counts as a random heading.
    pub fn wander(
        &self,
        position:  Vec2,
        velocity:  Vec2,
        max_speed: f32,
        rng:       &mut AgentRng,
    ) -> Vec2 {
        let heading = rng.normalize_or_random(velocity);
        let offset = rng.unit_vector() * self.wander_radius;
        let target = position + heading * self.wander_distance + offset;

        let desired = rng.normalize_or_random(target - position) * max_speed;
        (desired - velocity).clamp_length_max(self.max_force)
    }

    /// Push away from nearby obstacles.
    ///
    /// Per obstacle, in order of precedence:
    /// - surface closer than `half_width + 1`: `3 × max_force` straight away
    ///   from the closest surface point, or `2 × max_force` in a random
    ///   direction when the ant sits exactly on it;
    /// - center within `perception_radius + width / 2`: away from the center,
    ///   scaled by how deep inside the perception radius the center is.
    ///
    /// The sum is clamped to `max_force`.  Returns zero when nothing is near.
    pub fn avoid_obstacles(
        &self,
        position:   Vec2,
        half_width: f32,
        obstacles:  &ObstacleSet,
        rng:        &mut AgentRng,
    ) -> Vec2 {
        let mut total = Vec2::ZERO;
        for obstacle in obstacles.iter() {
            let away_from_edge = position - obstacle.closest_point(position);
            let edge_distance = away_from_edge.length();

            if edge_distance < half_width + 1.0 {
                total += match away_from_edge.try_normalize() {
                    Some(dir) => dir * self.max_force * 3.0,
                    None => rng.unit_vector() * self.max_force * 2.0,
                };
                continue;
            }

            let away_from_center = position - obstacle.center();
            let distance = away_from_center.length();
            if distance < self.perception_radius + obstacle.width() * 0.5 {
                let falloff =
                    ((self.perception_radius - distance) / self.perception_radius).max(0.0);
                total += rng.normalize_or_random(away_from_center) * falloff;
            }
        }
        total.clamp_length_max(self.max_force)
    }
}
