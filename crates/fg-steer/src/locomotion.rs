//! Velocity integration and the collision-aware position update.

use tracing::trace;

use fg_arena::ObstacleSet;
use fg_core::{AgentRng, Arena, Vec2};

/// Heading increment, in degrees, between escape headings.
const ESCAPE_STEP_DEG: usize = 10;

/// How a [`Locomotion::resolve_move`] call ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The intended step was clear.
    Clear,
    /// The intended step was blocked; an escape heading was taken instead.
    Deflected,
    /// Every escape heading was blocked; the ant stayed put.
    Blocked,
}

/// Result of one movement step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Move {
    /// New (wrapped) position.
    pub position: Vec2,
    /// Velocity to carry into the next tick.
    pub velocity: Vec2,
    pub outcome:  MoveOutcome,
}

/// Speed limit plus the arena the ant moves in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Locomotion {
    pub max_speed: f32,
    pub arena:     Arena,
}

impl Locomotion {
    pub fn new(max_speed: f32, arena: Arena) -> Self {
        Self { max_speed, arena }
    }

    /// Apply `steering` to `velocity`.
    ///
    /// The result always has length `<= max_speed`.  A non-zero sum is
    /// rescaled to full speed and jittered by ±0.1 per component; a zero sum
    /// restarts the ant at full speed in a random direction.
    pub fn integrate(&self, velocity: Vec2, steering: Vec2, rng: &mut AgentRng) -> Vec2 {
        let v = velocity + steering;
        match v.try_normalize() {
            Some(dir) => {
                (dir * self.max_speed + rng.jitter(0.1)).clamp_length_max(self.max_speed)
            }
            None => rng.unit_vector() * self.max_speed,
        }
    }

    /// Move `position` by `velocity` unless that lands inside an obstacle.
    ///
    /// A blocked step tries headings 0°, 10°, … 350° at `max_speed` and takes
    /// the first clear one, which also becomes the new velocity.  If all 36
    /// are blocked the position is unchanged.  Candidates are wrapped onto
    /// the torus before the obstacle test, so an ant leaving one edge can
    /// never re-enter inside an obstacle at the opposite edge.
    pub fn resolve_move(&self, position: Vec2, velocity: Vec2, obstacles: &ObstacleSet) -> Move {
        let tentative = self.arena.wrap(position + velocity);
        if !obstacles.blocks(tentative) {
            return Move {
                position: tentative,
                velocity,
                outcome:  MoveOutcome::Clear,
            };
        }

        for deg in (0..360).step_by(ESCAPE_STEP_DEG) {
            let escape = Vec2::from_angle((deg as f32).to_radians()) * self.max_speed;
            let candidate = self.arena.wrap(position + escape);
            if !obstacles.blocks(candidate) {
                trace!(?position, deg, "blocked step deflected");
                return Move {
                    position: candidate,
                    velocity: escape,
                    outcome:  MoveOutcome::Deflected,
                };
            }
        }

        trace!(?position, "all escape headings blocked");
        Move { position, velocity, outcome: MoveOutcome::Blocked }
    }
}
