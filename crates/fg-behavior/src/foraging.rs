//! `ForagingBehavior`: explore, pick up food, carry it home, return to the
//! source, and mark the way.
//!
//! # Step order
//!
//! Each tick an ant runs, in order:
//!
//! 1. food collection (at most one unit),
//! 2. delivery (never on the tick of a pickup),
//! 3. scent deposit on a fixed cadence,
//! 4. movement memory update,
//! 5. heading persistence,
//! 6. goal force by state,
//! 7. exploration-bias refresh and the stuck override,
//! 8. force blending,
//! 9. velocity integration and the collision-aware move.
//!
//! Steps 1 to 3 only emit intents; the food store, nest and field are
//! changed by fg-sim.

use tracing::{debug, trace};

use fg_agent::{Ant, AntState, Forces};
use fg_core::{AgentRng, AntConfig, Rect, SimConfig, Vec2};
use fg_field::PheromoneKind;
use fg_steer::{Locomotion, Steering};

use crate::{BehaviorModel, Intent, Surroundings, pheromone_influence};

// ── Trail strengths ───────────────────────────────────────────────────────────

/// Marker strength while carrying food.
pub const STRENGTH_CARRYING: f32 = 300.0;
/// Marker strength on the way back to a known source after a delivery.
pub const STRENGTH_RETURNING: f32 = 200.0;
/// Marker strength of an ant that has found food before.
pub const STRENGTH_EXPERIENCED: f32 = 100.0;
/// Marker strength of a naive explorer.
pub const STRENGTH_BASELINE: f32 = 20.0;

/// A returning ant gives up on its remembered source within this distance
/// if no food is left there.
const GIVE_UP_DISTANCE: f32 = 20.0;

/// Exploration bias right after a delivery.
const POST_DELIVERY_BIAS: f32 = 0.3;

/// The default controller.
#[derive(Clone, Debug)]
pub struct ForagingBehavior {
    pub ant:        AntConfig,
    pub steering:   Steering,
    pub locomotion: Locomotion,
}

impl ForagingBehavior {
    pub fn new(ant: AntConfig, steering: Steering, locomotion: Locomotion) -> Self {
        Self { ant, steering, locomotion }
    }

    pub fn from_config(cfg: &SimConfig) -> Self {
        Self {
            ant:        cfg.ant.clone(),
            steering:   Steering::from_config(&cfg.steering),
            locomotion: Locomotion::new(cfg.ant.max_speed, cfg.arena()),
        }
    }

    // ── 1–3: interactions ─────────────────────────────────────────────────

    /// Pick up the first overlapping food unit.  Returns `true` on pickup.
    fn collect_food(&self, ant: &mut Ant, ctx: &Surroundings<'_>, out: &mut Vec<Intent>) -> bool {
        if ant.is_carrying_food() || !ant.caste.forages() {
            return false;
        }
        let body = Rect::centered(ant.position, self.ant.body_size);
        let Some((key, unit)) = ctx.food.first_overlapping(body) else {
            return false;
        };

        transition(ant, AntState::CarryingFood);
        ant.has_found_food = true;
        ant.last_food_position = Some(unit.position);
        out.push(Intent::PickUp(key));
        true
    }

    /// Drop off food inside the home nest's capture radius.
    fn deliver_food(&self, ant: &mut Ant, ctx: &Surroundings<'_>, out: &mut Vec<Intent>) {
        if !ant.is_carrying_food() {
            return;
        }
        let Some(nest) = ctx.nest(ant.nest) else {
            return;
        };
        if !nest.captures(ant.position) {
            return;
        }

        transition(ant, AntState::ReturningToKnownFood);
        ant.successful_trip = true;
        ant.exploration_bias = POST_DELIVERY_BIAS;
        out.push(Intent::Deliver(ant.nest));
    }

    /// Exactly one marker every `pheromone_drop_interval` ticks.
    fn drop_pheromone(&self, ant: &mut Ant, out: &mut Vec<Intent>) {
        if !ant.caste.lays_trail() {
            return;
        }
        if ant.drop_timer > 0 {
            ant.drop_timer -= 1;
            return;
        }
        ant.drop_timer = self.ant.pheromone_drop_interval.saturating_sub(1);
        out.push(Intent::Deposit {
            position: ant.position,
            strength: trail_strength(ant),
            kind:     PheromoneKind::Food,
        });
    }

    // ── 4–8: forces ───────────────────────────────────────────────────────

    fn update_heading(&self, ant: &mut Ant, rng: &mut AgentRng) {
        ant.persistence_timer += 1;
        if ant.persistence_timer >= ant.persistence {
            ant.persistence_timer = 0;
            ant.persistence = rng.gen_range(self.ant.persistence_min..=self.ant.persistence_max);
            ant.heading = rng.unit_vector();
        }
    }

    /// Goal force for the ant's current state.  May abandon
    /// `ReturningToKnownFood` when the remembered source is exhausted.
    fn movement_force(&self, ant: &mut Ant, ctx: &Surroundings<'_>, rng: &mut AgentRng) -> Vec2 {
        match (ant.state, ant.last_food_position) {
            (AntState::CarryingFood, _) => {
                let Some(nest) = ctx.nest(ant.nest) else {
                    return Vec2::ZERO;
                };
                match (nest.position - ant.position).try_normalize() {
                    Some(dir) => dir * 2.0 + rng.jitter(0.1),
                    None => Vec2::ZERO,
                }
            }
            (AntState::ReturningToKnownFood, Some(food)) => {
                let to_food = food - ant.position;
                let Some(dir) = to_food.try_normalize() else {
                    return Vec2::ZERO;
                };
                let force = dir * 1.5 + rng.jitter(0.2);
                if to_food.length() < GIVE_UP_DISTANCE && !ctx.food.any_contains(ant.position) {
                    transition(ant, AntState::Exploring);
                    ant.exploration_bias = rng.gen_range(0.6..=0.9);
                }
                force
            }
            _ => {
                let pull = pheromone_influence(
                    ant.position,
                    ant.is_carrying_food(),
                    ctx.field,
                    self.ant.pheromone_sense_radius,
                    rng,
                );
                pull * if ant.has_found_food { 1.2 } else { 0.4 }
            }
        }
    }

    fn compute_forces(&self, ant: &mut Ant, ctx: &Surroundings<'_>, rng: &mut AgentRng) -> Forces {
        ant.memory.push(ant.position);
        self.update_heading(ant, rng);

        let was_exploring = ant.state == AntState::Exploring;
        let mut wander = self.steering.wander(ant.position, ant.velocity, self.locomotion.max_speed, rng);
        let avoid = self.steering.avoid_obstacles(
            ant.position,
            self.ant.body_size * 0.5,
            ctx.obstacles,
            rng,
        ) * 2.0;
        let mut movement = self.movement_force(ant, ctx, rng);

        if was_exploring {
            ant.exploration_bias = rng.gen_range(1.0..=1.5);
        } else if ant.successful_trip && ant.state != AntState::Exploring {
            ant.exploration_bias = POST_DELIVERY_BIAS;
        }

        let recovered = !ant.is_carrying_food() && ant.memory.is_stuck(self.ant.stuck_threshold);
        if recovered {
            trace!(ant = %ant.id, position = ?ant.position, "stuck, forcing a new heading");
            ant.heading = rng.unit_vector();
            ant.exploration_bias = (ant.exploration_bias * 1.5).min(0.9);
            wander = ant.heading * 2.0;
            movement *= 0.2;
        }

        let heading = ant.heading;
        let total = match ant.state {
            AntState::CarryingFood => avoid + movement * 2.0 + heading * 0.3,
            AntState::ReturningToKnownFood => avoid + movement * 1.5 + heading * 0.5,
            AntState::Exploring => {
                let follow = if ant.has_found_food { 0.8 } else { 0.3 };
                wander * ant.exploration_bias + avoid + movement * follow + heading * 0.4
            }
        };

        Forces { wander, avoid, movement, heading, total, recovered }
    }
}

impl Default for ForagingBehavior {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl BehaviorModel for ForagingBehavior {
    fn step(&self, ant: &mut Ant, ctx: &Surroundings<'_>, rng: &mut AgentRng) -> Vec<Intent> {
        let mut intents = Vec::new();

        if !self.collect_food(ant, ctx, &mut intents) {
            self.deliver_food(ant, ctx, &mut intents);
        }
        self.drop_pheromone(ant, &mut intents);

        let forces = self.compute_forces(ant, ctx, rng);
        let velocity = self.locomotion.integrate(ant.velocity, forces.total, rng);
        let step = self.locomotion.resolve_move(ant.position, velocity, ctx.obstacles);
        ant.position = step.position;
        ant.velocity = step.velocity;
        ant.forces = forces;

        intents
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Strength of the next marker, by how much the ant knows.
pub fn trail_strength(ant: &Ant) -> f32 {
    if ant.is_carrying_food() {
        STRENGTH_CARRYING
    } else if ant.successful_trip && ant.state == AntState::ReturningToKnownFood {
        STRENGTH_RETURNING
    } else if ant.has_found_food {
        STRENGTH_EXPERIENCED
    } else {
        STRENGTH_BASELINE
    }
}

fn transition(ant: &mut Ant, to: AntState) {
    if ant.state != to {
        debug!(ant = %ant.id, from = %ant.state, %to, "state change");
        ant.state = to;
    }
}
