//! Seeded randomness for ants and for the world.
//!
//! Every ant draws from its own stream so that its wander, jitter and
//! heading choices depend only on the run seed and its `AntId`, never on how
//! many draws other ants made earlier in the tick.  The ant stream seed is
//!
//!   run_seed XOR (ant_id * GOLDEN_GAMMA)
//!
//! World-level draws (food placement, replenishment, layout) use a separate
//! [`SimRng`] whose seed the caller offsets away from the ant streams.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::geo::{self, Vec2};
use crate::AntId;

/// Fractional part of the golden ratio as a 64-bit integer.  Consecutive ant
/// ids multiplied by it land far apart in seed space.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn ant_seed(run_seed: u64, ant: AntId) -> u64 {
    run_seed ^ u64::from(ant.0).wrapping_mul(GOLDEN_GAMMA)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One ant's private random stream.
///
/// `ColonyBuilder` creates one per ant; the sim hands it to the behavior
/// together with the ant it belongs to.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, ant: AntId) -> Self {
        AgentRng(SmallRng::seed_from_u64(ant_seed(run_seed, ant)))
    }

    /// Uniform draw from `range` (persistence ticks, bias, angles).
    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// A heading with a uniformly random angle.
    #[inline]
    pub fn unit_vector(&mut self) -> Vec2 {
        geo::random_unit(&mut self.0)
    }

    /// Per-component noise in `[-amount, amount]`.
    #[inline]
    pub fn jitter(&mut self, amount: f32) -> Vec2 {
        geo::jitter(&mut self.0, amount)
    }

    /// Direction of `v`, or a random heading if `v` is zero.
    #[inline]
    pub fn normalize_or_random(&mut self, v: Vec2) -> Vec2 {
        geo::normalize_or_random(v, &mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The world's random stream, used only outside of ant steps.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `range` (spot centers, unit angle and radius).
    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }
}
