//! A no-op behavior model — ants never act or move.

use fg_agent::Ant;
use fg_core::AgentRng;

use crate::{BehaviorModel, Intent, Surroundings};

/// A [`BehaviorModel`] that leaves every ant untouched.
///
/// Useful in tests that exercise the world clock (decay, replenishment)
/// without ants interfering.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(
        &self,
        _ant: &mut Ant,
        _ctx: &Surroundings<'_>,
        _rng: &mut AgentRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
