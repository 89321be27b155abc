//! The `BehaviorModel` trait — the extension point for ant controllers.

use fg_agent::Ant;
use fg_core::AgentRng;

use crate::{Intent, Surroundings};

/// Pluggable per-tick ant controller.
///
/// `step` updates the ant's own state in place (position, velocity, goal,
/// timers) and returns the world mutations it wants as [`Intent`]s.  All
/// randomness must come from `rng`, the ant's own stream, so a run is
/// reproducible from its seed.
///
/// # Example
///
/// ```rust,ignore
/// struct Drift;
///
/// impl BehaviorModel for Drift {
///     fn step(&self, ant: &mut Ant, ctx: &Surroundings<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
///         ant.position = ctx.arena.wrap(ant.position + ant.velocity);
///         vec![]
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Advance `ant` by one tick.
    ///
    /// Must leave `ant.position` inside the arena and outside every
    /// obstacle, and `ant.velocity` no faster than the ant's speed limit.
    fn step(
        &self,
        ant: &mut Ant,
        ctx: &Surroundings<'_>,
        rng: &mut AgentRng,
    ) -> Vec<Intent>;
}
