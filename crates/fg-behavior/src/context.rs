//! Read-only world state passed to every behavior step.

use fg_arena::{FoodStore, Nest, ObstacleSet};
use fg_core::{Arena, NestId, Tick};
use fg_field::PheromoneField;

/// A read-only snapshot of the world around the ant being stepped.
///
/// Built by fg-sim for each ant, after the previous ant's intents were
/// applied.  The borrows last for a single ant step.
pub struct Surroundings<'a> {
    /// Current simulation tick.
    pub tick:      Tick,
    pub arena:     Arena,
    pub obstacles: &'a ObstacleSet,
    pub food:      &'a FoodStore,
    pub field:     &'a PheromoneField,
    /// Indexed by `NestId`.
    pub nests:     &'a [Nest],
}

impl<'a> Surroundings<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        arena:     Arena,
        obstacles: &'a ObstacleSet,
        food:      &'a FoodStore,
        field:     &'a PheromoneField,
        nests:     &'a [Nest],
    ) -> Self {
        Self { tick, arena, obstacles, food, field, nests }
    }

    #[inline]
    pub fn nest(&self, id: NestId) -> Option<&'a Nest> {
        self.nests.get(id.index())
    }
}
