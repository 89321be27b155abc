//! Fluent builder for constructing a [`Sim`].

use fg_agent::{AntRngs, Colony};
use fg_arena::{FoodStore, Nest, Obstacle, ObstacleSet};
use fg_behavior::BehaviorModel;
use fg_core::{SimConfig, SimRng, Tick};
use fg_field::PheromoneField;

use crate::{Sim, SimError, SimResult};

/// Seed offset for the world RNG, so it never shares a stream with ant 0.
const WORLD_STREAM: u64 = 0x5EED_F00D;

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — arena, tick counts, tunables, seed
/// - [`Colony`] + [`AntRngs`] — from [`fg_agent::ColonyBuilder`]
/// - `B: BehaviorModel` — the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                    |
/// |------------------------|--------------------------------------------|
/// | `.nest(n)` / `.nests(v)` | No nests (only valid with zero ants)     |
/// | `.obstacle(o)` / `.obstacles(s)` | Empty `ObstacleSet`              |
/// | `.food(f)`             | Empty `FoodStore::from_config(&config.food)` |
///
/// # Example
///
/// ```rust,ignore
/// let (colony, rngs) = ColonyBuilder::new(config.ant.clone(), config.seed)
///     .spawn(50, NestId(0), home)
///     .build()?;
/// let mut sim = SimBuilder::new(config, colony, rngs, behavior)
///     .nest(Nest::new(home, 20.0))
///     .obstacles(walls)
///     .food(food)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:    SimConfig,
    colony:    Colony,
    rngs:      AntRngs,
    behavior:  B,
    nests:     Vec<Nest>,
    obstacles: ObstacleSet,
    food:      Option<FoodStore>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, colony: Colony, rngs: AntRngs, behavior: B) -> Self {
        Self {
            config,
            colony,
            rngs,
            behavior,
            nests:     Vec::new(),
            obstacles: ObstacleSet::new(),
            food:      None,
        }
    }

    /// Add one nest; nests get `NestId`s in the order they are added.
    pub fn nest(mut self, nest: Nest) -> Self {
        self.nests.push(nest);
        self
    }

    /// Replace all nests.
    pub fn nests(mut self, nests: Vec<Nest>) -> Self {
        self.nests = nests;
        self
    }

    pub fn obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Replace the obstacle set.
    pub fn obstacles(mut self, obstacles: ObstacleSet) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Supply a pre-seeded food store.
    pub fn food(mut self, food: FoodStore) -> Self {
        self.food = Some(food);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails on an invalid config, an RNG count that does not match the
    /// colony, an ant whose nest was never added, or an ant that starts
    /// inside an obstacle.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let ant_count = self.colony.len();
        if self.rngs.len() != ant_count {
            return Err(SimError::AntCountMismatch {
                expected: ant_count,
                got:      self.rngs.len(),
                what:     "ant RNGs",
            });
        }

        let arena = self.config.arena();
        let mut colony = self.colony;
        for ant in colony.iter_mut() {
            ant.position = arena.wrap(ant.position);
        }
        for ant in colony.iter() {
            if ant.nest.index() >= self.nests.len() {
                return Err(SimError::UnknownNest { ant: ant.id, nest: ant.nest });
            }
            if self.obstacles.blocks(ant.position) {
                return Err(SimError::AntInsideObstacle { ant: ant.id });
            }
        }

        let food = self.food.unwrap_or_else(|| FoodStore::from_config(&self.config.food));

        Ok(Sim {
            clock:     Tick::ZERO,
            arena,
            rng:       SimRng::new(self.config.seed ^ WORLD_STREAM),
            field:     PheromoneField::new(self.config.field.decay_rate),
            config:    self.config,
            colony,
            rngs:      self.rngs,
            behavior:  self.behavior,
            food,
            obstacles: self.obstacles,
            nests:     self.nests,
        })
    }
}
