//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use fg_agent::{AntRngs, Colony};
use fg_arena::{FoodStore, Nest, ObstacleSet};
use fg_behavior::{BehaviorModel, Intent, Surroundings};
use fg_core::{AntId, Arena, NestId, SimConfig, SimRng, SpotId, Tick};
use fg_field::PheromoneField;

use crate::{SimObserver, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` owns the whole world and drives the tick loop described in the
/// [crate docs](crate).  Ants see the world only through a read-only
/// [`Surroundings`] and change it only through [`Intent`]s, which the sim
/// applies before stepping the next ant.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Global configuration (arena, tick counts, tunables).
    pub config: SimConfig,

    /// The tick that the next call to [`step`](Self::step) will process.
    pub clock: Tick,

    pub arena: Arena,

    pub colony: Colony,

    /// Per-ant deterministic RNGs, kept apart from `colony` so an ant and its
    /// RNG can be borrowed together.
    pub rngs: AntRngs,

    /// The behavior model.  Called once per ant per tick.
    pub behavior: B,

    pub food: FoodStore,

    pub field: PheromoneField,

    pub obstacles: ObstacleSet,

    /// Indexed by `NestId`.
    pub nests: Vec<Nest>,

    /// World-level RNG used for replenishment.
    pub rng: SimRng,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        info!(
            ants = self.colony.len(),
            from = %self.clock,
            to = %end,
            "simulation started"
        );
        while self.clock < end {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.clock);
        info!(
            tick = %self.clock,
            stored = self.total_stored(),
            food_units = self.food.len(),
            pheromones = self.field.len(),
            "simulation finished"
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// One full tick: every ant, then decay, then replenishment, then the
    /// clock.
    pub fn step(&mut self) -> TickSummary {
        let now = self.clock;
        let mut summary = self.advance_tick();

        self.field.tick();

        let interval = self.config.replenish_interval_ticks;
        if now.next().is_every(interval) {
            summary.replenished = self.replenish_food();
        }

        summary.pheromones = self.field.len();
        summary.food_units = self.food.len();
        summary.nest_stored = self.total_stored();

        self.clock = now.next();
        summary
    }

    /// Step every ant once, in ascending `AntId` order, applying each ant's
    /// intents before the next ant runs.
    ///
    /// Does not decay the field or advance the clock; see [`step`](Self::step).
    pub fn advance_tick(&mut self) -> TickSummary {
        let now = self.clock;
        let mut summary = TickSummary::new(now);

        for i in 0..self.colony.len() {
            let id = AntId(i as u32);
            let intents = {
                let ctx = Surroundings::new(
                    now,
                    self.arena,
                    &self.obstacles,
                    &self.food,
                    &self.field,
                    &self.nests,
                );
                let Some(ant) = self.colony.get_mut(id) else {
                    continue;
                };
                let rng = self.rngs.get_mut(id);
                self.behavior.step(ant, &ctx, rng)
            };
            self.apply_intents(id, intents, &mut summary);
        }

        summary
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    pub fn nest(&self, id: NestId) -> Option<&Nest> {
        self.nests.get(id.index())
    }

    pub fn nests(&self) -> &[Nest] {
        &self.nests
    }

    pub fn food(&self) -> &FoodStore {
        &self.food
    }

    pub fn field(&self) -> &PheromoneField {
        &self.field
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Food stored across all nests.
    pub fn total_stored(&self) -> u64 {
        self.nests.iter().map(Nest::stored).sum()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock;
        observer.on_tick_start(now);
        let summary = self.step();
        observer.on_tick_end(now, &summary);
        if now.is_every(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.colony, &self.nests);
        }
    }

    /// Apply one ant's intents during the sequential write phase.
    fn apply_intents(&mut self, ant: AntId, intents: Vec<Intent>, summary: &mut TickSummary) {
        for intent in intents {
            match intent {
                // ── PickUp: take one portion, removing the unit at zero ────
                Intent::PickUp(key) => match self.food.take_one(key) {
                    Some(taken) => {
                        summary.pickups += 1;
                        debug!(
                            %ant,
                            at = ?taken.position,
                            remaining = taken.remaining,
                            depleted = taken.depleted,
                            "food picked up"
                        );
                    }
                    None => trace!(%ant, "pickup of a unit that is already gone"),
                },

                // ── Deliver: credit the nest ───────────────────────────────
                Intent::Deliver(nest) => match self.nests.get_mut(nest.index()) {
                    Some(n) => {
                        n.store_food(1);
                        summary.deliveries += 1;
                        debug!(%ant, %nest, stored = n.stored(), "food delivered");
                    }
                    None => trace!(%ant, %nest, "delivery to unknown nest"),
                },

                // ── Deposit: lay a marker ──────────────────────────────────
                Intent::Deposit { position, strength, kind } => {
                    self.field.deposit(position, strength, kind);
                    summary.deposits += 1;
                }
            }
        }
    }

    /// Top up every spot that has dropped below half capacity.  Returns the
    /// number of units added.
    fn replenish_food(&mut self) -> usize {
        let amount = self.config.replenish_amount;
        let mut added = 0;
        for i in 0..self.food.spots().len() {
            let spot = SpotId(i as u16);
            match self.food.replenish_if_below_half(spot, amount, &mut self.rng) {
                Ok(0) => {}
                Ok(n) => {
                    debug!(%spot, added = n, tick = %self.clock, "food spot replenished");
                    added += n;
                }
                Err(e) => trace!(%spot, error = %e, "replenish skipped"),
            }
        }
        added
    }
}
