//! `fg-sim` — the world loop of the forage colony simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Ants      — for each ant in ascending AntId order:
//!                   build a Surroundings snapshot,
//!                   call BehaviorModel::step,
//!                   apply its intents immediately:
//!                     PickUp(key)    → FoodStore::take_one
//!                     Deliver(nest)  → Nest::store_food(1)
//!                     Deposit{..}    → PheromoneField::deposit
//!   ② Decay     — PheromoneField::tick
//!   ③ Replenish — every replenish_interval_ticks, top up every spot that
//!                 is below half capacity
//!   ④ Clock     — advance to the next tick
//! ```
//!
//! Applying intents per ant, not per tick, makes food contention
//! first-come-first-served: a unit removed by a lower `AntId` is invisible
//! to every later ant in the same tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fg_agent::ColonyBuilder;
//! use fg_arena::Nest;
//! use fg_behavior::ForagingBehavior;
//! use fg_core::{NestId, SimConfig};
//! use fg_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let home = config.arena().center();
//! let (colony, rngs) = ColonyBuilder::new(config.ant.clone(), config.seed)
//!     .spawn(100, NestId(0), home)
//!     .build()?;
//! let behavior = ForagingBehavior::from_config(&config);
//! let mut sim = SimBuilder::new(config, colony, rngs, behavior)
//!     .nest(Nest::new(home, 20.0))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::TickSummary;
