//! `fg-behavior` — the per-tick ant controller and its plumbing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`intent`]     | `Intent` enum (`PickUp`, `Deliver`, `Deposit`)                   |
//! | [`context`]    | `Surroundings<'a>` — read-only world snapshot for one ant step   |
//! | [`model`]      | `BehaviorModel` trait                                            |
//! | [`foraging`]   | `ForagingBehavior` — explore, carry, return, mark                |
//! | [`influence`]  | `pheromone_influence` — scent-following direction                |
//! | [`noop`]       | `NoopBehavior` — ants that never act or move                     |
//!
//! # Design notes
//!
//! An ant owns its own kinematic and goal state, so a behavior step takes
//! `&mut Ant` and updates it in place.  Everything the ant does to the
//! *world* (taking food, delivering it, marking the ground) is returned as
//! [`Intent`]s.  fg-sim applies one ant's intents before stepping the next
//! ant, so a food unit taken by a lower `AntId` is already gone when a
//! higher one looks for it.

pub mod context;
pub mod foraging;
pub mod influence;
pub mod intent;
pub mod model;
pub mod noop;


pub use context::Surroundings;
pub use foraging::ForagingBehavior;
pub use influence::pheromone_influence;
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
