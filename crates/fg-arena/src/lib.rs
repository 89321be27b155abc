//! `fg-arena` — the static and slowly changing parts of the world.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`obstacle`]   | `Obstacle`, `ObstacleSet` (static rectangles)              |
//! | [`food`]       | `FoodStore`, `FoodSpot`, `FoodUnit`, `FoodKey`, `Taken`    |
//! | [`nest`]       | `Nest`                                                     |
//! | [`layout`]     | Food-spot and nest placement helpers for world setup       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on obstacles and nests.    |

pub mod food;
pub mod layout;
pub mod nest;
pub mod obstacle;

#[cfg(test)]
mod tests;

pub use food::{FoodKey, FoodSpot, FoodStore, FoodUnit, Taken};
pub use nest::Nest;
pub use obstacle::{Obstacle, ObstacleSet};
