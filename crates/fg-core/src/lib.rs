//! `fg-core` — foundational types for the forage colony simulation.
//!
//! This crate is a dependency of every other `fg-*` crate.  It has no `fg-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AntId`, `NestId`, `SpotId`                           |
//! | [`geo`]         | `Vec2` (re-exported from glam), `Arena`, `Rect`       |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-ant), `SimRng` (world)                |
//! | [`config`]      | `SimConfig` and its sections                          |
//! | [`error`]       | `FgError`, `FgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AntConfig, ArenaConfig, FieldConfig, FoodConfig, NestConfig, SimConfig, SteeringConfig,
};
pub use error::{FgError, FgResult};
pub use geo::{Arena, Rect, Vec2};
pub use ids::{AntId, NestId, SpotId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
