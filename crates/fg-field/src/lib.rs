//! `fg-field` — the pheromone field ants use for indirect coordination.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`pheromone`]   | `Pheromone` marker, `PheromoneKind`                     |
//! | [`field`]       | `PheromoneField` (deposit, decay, radius query)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod field;
pub mod pheromone;


pub use field::PheromoneField;
pub use pheromone::{Pheromone, PheromoneKind};
