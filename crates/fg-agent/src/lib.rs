//! `fg-agent` — ant data and colony storage.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`ant`]        | `Ant`, `AntState`, `Caste`, `Forces`                          |
//! | [`memory`]     | `MovementMemory` (recent-position ring buffer)                |
//! | [`colony`]     | `Colony` (all ants, indexed by `AntId`), `AntRngs`            |
//! | [`builder`]    | `ColonyBuilder` (fluent construction)                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `AntState` and `Caste`.  |
//!
//! This crate holds data only.  The per-tick decision logic that mutates an
//! [`Ant`] lives in fg-behavior.

pub mod ant;
pub mod builder;
pub mod colony;
pub mod memory;


pub use ant::{Ant, AntState, Caste, Forces};
pub use builder::ColonyBuilder;
pub use colony::{AntRngs, Colony};
pub use memory::MovementMemory;
