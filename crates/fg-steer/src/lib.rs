//! `fg-steer` — steering forces and the movement step.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                      |
//! |------------------|---------------------------------------------------------------|
//! | [`steering`]     | `Steering` — wander and obstacle-avoidance forces             |
//! | [`locomotion`]   | `Locomotion`, `Move`, `MoveOutcome` — velocity and position   |
//!
//! # Movement model (per-tick Euler step)
//!
//! Each tick the controller in fg-behavior:
//!
//! 1. asks [`Steering`] for the wander and avoidance forces and blends them
//!    with its own goal force,
//! 2. feeds the blend to [`Locomotion::integrate`], which returns a velocity
//!    of exactly `max_speed` (before clamping the jitter back in),
//! 3. calls [`Locomotion::resolve_move`], which never lets the ant end a tick
//!    inside an obstacle and wraps the result onto the torus.
//!
//! Both types are plain tunables with pure methods.  All randomness comes in
//! through the caller's `AgentRng`.

pub mod locomotion;
pub mod steering;


pub use locomotion::{Locomotion, Move, MoveOutcome};
pub use steering::Steering;
