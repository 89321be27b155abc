//! Ant intents: the world changes an ant requests during its step.

use fg_arena::FoodKey;
use fg_core::{NestId, Vec2};
use fg_field::PheromoneKind;

/// A world mutation requested by one ant.
///
/// Produced by [`BehaviorModel::step`][crate::BehaviorModel::step] and
/// applied by fg-sim before the next ant runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Take one portion from the food unit `key`.
    PickUp(FoodKey),

    /// Add one portion to the nest's store.
    Deliver(NestId),

    /// Drop a scent marker.
    Deposit {
        position: Vec2,
        strength: f32,
        kind:     PheromoneKind,
    },
}
