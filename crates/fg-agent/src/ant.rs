//! The `Ant` record and its tags.

use std::fmt;

use fg_core::{AgentRng, AntConfig, AntId, NestId, Vec2};

use crate::memory::MovementMemory;

// ── AntState ──────────────────────────────────────────────────────────────────

/// Foraging goal.
///
/// `Exploring → CarryingFood → ReturningToKnownFood → Exploring`, and
/// `ReturningToKnownFood → CarryingFood` on food contact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntState {
    #[default]
    Exploring,
    CarryingFood,
    ReturningToKnownFood,
}

impl AntState {
    pub fn as_str(self) -> &'static str {
        match self {
            AntState::Exploring            => "exploring",
            AntState::CarryingFood         => "carrying_food",
            AntState::ReturningToKnownFood => "returning_to_food",
        }
    }
}

impl fmt::Display for AntState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Caste ─────────────────────────────────────────────────────────────────────

/// Variant of ant sharing the common movement core.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Caste {
    /// Picks up food and lays scent trails.
    #[default]
    Worker,
    /// Patrols only: never picks up food and never marks.
    Soldier,
}

impl Caste {
    #[inline]
    pub fn forages(self) -> bool {
        matches!(self, Caste::Worker)
    }

    #[inline]
    pub fn lays_trail(self) -> bool {
        matches!(self, Caste::Worker)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Caste::Worker  => "worker",
            Caste::Soldier => "soldier",
        }
    }
}

// ── Forces ────────────────────────────────────────────────────────────────────

/// Steering components blended on the ant's most recent tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Forces {
    pub wander:   Vec2,
    /// Avoidance after its ×2 weight.
    pub avoid:    Vec2,
    pub movement: Vec2,
    pub heading:  Vec2,
    /// The weighted sum fed into velocity integration.
    pub total:    Vec2,
    /// Stuck recovery fired this tick.
    pub recovered: bool,
}

// ── Ant ───────────────────────────────────────────────────────────────────────

/// One ant.  Its `AntId` is its index in the [`Colony`](crate::Colony).
#[derive(Clone, Debug)]
pub struct Ant {
    pub id:    AntId,
    pub nest:  NestId,
    pub caste: Caste,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// Always inside the arena.
    pub position: Vec2,
    /// `|velocity| <= max_speed` after every update.
    pub velocity: Vec2,
    /// Persistent unit heading, re-rolled every `persistence` ticks.
    pub heading:  Vec2,

    // ── Behaviour ─────────────────────────────────────────────────────────
    pub state:              AntState,
    pub has_found_food:     bool,
    pub successful_trip:    bool,
    pub last_food_position: Option<Vec2>,
    pub exploration_bias:   f32,

    // ── Timers ────────────────────────────────────────────────────────────
    /// Ticks until the next scent deposit.
    pub drop_timer:        u32,
    /// Ticks the current heading is kept.
    pub persistence:       u32,
    pub persistence_timer: u32,

    pub memory: MovementMemory,
    pub forces: Forces,
}

impl Ant {
    /// A fresh exploring ant at `position` with randomized tunables.
    pub fn spawn(
        id:       AntId,
        nest:     NestId,
        caste:    Caste,
        position: Vec2,
        cfg:      &AntConfig,
        rng:      &mut AgentRng,
    ) -> Self {
        let drop_timer = rng.gen_range(0..cfg.pheromone_drop_interval.max(1));
        Self {
            id,
            nest,
            caste,
            position,
            velocity: rng.unit_vector(),
            heading: rng.unit_vector(),
            state: AntState::Exploring,
            has_found_food: false,
            successful_trip: false,
            last_food_position: None,
            exploration_bias: rng.gen_range(0.8..=1.5),
            drop_timer,
            persistence: rng.gen_range(cfg.persistence_min..=cfg.persistence_max),
            persistence_timer: 0,
            memory: MovementMemory::new(cfg.memory_length),
            forces: Forces::default(),
        }
    }

    #[inline]
    pub fn is_carrying_food(&self) -> bool {
        self.state == AntState::CarryingFood
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
