//! Top-level simulation configuration.
//!
//! Every setting is a plain number; none of them switches behavior on or
//! off.  The driver typically deserializes a [`SimConfig`] from JSON (with
//! the `serde` feature) and hands it to `fg_sim::SimBuilder`.  Missing
//! sections and fields fall back to their `Default` values.

use crate::geo::Arena;
use crate::{FgError, FgResult, Tick};

// ── Sections ──────────────────────────────────────────────────────────────────

/// Arena dimensions in world units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

/// Per-ant kinematics, sensing, and memory tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AntConfig {
    /// Speed every ant moves at (world units per tick).
    pub max_speed: f32,
    /// Edge length of the square ant body used for food contact and the
    /// obstacle overlap buffer.
    pub body_size: f32,
    /// Radius of the pheromone query.
    pub pheromone_sense_radius: f32,
    /// Ticks between two pheromone deposits of the same ant.
    pub pheromone_drop_interval: u32,
    /// Positions kept in the anti-circling ring buffer.
    pub memory_length: usize,
    /// Mean distance from the centroid of the memory below which an ant is
    /// considered stuck.
    pub stuck_threshold: f32,
    /// Inclusive tick range a persistent heading is held for.
    pub persistence_min: u32,
    pub persistence_max: u32,
}

impl Default for AntConfig {
    fn default() -> Self {
        Self {
            max_speed:               2.0,
            body_size:               5.0,
            pheromone_sense_radius:  100.0,
            pheromone_drop_interval: 20,
            memory_length:           50,
            stuck_threshold:         60.0,
            persistence_min:         30,
            persistence_max:         60,
        }
    }
}

impl AntConfig {
    /// Reject tunables that would make spawning or stepping an ant panic or
    /// divide by zero.  Also run as part of [`SimConfig::validate`].
    pub fn validate(&self) -> FgResult<()> {
        positive("ant.max_speed", self.max_speed)?;
        positive("ant.body_size", self.body_size)?;
        positive("ant.pheromone_sense_radius", self.pheromone_sense_radius)?;
        non_negative("ant.stuck_threshold", self.stuck_threshold)?;

        if self.pheromone_drop_interval == 0 {
            return Err(FgError::Config("ant.pheromone_drop_interval must be at least 1".into()));
        }
        if self.memory_length == 0 {
            return Err(FgError::Config("ant.memory_length must be at least 1".into()));
        }
        if self.persistence_min == 0 || self.persistence_min > self.persistence_max {
            return Err(FgError::Config(format!(
                "ant.persistence range {}..={} is empty or starts at 0",
                self.persistence_min, self.persistence_max
            )));
        }
        Ok(())
    }
}

/// Steering-engine tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringConfig {
    pub max_force:         f32,
    /// Far-field obstacle perception radius.
    pub perception_radius: f32,
    pub wander_radius:     f32,
    pub wander_distance:   f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_force:         0.1,
            perception_radius: 50.0,
            wander_radius:     30.0,
            wander_distance:   50.0,
        }
    }
}

/// Pheromone field tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Strength removed from every marker per tick.
    pub decay_rate: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { decay_rate: 0.2 }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NestConfig {
    /// Distance from the nest centre at which a carried load is delivered.
    pub capture_radius: f32,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self { capture_radius: 20.0 }
    }
}

/// Food spot and food unit tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoodConfig {
    pub spot_radius:   f32,
    /// Maximum number of food units a spot holds.
    pub capacity:      usize,
    /// Amount each new unit starts with.
    pub unit_amount:   u32,
    /// Edge length of the square food unit used for contact tests.
    pub unit_size:     f32,
    /// Units placed in each spot at setup.
    pub initial_units: usize,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            spot_radius:   50.0,
            capacity:      50,
            unit_amount:   10,
            unit_size:     6.0,
            initial_units: 30,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Complete configuration for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub arena: ArenaConfig,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Top up every food spot below half capacity every N ticks.  0 disables
    /// replenishment.
    pub replenish_interval_ticks: u64,

    /// Units added to a spot per replenishment.
    pub replenish_amount: usize,

    pub ant:      AntConfig,
    pub steering: SteeringConfig,
    pub field:    FieldConfig,
    pub nest:     NestConfig,
    pub food:     FoodConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena:                    ArenaConfig::default(),
            total_ticks:              3_000,
            seed:                     42,
            output_interval_ticks:    10,
            replenish_interval_ticks: 300,
            replenish_amount:         10,
            ant:                      AntConfig::default(),
            steering:                 SteeringConfig::default(),
            field:                    FieldConfig::default(),
            nest:                     NestConfig::default(),
            food:                     FoodConfig::default(),
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena.width, self.arena.height)
    }

    /// Reject settings that would make the simulation meaningless or divide
    /// by zero.
    pub fn validate(&self) -> FgResult<()> {
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        self.ant.validate()?;
        positive("steering.max_force", self.steering.max_force)?;
        positive("steering.perception_radius", self.steering.perception_radius)?;
        positive("field.decay_rate", self.field.decay_rate)?;
        positive("nest.capture_radius", self.nest.capture_radius)?;
        positive("food.spot_radius", self.food.spot_radius)?;
        positive("food.unit_size", self.food.unit_size)?;
        non_negative("steering.wander_radius", self.steering.wander_radius)?;
        non_negative("steering.wander_distance", self.steering.wander_distance)?;

        if self.food.capacity == 0 {
            return Err(FgError::Config("food.capacity must be at least 1".into()));
        }
        if self.replenish_interval_ticks > 0 && self.replenish_amount == 0 {
            return Err(FgError::Config(
                "replenish_amount must be at least 1 while replenishment is enabled".into(),
            ));
        }
        if self.food.unit_amount == 0 {
            return Err(FgError::Config("food.unit_amount must be at least 1".into()));
        }
        Ok(())
    }
}

fn positive(name: &str, v: f32) -> FgResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(FgError::Config(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f32) -> FgResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(FgError::Config(format!("{name} must be zero or positive, got {v}")))
    }
}
