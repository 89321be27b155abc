//! Plain data row types written by output backends.

use fg_agent::{Ant, AntState};
use fg_core::Tick;
use fg_sim::TickSummary;

/// One ant's position and goal at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntSnapshotRow {
    pub ant_id:   u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub state:    AntState,
    pub carrying: bool,
}

impl AntSnapshotRow {
    pub fn from_ant(tick: Tick, ant: &Ant) -> Self {
        Self {
            ant_id:   ant.id.0,
            tick:     tick.0,
            x:        ant.position.x,
            y:        ant.position.y,
            state:    ant.state,
            carrying: ant.is_carrying_food(),
        }
    }
}

/// Counters and world totals for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub pickups:     u64,
    pub deliveries:  u64,
    pub deposits:    u64,
    pub pheromones:  u64,
    pub food_units:  u64,
    pub nest_stored: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:        s.tick.0,
            pickups:     s.pickups as u64,
            deliveries:  s.deliveries as u64,
            deposits:    s.deposits as u64,
            pheromones:  s.pheromones as u64,
            food_units:  s.food_units as u64,
            nest_stored: s.nest_stored,
        }
    }
}
