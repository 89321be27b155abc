//! Per-tick counters reported by the world loop.

use fg_core::Tick;

/// What happened during one tick.
///
/// The event counters (`pickups`, `deliveries`, `deposits`) are filled by
/// [`Sim::advance_tick`][crate::Sim::advance_tick].  The world totals
/// (`pheromones`, `food_units`, `nest_stored`) and `replenished` are filled
/// by [`Sim::step`][crate::Sim::step] after decay and replenishment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:        Tick,
    pub pickups:     usize,
    pub deliveries:  usize,
    pub deposits:    usize,
    /// Food units added by replenishment this tick.
    pub replenished: usize,
    /// Markers alive after decay.
    pub pheromones:  usize,
    pub food_units:  usize,
    /// Food stored across all nests.
    pub nest_stored: u64,
}

impl TickSummary {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }
}
