//! Simulation observer trait for progress reporting and data collection.

use fg_agent::Colony;
use fg_arena::Nest;
use fg_core::Tick;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.is_every(self.interval) {
///             println!("{tick}: {} delivered so far", summary.nest_stored);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any ant moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after decay and replenishment.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to every ant and nest.
    fn on_snapshot(&mut self, _tick: Tick, _colony: &Colony, _nests: &[Nest]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
