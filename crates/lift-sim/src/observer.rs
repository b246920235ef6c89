//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_dispatch::ElevatorController;

use crate::TickStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} waiting calls", stats.unhandled_events);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any calls are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the controller has stepped every car.
    fn on_tick_end(&mut self, _tick: Tick, _stats: TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Gives read-only access to the controller so writers can record car
    /// state without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _controller: &ElevatorController) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
