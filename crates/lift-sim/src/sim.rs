//! The `Sim` struct and its tick loop.

use lift_core::{SimClock, SimConfig, Tick};
use lift_dispatch::{CallPanel, ElevatorController};
use lift_schedule::{CallKind, CallQueue};
use tracing::{debug, info, warn};

use crate::{SimObserver, SimResult};

/// What happened during one tick.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct TickStats {
    /// Traffic calls delivered to a panel or a car.
    pub calls_applied:    usize,
    /// Traffic calls dropped because they named a missing car or floor.
    pub calls_skipped:    usize,
    /// Hall calls still waiting for a car after the step.
    pub unhandled_events: usize,
}

/// The main simulation runner.
///
/// Owns the controller, one call panel per floor (indexed by floor), and the
/// traffic that will be replayed into them.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Tracks the current tick and maps it to wall time.
    pub clock: SimClock,

    pub controller: ElevatorController,

    /// `panels[f]` is the hallway panel on floor `f`.
    pub panels: Vec<CallPanel>,

    /// Traffic not yet applied.
    pub calls: CallQueue,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            cars = self.controller.elevators().len(),
            floors = self.panels.len(),
            calls = self.calls.len(),
            end = %self.config.end_tick(),
            "simulation started"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        if !self.calls.is_empty() {
            warn!(
                calls = self.calls.len(),
                next = ?self.calls.next_tick(),
                "traffic left unapplied at end of run"
            );
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            tick = %self.clock.current_tick,
            events = self.controller.events().len(),
            unhandled = self.controller.unhandled_events().count(),
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// The tick the next step will process.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let stats = self.process_tick(now);
        observer.on_tick_end(now, stats);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.controller);
        }
        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> TickStats {
        let mut stats = TickStats::default();

        if let Some(calls) = self.calls.drain_tick(now) {
            for call in calls {
                if self.apply_call(call) {
                    stats.calls_applied += 1;
                } else {
                    stats.calls_skipped += 1;
                }
            }
        }

        self.controller.tick();
        stats.unhandled_events = self.controller.unhandled_events().count();
        stats
    }

    /// Deliver one call.  Returns `false` if it named something that does
    /// not exist.
    fn apply_call(&mut self, call: CallKind) -> bool {
        let now = self.clock.current_tick;
        let result = match call {
            CallKind::HallUp { floor } | CallKind::HallDown { floor } => {
                let Some(panel) = self.panels.get(floor as usize) else {
                    warn!(tick = %now, %call, "no call panel on that floor; call skipped");
                    return false;
                };
                if matches!(call, CallKind::HallUp { .. }) {
                    panel.click_up(&mut self.controller);
                } else {
                    panel.click_down(&mut self.controller);
                }
                Ok(())
            }
            CallKind::Cab { car, floor } => self.controller.click_floor(car, floor),
            CallKind::Maintenance { car } => self.controller.set_to_maintenance(car),
        };

        match result {
            Ok(()) => {
                debug!(tick = %now, %call, "call applied");
                true
            }
            Err(e) => {
                warn!(tick = %now, %call, error = %e, "call skipped");
                false
            }
        }
    }
}
