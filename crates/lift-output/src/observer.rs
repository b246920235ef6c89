//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{SimClock, SimConfig, Tick};
use lift_dispatch::ElevatorController;
use lift_sim::{SimObserver, TickStats};

use crate::row::{CarSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes car snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        let row = TickSummaryRow {
            tick:             tick.0,
            unix_time_secs:   self.clock.unix_secs_at(tick),
            calls_applied:    stats.calls_applied as u64,
            calls_skipped:    stats.calls_skipped as u64,
            unhandled_events: stats.unhandled_events as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, controller: &ElevatorController) {
        let rows: Vec<CarSnapshotRow> = controller
            .elevators()
            .iter()
            .map(|car| CarSnapshotRow {
                car_id:        car.id().0,
                tick:          tick.0,
                floor:         car.current_floor(),
                doors_open:    car.doors_open(),
                pending_stops: car
                    .pending_stops()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(";"),
                state:         car.state().as_str().to_owned(),
                message:       car.message(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
