//! Fluent builder for constructing a [`Sim`].

use lift_car::Elevator;
use lift_core::{BuildingConfig, PanelId, SimConfig};
use lift_dispatch::{CallPanel, ElevatorController, Screen};
use lift_schedule::{CallQueue, RandomTraffic, TrafficCall};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - [`BuildingConfig`] — floor count and the cars in dispatch order
///
/// # Optional inputs
///
/// | Method                          | Default            |
/// |---------------------------------|--------------------|
/// | `.calls(v)`                     | no scripted calls  |
/// | `.random_traffic(hall, cab)`    | no random calls    |
///
/// Scripted and random calls may be combined; for the same tick scripted
/// calls are applied first.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, BuildingConfig::uniform(8, 1, 0))
///     .calls(load_calls_csv(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    building: BuildingConfig,
    calls:    Vec<TrafficCall>,
    rates:    Option<(f64, f64)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, building: BuildingConfig) -> Self {
        Self { config, building, calls: Vec::new(), rates: None }
    }

    /// Scripted traffic, e.g. from [`lift_schedule::load_calls_csv`].
    ///
    /// Every call must fall before `config.end_tick()`.
    pub fn calls(mut self, calls: Vec<TrafficCall>) -> Self {
        self.calls = calls;
        self
    }

    /// Add seeded random traffic over the whole run.
    ///
    /// Rates are per-tick probabilities and must lie in `[0, 1]`.  The
    /// generator is seeded from `config.seed`.
    pub fn random_traffic(mut self, hall_rate: f64, cab_rate: f64) -> Self {
        self.rates = Some((hall_rate, cab_rate));
        self
    }

    /// Validate the building, register cars, screens and panels, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.building.validate()?;
        let floor_count = self.building.floor_count;

        // ── Cars and their screens ────────────────────────────────────────
        let mut controller = ElevatorController::new();
        for car in &self.building.cars {
            let id = controller.add_elevator(Elevator::new(car.initial_floor, floor_count)?)?;
            controller.add_elevator_screens(id, vec![Screen::new(); floor_count as usize]);
        }

        // ── One call panel per floor ──────────────────────────────────────
        let panels = (0..floor_count)
            .map(|floor| {
                let mut panel = CallPanel::new(PanelId(floor));
                controller.add_call_panel(floor, &mut panel);
                panel
            })
            .collect();

        // ── Traffic ───────────────────────────────────────────────────────
        let end = self.config.end_tick();
        if let Some(late) = self.calls.iter().find(|call| call.tick >= end) {
            return Err(SimError::Config(format!(
                "{} at {} falls outside a run ending at {end}",
                late.kind, late.tick
            )));
        }
        let mut calls = CallQueue::from_calls(self.calls);
        if let Some((hall_rate, cab_rate)) = self.rates {
            for rate in [hall_rate, cab_rate] {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(SimError::Config(format!(
                        "traffic rate {rate} is not a probability"
                    )));
                }
            }
            let traffic = RandomTraffic::new(floor_count, self.building.cars.len() as u32)
                .with_rates(hall_rate, cab_rate);
            calls.extend(traffic.generate(self.config.seed, self.config.total_ticks));
        }

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            controller,
            panels,
            calls,
        })
    }
}
