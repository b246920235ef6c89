//! `lift-sim` — tick loop orchestrator for the rust_lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Calls     — drain this tick's traffic from the CallQueue and apply it:
//!                   HallUp/HallDown → press that floor's CallPanel
//!                   Cab             → controller.click_floor
//!                   Maintenance     → controller.set_to_maintenance
//!   ② Step      — controller.tick(): every car advances one transition,
//!                 screens refresh, freed cars pick up waiting calls.
//!   ③ Report    — on_tick_end, plus on_snapshot every output_interval_ticks.
//! ```
//!
//! Calls land before the step, so a hall call at tick `t` is stamped `t` and
//! the car can start moving during the same tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, SimConfig};
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), BuildingConfig::uniform(8, 2, 0))
//!     .calls(calls)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickStats};
