//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `PanelId`, `EventId`                    |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`building`]    | `BuildingConfig`, `CarConfig`                         |
//! | [`rng`]         | `SimRng` (seeded traffic generation)                  |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod building;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{BuildingConfig, CarConfig};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, EventId, PanelId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};

/// A floor number.  Floor 0 is the lowest floor of the building.
pub type Floor = u32;
