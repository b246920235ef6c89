//! `lift-schedule` — what happens in the building, and when.
//!
//! The cars and the controller never decide on their own that someone wants
//! a ride.  This crate describes the outside world as a list of timed calls
//! that the simulation loop replays into the controller.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`call`]      | `TrafficCall`, `CallKind`                                 |
//! | [`queue`]     | `CallQueue` (`BTreeMap<Tick, Vec<CallKind>>`)             |
//! | [`loader`]    | `load_calls_csv`, `load_calls_reader`                     |
//! | [`random`]    | `RandomTraffic` — seeded passenger generator              |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Call kinds
//!
//! ```text
//! HallUp { floor }         someone on `floor` presses the up button
//! HallDown { floor }       someone on `floor` presses the down button
//! Cab { car, floor }       someone inside `car` presses `floor`
//! Maintenance { car }      `car` is taken out of service
//! ```

pub mod call;
pub mod error;
pub mod loader;
pub mod queue;
pub mod random;


pub use call::{CallKind, TrafficCall};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_calls_csv, load_calls_reader};
pub use queue::CallQueue;
pub use random::RandomTraffic;
