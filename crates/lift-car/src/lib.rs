//! `lift-car` — the elevator car state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`elevator`]  | `Elevator` — floor, pending stops, doors, maintenance flag  |
//! | [`state`]     | `Direction`, `CarState` (derived, never stored)             |
//! | [`listener`]  | `ElevatorListener` trait, `NoopListener`, `Notice`          |
//!
//! # One tick, one transition
//!
//! ```text
//! progress():
//!   ① doors open            → close them (maybe report "free")
//!   ② at a pending stop     → drop the stop, report arrival, open doors
//!   ③ heading up, may climb → floor += 1
//!   ④ heading down, may sink→ floor -= 1
//!   ⑤ otherwise             → nothing
//! ```
//!
//! The car never schedules itself.  Whoever owns it calls `progress` once per
//! tick and passes in the listener that should hear about the transition.

pub mod elevator;
pub mod listener;
pub mod state;


pub use elevator::Elevator;
pub use listener::{ElevatorListener, NoopListener, Notice};
pub use state::{CarState, Direction};
