//! `lift-dispatch` — routes hall calls to cars and keeps floor screens current.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event`]       | `ElevatorEvent`, `CallDirection`, `Handling`              |
//! | [`panel`]       | `CallPanel`, `CallCommand`, `CallSink`                    |
//! | [`screen`]      | `Screen` — passive text holder                            |
//! | [`controller`]  | `ElevatorController`                                      |
//!
//! # Data flow
//!
//! ```text
//! CallPanel::click_up ──CallCommand──▶ ElevatorController (CallSink)
//!                                        │ append ElevatorEvent to the log
//!                                        │ try cars in registration order,
//!                                        │ first move_to_floor() == true wins
//!                                        ▼
//! ElevatorController::tick ──▶ Elevator::progress ──Notice──▶ controller
//!                                        │ screen refresh on every change
//!                                        │ redispatch unhandled events
//!                                        ▼ when a car becomes free
//! ```

pub mod controller;
pub mod event;
pub mod panel;
pub mod screen;


pub use controller::ElevatorController;
pub use event::{CallDirection, ElevatorEvent, Handling};
pub use panel::{CallCommand, CallPanel, CallSink};
pub use screen::Screen;
