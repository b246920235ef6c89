//! Framework error type.
//!
//! Elevator requests never fail with an error: a refused request is a plain
//! `false` or a silent no-op.  `LiftError` is for invalid construction and
//! configuration, and for addressing a car that was never registered.

use thiserror::Error;

use crate::{ElevatorId, Floor};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("floor {floor} is outside a {floor_count}-floor building")]
    FloorOutOfRange {
        floor:       Floor,
        floor_count: u32,
    },

    #[error("no {0} id left; a controller holds at most u32::MAX - 1")]
    IdsExhausted(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
