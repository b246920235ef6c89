//! Travel direction and the derived car state.

use std::fmt;

/// Direction of travel of a car with pending stops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
}

/// Conceptual state of a car.
///
/// Computed from the car's fields on demand; `Elevator` stores no state enum.
/// `DoorsOpen` wins over a direction: a car loading passengers mid-sweep
/// reports `DoorsOpen` even though it still has stops above or below.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CarState {
    Maintenance,
    Idle,
    DoorsOpen,
    MovingUp,
    MovingDown,
}

impl CarState {
    pub fn as_str(self) -> &'static str {
        match self {
            CarState::Maintenance => "maintenance",
            CarState::Idle        => "idle",
            CarState::DoorsOpen   => "doors_open",
            CarState::MovingUp    => "moving_up",
            CarState::MovingDown  => "moving_down",
        }
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
