//! Hall call records.

use std::fmt;

use lift_core::{ElevatorId, Floor, Tick};

/// Which hall button was pressed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CallDirection {
    Up,
    Down,
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallDirection::Up   => "up",
            CallDirection::Down => "down",
        })
    }
}

/// When and by which car an event was claimed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Handling {
    pub at:       Tick,
    pub elevator: ElevatorId,
}

/// Someone on `floor` wants to go `direction`.
///
/// Created unhandled.  [`handle`][Self::handle] is a one-way transition: the
/// handling tick and the bound car are set together and never cleared.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ElevatorEvent {
    direction:  CallDirection,
    floor:      Floor,
    created_at: Tick,
    handled:    Option<Handling>,
}

impl ElevatorEvent {
    pub fn new(direction: CallDirection, floor: Floor, created_at: Tick) -> Self {
        Self { direction, floor, created_at, handled: None }
    }

    pub fn wants_up(floor: Floor, created_at: Tick) -> Self {
        Self::new(CallDirection::Up, floor, created_at)
    }

    pub fn wants_down(floor: Floor, created_at: Tick) -> Self {
        Self::new(CallDirection::Down, floor, created_at)
    }

    pub fn direction(&self) -> CallDirection {
        self.direction
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn created_at(&self) -> Tick {
        self.created_at
    }

    pub fn is_handled(&self) -> bool {
        self.handled.is_some()
    }

    pub fn handling(&self) -> Option<Handling> {
        self.handled
    }

    pub fn handled_at(&self) -> Option<Tick> {
        self.handled.map(|h| h.at)
    }

    /// The car this event was bound to, if any.
    pub fn elevator(&self) -> Option<ElevatorId> {
        self.handled.map(|h| h.elevator)
    }

    /// Bind the event to `elevator` at tick `at`.
    ///
    /// Returns `false` (and keeps the first binding) if already handled.
    pub fn handle(&mut self, elevator: ElevatorId, at: Tick) -> bool {
        if self.handled.is_some() {
            return false;
        }
        self.handled = Some(Handling { at, elevator });
        true
    }
}
