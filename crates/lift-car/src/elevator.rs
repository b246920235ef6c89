//! The `Elevator` car and its tick step.

use std::collections::BTreeSet;
use std::fmt;

use lift_core::{ElevatorId, Floor, LiftError, LiftResult};
use tracing::trace;

use crate::{CarState, Direction, ElevatorListener};

/// A single elevator car serving floors `0..floor_count`.
///
/// The car keeps a set of pending stops and sweeps in one direction until the
/// set is empty.  Requests that would make it turn around mid-sweep are
/// refused; see [`move_to_floor`][Self::move_to_floor].
///
/// # Invariants
///
/// - `current_floor < floor_count`
/// - every pending stop is `< floor_count`
/// - once on maintenance, always on maintenance
#[derive(Debug, Clone)]
pub struct Elevator {
    id:             ElevatorId,
    floor_count:    u32,
    current_floor:  Floor,
    pending_stops:  BTreeSet<Floor>,
    on_maintenance: bool,
    doors_open:     bool,
}

impl Elevator {
    /// Create a car parked at `initial_floor` with closed doors.
    ///
    /// The car reports as [`ElevatorId::INVALID`] until a controller binds it
    /// with [`attach`][Self::attach].
    pub fn new(initial_floor: Floor, floor_count: u32) -> LiftResult<Self> {
        if floor_count == 0 {
            return Err(LiftError::NoFloors);
        }
        if initial_floor >= floor_count {
            return Err(LiftError::FloorOutOfRange { floor: initial_floor, floor_count });
        }
        Ok(Self {
            id:             ElevatorId::INVALID,
            floor_count,
            current_floor:  initial_floor,
            pending_stops:  BTreeSet::new(),
            on_maintenance: false,
            doors_open:     false,
        })
    }

    /// Set the id this car reports under.
    pub fn attach(&mut self, id: ElevatorId) {
        self.id = id;
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Request a future stop at `floor`.
    ///
    /// Returns `false` and changes nothing when the car is on maintenance,
    /// `floor` is outside the building, or the car is committed to the
    /// opposite direction.  Requesting an already-pending floor returns
    /// `true` without changing anything.
    pub fn move_to_floor(&mut self, floor: Floor) -> bool {
        if !self.can_move_to_floor(floor) {
            return false;
        }
        self.pending_stops.insert(floor);
        true
    }

    /// A floor button pressed inside the cab.
    ///
    /// Buttons that would turn the car around (e.g. pressing a floor above
    /// while it goes down) are simply ignored.
    pub fn click_floor(&mut self, floor: Floor) {
        self.move_to_floor(floor);
    }

    /// Take the car out of service for good.
    pub fn set_to_maintenance<L: ElevatorListener + ?Sized>(&mut self, listener: &mut L) {
        if self.on_maintenance {
            return;
        }
        self.on_maintenance = true;
        trace!(car = %self.id, floor = self.current_floor, "car on maintenance");
        listener.on_change_state(self.id, false);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    /// Pending stops in ascending floor order.
    pub fn pending_stops(&self) -> impl Iterator<Item = Floor> + '_ {
        self.pending_stops.iter().copied()
    }

    pub fn pending_stop_count(&self) -> usize {
        self.pending_stops.len()
    }

    pub fn is_on_maintenance(&self) -> bool {
        self.on_maintenance
    }

    /// Free means nothing scheduled and doors closed.
    pub fn is_free(&self) -> bool {
        self.pending_stops.is_empty() && !self.doors_open
    }

    /// Some pending stop lies above the current floor.
    pub fn is_going_up(&self) -> bool {
        self.pending_stops
            .last()
            .is_some_and(|&highest| highest > self.current_floor)
    }

    /// Some pending stop lies below the current floor.
    pub fn is_going_down(&self) -> bool {
        self.pending_stops
            .first()
            .is_some_and(|&lowest| lowest < self.current_floor)
    }

    /// Direction of the current sweep, if any.
    ///
    /// Down is checked first, matching the status message.
    pub fn direction(&self) -> Option<Direction> {
        if self.is_going_down() {
            Some(Direction::Down)
        } else if self.is_going_up() {
            Some(Direction::Up)
        } else {
            None
        }
    }

    pub fn state(&self) -> CarState {
        if self.on_maintenance {
            return CarState::Maintenance;
        }
        if self.doors_open {
            return CarState::DoorsOpen;
        }
        match self.direction() {
            Some(Direction::Up)   => CarState::MovingUp,
            Some(Direction::Down) => CarState::MovingDown,
            None                  => CarState::Idle,
        }
    }

    /// Human-readable status, e.g. `"Going up, on floor 3. Doors are closed."`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance exactly one step.
    ///
    /// Each call performs at most one of: close open doors, arrive at a
    /// pending stop and open the doors, move one floor.  Nothing happens when
    /// there is nothing to do.
    pub fn progress<L: ElevatorListener + ?Sized>(&mut self, listener: &mut L) {
        if self.doors_open {
            self.doors_open = false;
            trace!(car = %self.id, floor = self.current_floor, "doors closed");
            listener.on_change_doors(self.id, self.current_floor, false);
            if self.is_free() {
                listener.on_becoming_free(self.id);
            }
            return;
        }

        let going_up = self.is_going_up();
        let going_down = self.is_going_down();

        // Doors are always closed here; the branch above consumed the tick otherwise.
        if self.pending_stops.remove(&self.current_floor) {
            trace!(car = %self.id, floor = self.current_floor, "arrived, doors open");
            listener.on_arriving_floor(self.id, self.current_floor);
            self.doors_open = true;
            listener.on_change_doors(self.id, self.current_floor, true);
            return;
        }

        if going_up && self.can_move_to_floor(self.current_floor + 1) {
            self.current_floor += 1;
            trace!(car = %self.id, floor = self.current_floor, "moved up");
            listener.on_change_floor(self.id, self.current_floor);
        } else if going_down
            && self.current_floor > 0
            && self.can_move_to_floor(self.current_floor - 1)
        {
            self.current_floor -= 1;
            trace!(car = %self.id, floor = self.current_floor, "moved down");
            listener.on_change_floor(self.id, self.current_floor);
        }
    }

    // ── Acceptance rule ───────────────────────────────────────────────────

    /// Would the car take a stop at `floor` right now?
    fn can_move_to_floor(&self, floor: Floor) -> bool {
        if self.on_maintenance || floor >= self.floor_count {
            return false;
        }
        if self.pending_stops.is_empty() || self.pending_stops.contains(&floor) {
            return true;
        }
        (floor > self.current_floor && self.is_going_up())
            || (floor < self.current_floor && self.is_going_down())
            || floor == self.current_floor
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.on_maintenance {
            return f.write_str("On maintenance.");
        }
        let doors = if self.doors_open { "open" } else { "closed" };
        match self.direction() {
            Some(Direction::Down) => {
                write!(f, "Going down, on floor {}. Doors are {doors}.", self.current_floor)
            }
            Some(Direction::Up) => {
                write!(f, "Going up, on floor {}. Doors are {doors}.", self.current_floor)
            }
            None => write!(f, "Standing at floor {}. Doors are {doors}.", self.current_floor),
        }
    }
}
