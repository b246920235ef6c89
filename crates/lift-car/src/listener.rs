//! Car listener trait for state-change notifications.

use lift_core::{ElevatorId, Floor};

/// Callbacks invoked by an [`Elevator`][crate::Elevator] when its state
/// changes.
///
/// A car reports to exactly one listener (in practice its controller).  The
/// car does not own the listener: it is handed in for the duration of each
/// call that can change state, which lets the listener own the car.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — floor logger
///
/// ```rust,ignore
/// struct FloorLog(Vec<Floor>);
///
/// impl ElevatorListener for FloorLog {
///     fn on_change_floor(&mut self, _car: ElevatorId, floor: Floor) {
///         self.0.push(floor);
///     }
/// }
/// ```
pub trait ElevatorListener {
    /// The car reached a pending stop and removed it.
    fn on_arriving_floor(&mut self, _car: ElevatorId, _floor: Floor) {}

    /// The car closed its doors with nothing left to do.
    fn on_becoming_free(&mut self, _car: ElevatorId) {}

    /// The doors opened (`true`) or closed (`false`) at `floor`.
    fn on_change_doors(&mut self, _car: ElevatorId, _floor: Floor, _doors_open: bool) {}

    /// The car left (`false`) or entered (`true`) service.
    fn on_change_state(&mut self, _car: ElevatorId, _operational: bool) {}

    /// The car moved one floor.
    fn on_change_floor(&mut self, _car: ElevatorId, _new_floor: Floor) {}
}

/// An [`ElevatorListener`] that does nothing.
pub struct NoopListener;

impl ElevatorListener for NoopListener {}

// ── Recorded notifications ────────────────────────────────────────────────────

/// One recorded listener callback.
///
/// `Vec<Notice>` is itself a listener: it records every callback in order.
/// The controller uses this to let a car finish its tick before the
/// controller reacts (the controller owns the car, so it cannot be borrowed
/// as the listener at the same time).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Notice {
    ArrivingFloor { car: ElevatorId, floor: Floor },
    BecomingFree  { car: ElevatorId },
    ChangeDoors   { car: ElevatorId, floor: Floor, doors_open: bool },
    ChangeState   { car: ElevatorId, operational: bool },
    ChangeFloor   { car: ElevatorId, new_floor: Floor },
}

impl Notice {
    /// The car that produced this notice.
    pub fn car(&self) -> ElevatorId {
        match *self {
            Notice::ArrivingFloor { car, .. }
            | Notice::BecomingFree { car }
            | Notice::ChangeDoors { car, .. }
            | Notice::ChangeState { car, .. }
            | Notice::ChangeFloor { car, .. } => car,
        }
    }

    /// Deliver this notice to `listener` as the matching callback.
    pub fn replay<L: ElevatorListener + ?Sized>(self, listener: &mut L) {
        match self {
            Notice::ArrivingFloor { car, floor } => listener.on_arriving_floor(car, floor),
            Notice::BecomingFree { car } => listener.on_becoming_free(car),
            Notice::ChangeDoors { car, floor, doors_open } => {
                listener.on_change_doors(car, floor, doors_open)
            }
            Notice::ChangeState { car, operational } => listener.on_change_state(car, operational),
            Notice::ChangeFloor { car, new_floor } => listener.on_change_floor(car, new_floor),
        }
    }
}

impl ElevatorListener for Vec<Notice> {
    fn on_arriving_floor(&mut self, car: ElevatorId, floor: Floor) {
        self.push(Notice::ArrivingFloor { car, floor });
    }

    fn on_becoming_free(&mut self, car: ElevatorId) {
        self.push(Notice::BecomingFree { car });
    }

    fn on_change_doors(&mut self, car: ElevatorId, floor: Floor, doors_open: bool) {
        self.push(Notice::ChangeDoors { car, floor, doors_open });
    }

    fn on_change_state(&mut self, car: ElevatorId, operational: bool) {
        self.push(Notice::ChangeState { car, operational });
    }

    fn on_change_floor(&mut self, car: ElevatorId, new_floor: Floor) {
        self.push(Notice::ChangeFloor { car, new_floor });
    }
}
