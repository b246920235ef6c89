//! Timed traffic calls.

use std::fmt;

use lift_core::{ElevatorId, Floor, Tick};

/// One thing the outside world does to the building.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    HallUp { floor: Floor },
    HallDown { floor: Floor },
    Cab { car: ElevatorId, floor: Floor },
    Maintenance { car: ElevatorId },
}

impl CallKind {
    /// The floor this call refers to; `None` for maintenance.
    pub fn floor(self) -> Option<Floor> {
        match self {
            CallKind::HallUp { floor }
            | CallKind::HallDown { floor }
            | CallKind::Cab { floor, .. } => Some(floor),
            CallKind::Maintenance { .. } => None,
        }
    }

    /// The car this call names; `None` for hall calls.
    pub fn car(self) -> Option<ElevatorId> {
        match self {
            CallKind::Cab { car, .. } | CallKind::Maintenance { car } => Some(car),
            CallKind::HallUp { .. } | CallKind::HallDown { .. } => None,
        }
    }

    /// The `kind` column value used by the CSV format.
    pub fn as_str(self) -> &'static str {
        match self {
            CallKind::HallUp { .. }      => "hall_up",
            CallKind::HallDown { .. }    => "hall_down",
            CallKind::Cab { .. }         => "cab",
            CallKind::Maintenance { .. } => "maintenance",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CallKind::HallUp { floor }     => write!(f, "hall_up@{floor}"),
            CallKind::HallDown { floor }   => write!(f, "hall_down@{floor}"),
            CallKind::Cab { car, floor }   => write!(f, "cab {car}@{floor}"),
            CallKind::Maintenance { car }  => write!(f, "maintenance {car}"),
        }
    }
}

/// A [`CallKind`] scheduled for a specific tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficCall {
    pub tick: Tick,
    pub kind: CallKind,
}

impl TrafficCall {
    pub fn new(tick: Tick, kind: CallKind) -> Self {
        Self { tick, kind }
    }
}
