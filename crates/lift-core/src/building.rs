//! Static description of a building: how many floors, which cars, and where
//! each car starts.

use crate::{Floor, LiftError, LiftResult};

/// Starting state of one car.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarConfig {
    pub initial_floor: Floor,
}

/// The shape of the building the simulation runs in.
///
/// Cars are listed in dispatch priority order: the first car that accepts a
/// hall call gets it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    pub floor_count: u32,
    pub cars:        Vec<CarConfig>,
}

impl BuildingConfig {
    /// `cars` identical cars, all parked at `initial_floor`.
    pub fn uniform(floor_count: u32, cars: usize, initial_floor: Floor) -> Self {
        Self {
            floor_count,
            cars: vec![CarConfig { initial_floor }; cars],
        }
    }

    /// Check that every car can be constructed in this building.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count == 0 {
            return Err(LiftError::NoFloors);
        }
        if self.cars.is_empty() {
            return Err(LiftError::Config("a building needs at least one car".into()));
        }
        for car in &self.cars {
            if car.initial_floor >= self.floor_count {
                return Err(LiftError::FloorOutOfRange {
                    floor:       car.initial_floor,
                    floor_count: self.floor_count,
                });
            }
        }
        Ok(())
    }
}
