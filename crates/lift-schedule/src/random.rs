//! Seeded random passenger traffic.

use lift_core::{ElevatorId, Floor, SimRng, Tick};

use crate::{CallKind, TrafficCall};

/// Generates hall and cab calls with fixed per-tick probabilities.
///
/// Every tick draws at most one hall call (uniform floor, uniform direction
/// where both exist) and at most one cab call (uniform car, uniform floor).
/// The same seed always yields the same calls.
#[derive(Clone, Debug)]
pub struct RandomTraffic {
    pub floor_count: u32,
    pub car_count:   u32,
    /// Probability of a hall call in any given tick.
    pub hall_rate:   f64,
    /// Probability of a cab call in any given tick.
    pub cab_rate:    f64,
}

impl RandomTraffic {
    pub fn new(floor_count: u32, car_count: u32) -> Self {
        Self { floor_count, car_count, hall_rate: 0.2, cab_rate: 0.1 }
    }

    pub fn with_rates(mut self, hall_rate: f64, cab_rate: f64) -> Self {
        self.hall_rate = hall_rate;
        self.cab_rate = cab_rate;
        self
    }

    /// Calls for ticks `0..ticks`, ordered by tick.
    pub fn generate(&self, seed: u64, ticks: u64) -> Vec<TrafficCall> {
        let mut calls = Vec::new();
        if self.floor_count == 0 {
            return calls;
        }

        let mut root = SimRng::new(seed);
        let mut hall_rng = root.child(0);
        let mut cab_rng = root.child(1);

        for t in 0..ticks {
            let tick = Tick(t);
            if hall_rng.gen_bool(self.hall_rate) {
                let floor: Floor = hall_rng.gen_range(0..self.floor_count);
                calls.push(TrafficCall::new(tick, self.hall_call(&mut hall_rng, floor)));
            }
            if self.car_count > 0 && cab_rng.gen_bool(self.cab_rate) {
                let car = ElevatorId(cab_rng.gen_range(0..self.car_count));
                let floor: Floor = cab_rng.gen_range(0..self.floor_count);
                calls.push(TrafficCall::new(tick, CallKind::Cab { car, floor }));
            }
        }
        calls
    }

    /// Top floor only calls down, bottom floor only calls up.
    fn hall_call(&self, rng: &mut SimRng, floor: Floor) -> CallKind {
        let top = self.floor_count - 1;
        let up = if floor == 0 {
            true
        } else if floor == top {
            false
        } else {
            rng.gen_bool(0.5)
        };
        if up {
            CallKind::HallUp { floor }
        } else {
            CallKind::HallDown { floor }
        }
    }
}
