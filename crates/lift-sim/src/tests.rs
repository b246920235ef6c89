//! Integration tests for lift-sim.

use lift_core::{BuildingConfig, ElevatorId, LiftError, PanelId, SimConfig, Tick};
use lift_dispatch::ElevatorController;
use lift_schedule::{CallKind, TrafficCall};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, TickStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        start_unix_secs:       0,
        tick_duration_secs:    5,
        total_ticks,
        seed:                  42,
        output_interval_ticks: 1,
    }
}

fn call(tick: u64, kind: CallKind) -> TrafficCall {
    TrafficCall::new(Tick(tick), kind)
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    stats:     Vec<(Tick, TickStats)>,
    snapshots: Vec<(Tick, Vec<String>)>,
    end:       Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        self.stats.push((tick, stats));
    }

    fn on_snapshot(&mut self, tick: Tick, controller: &ElevatorController) {
        let messages = controller.elevators().iter().map(|e| e.message()).collect();
        self.snapshots.push((tick, messages));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.end = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn registers_cars_screens_and_panels() {
        let sim = SimBuilder::new(test_config(10), BuildingConfig::uniform(8, 2, 0))
            .build()
            .unwrap();
        assert_eq!(sim.controller.elevators().len(), 2);
        assert_eq!(sim.panels.len(), 8);
        assert_eq!(sim.controller.screens(ElevatorId(1)).len(), 8);
        assert_eq!(sim.controller.floor_of_panel(PanelId(5)), Some(5));
        assert_eq!(sim.panels[5].id(), PanelId(5));
        assert!(sim.calls.is_empty());
    }

    #[test]
    fn cars_keep_their_starting_floors() {
        let mut building = BuildingConfig::uniform(6, 2, 0);
        building.cars[1].initial_floor = 5;
        let sim = SimBuilder::new(test_config(1), building).build().unwrap();
        assert_eq!(sim.controller.elevator(ElevatorId(1)).unwrap().current_floor(), 5);
    }

    #[test]
    fn building_without_cars_errors() {
        let result = SimBuilder::new(test_config(1), BuildingConfig::uniform(4, 0, 0)).build();
        assert!(matches!(result, Err(SimError::Lift(LiftError::Config(_)))));
    }

    #[test]
    fn building_without_floors_errors() {
        let result = SimBuilder::new(test_config(1), BuildingConfig::uniform(0, 1, 0)).build();
        assert!(matches!(result, Err(SimError::Lift(LiftError::NoFloors))));
    }

    #[test]
    fn car_outside_building_errors() {
        let result = SimBuilder::new(test_config(1), BuildingConfig::uniform(4, 1, 4)).build();
        assert!(matches!(
            result,
            Err(SimError::Lift(LiftError::FloorOutOfRange { floor: 4, floor_count: 4 }))
        ));
    }

    #[test]
    fn bad_traffic_rate_errors() {
        let result = SimBuilder::new(test_config(1), BuildingConfig::uniform(4, 1, 0))
            .random_traffic(1.5, 0.1)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn call_past_end_of_run_errors() {
        let calls = vec![
            call(1, CallKind::HallUp { floor: 2 }),
            call(50, CallKind::HallUp { floor: 3 }),
        ];
        let result = SimBuilder::new(test_config(10), BuildingConfig::uniform(4, 1, 0))
            .calls(calls)
            .build();
        match result {
            Err(SimError::Config(msg)) => assert!(msg.contains("T50"), "{msg}"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("late call accepted"),
        }
    }

    #[test]
    fn call_on_last_tick_is_applied() {
        let calls = vec![call(9, CallKind::HallUp { floor: 3 })];
        let mut sim = SimBuilder::new(test_config(10), BuildingConfig::uniform(4, 1, 0))
            .calls(calls)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(sim.calls.is_empty());
        let (tick, stats) = rec.stats.last().copied().unwrap();
        assert_eq!(tick, Tick(9));
        assert_eq!(stats.calls_applied, 1);
    }

    #[test]
    fn random_traffic_is_queued() {
        let sim = SimBuilder::new(test_config(50), BuildingConfig::uniform(4, 1, 0))
            .random_traffic(1.0, 0.0)
            .build()
            .unwrap();
        assert_eq!(sim.calls.len(), 50);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_loop {
    use super::*;

    #[test]
    fn hooks_fire_once_per_tick() {
        let mut sim = SimBuilder::new(test_config(10), BuildingConfig::uniform(4, 1, 0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..10).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.stats.len(), 10);
        assert_eq!(rec.end, Some(Tick(10)));
        assert_eq!(sim.current_tick(), Tick(10));
        assert_eq!(sim.controller.now(), Tick(10));
    }

    #[test]
    fn snapshots_follow_interval() {
        let mut config = test_config(10);
        config.output_interval_ticks = 3;
        let mut sim = SimBuilder::new(config, BuildingConfig::uniform(4, 1, 0)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let ticks: Vec<Tick> = rec.snapshots.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![Tick(0), Tick(3), Tick(6), Tick(9)]);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut config = test_config(5);
        config.output_interval_ticks = 0;
        let mut sim = SimBuilder::new(config, BuildingConfig::uniform(4, 1, 0)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn run_ticks_ignores_end_and_skips_sim_end() {
        let mut sim = SimBuilder::new(test_config(2), BuildingConfig::uniform(4, 1, 0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec).unwrap();
        assert_eq!(rec.starts.len(), 5);
        assert_eq!(rec.end, None);
        assert_eq!(sim.current_tick(), Tick(5));
    }

    #[test]
    fn run_resumes_from_current_tick() {
        let mut sim = SimBuilder::new(test_config(6), BuildingConfig::uniform(4, 1, 0))
            .build()
            .unwrap();
        sim.run_ticks(4, &mut NoopObserver).unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.starts, vec![Tick(4), Tick(5)]);
    }
}

// ── Traffic replay ────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use super::*;

    #[test]
    fn hall_call_drives_car_to_floor() {
        let calls = vec![call(0, CallKind::HallUp { floor: 0 })];
        let mut sim = SimBuilder::new(test_config(10), BuildingConfig::uniform(8, 1, 4))
            .calls(calls)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec).unwrap();

        let messages: Vec<&str> = rec.snapshots.iter().map(|(_, m)| m[0].as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Going down, on floor 3. Doors are closed.",
                "Going down, on floor 2. Doors are closed.",
                "Going down, on floor 1. Doors are closed.",
                "Standing at floor 0. Doors are closed.",
                "Standing at floor 0. Doors are open.",
            ]
        );
        assert_eq!(rec.stats[0].1.calls_applied, 1);

        let event = &sim.controller.events()[0];
        assert_eq!(event.created_at(), Tick(0));
        assert_eq!(event.elevator(), Some(ElevatorId(0)));

        let screens = sim.controller.screens(ElevatorId(0));
        assert!(screens.iter().all(|s| s.text() == "Standing at floor 0. Doors are open."));
    }

    #[test]
    fn cab_call_after_pickup() {
        let calls = vec![
            call(0, CallKind::HallUp { floor: 0 }),
            call(1, CallKind::Cab { car: ElevatorId(0), floor: 3 }),
        ];
        let mut sim = SimBuilder::new(test_config(10), BuildingConfig::uniform(8, 1, 0))
            .calls(calls)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let car = sim.controller.elevator(ElevatorId(0)).unwrap();
        assert_eq!(car.current_floor(), 3);
        assert!(car.is_free());
    }

    #[test]
    fn unknown_targets_are_skipped() {
        let calls = vec![
            call(1, CallKind::HallDown { floor: 20 }),
            call(1, CallKind::Cab { car: ElevatorId(5), floor: 1 }),
            call(1, CallKind::Maintenance { car: ElevatorId(9) }),
            call(1, CallKind::HallUp { floor: 2 }),
        ];
        let mut sim = SimBuilder::new(test_config(3), BuildingConfig::uniform(4, 1, 0))
            .calls(calls)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let (_, stats) = rec.stats[1];
        assert_eq!(stats.calls_applied, 1);
        assert_eq!(stats.calls_skipped, 3);
        assert_eq!(sim.controller.events().len(), 1);
    }

    #[test]
    fn out_of_range_cab_floor_is_applied_but_refused() {
        let calls = vec![call(0, CallKind::Cab { car: ElevatorId(0), floor: 99 })];
        let mut sim = SimBuilder::new(test_config(2), BuildingConfig::uniform(4, 1, 0))
            .calls(calls)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.stats[0].1.calls_applied, 1);
        assert_eq!(sim.controller.elevator(ElevatorId(0)).unwrap().pending_stop_count(), 0);
    }

    #[test]
    fn maintenance_leaves_later_calls_waiting() {
        let calls = vec![
            call(2, CallKind::Maintenance { car: ElevatorId(0) }),
            call(3, CallKind::HallUp { floor: 1 }),
        ];
        let mut sim = SimBuilder::new(test_config(6), BuildingConfig::uniform(4, 1, 0))
            .calls(calls)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.stats[2].1.unhandled_events, 0);
        assert_eq!(rec.stats[3].1.unhandled_events, 1);
        assert_eq!(rec.stats[5].1.unhandled_events, 1);
        let screens = sim.controller.screens(ElevatorId(0));
        assert!(screens.iter().all(|s| s.text() == "On maintenance."));
    }

    #[test]
    fn second_car_takes_refused_call() {
        let calls = vec![
            call(0, CallKind::Cab { car: ElevatorId(0), floor: 0 }),
            call(0, CallKind::HallUp { floor: 6 }),
        ];
        let building = {
            let mut b = BuildingConfig::uniform(8, 2, 4);
            b.cars[1].initial_floor = 7;
            b
        };
        let mut sim = SimBuilder::new(test_config(4), building).calls(calls).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.controller.events()[0].elevator(), Some(ElevatorId(1)));
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(200), BuildingConfig::uniform(10, 3, 0))
                .random_traffic(0.3, 0.2)
                .build()
                .unwrap();
            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            rec.snapshots
        };
        assert_eq!(run(), run());
    }
}
