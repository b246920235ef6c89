//! Integration tests for lift-output.

use lift_core::{BuildingConfig, ElevatorId, SimConfig, Tick};
use lift_schedule::{CallKind, TrafficCall};
use lift_sim::SimBuilder;

use crate::row::{CarSnapshotRow, TickSummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn snap_row(car_id: u32, tick: u64) -> CarSnapshotRow {
    CarSnapshotRow {
        car_id,
        tick,
        floor:         2,
        doors_open:    false,
        pending_stops: "3;5".to_owned(),
        state:         "moving_up".to_owned(),
        message:       "Going up, on floor 2. Doors are closed.".to_owned(),
    }
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow {
        tick,
        unix_time_secs:   tick as i64 * 5,
        calls_applied:    2,
        calls_skipped:    1,
        unhandled_events: 4,
    }
}

fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
    SimConfig {
        start_unix_secs: 1_000,
        tick_duration_secs: 5,
        total_ticks,
        seed: 1,
        output_interval_ticks,
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::writer::OutputWriter;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("car_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["car_id", "tick", "floor", "doors_open", "pending_stops", "state", "message"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "unix_time_secs", "calls_applied", "calls_skipped", "unhandled_events"]
        );
    }

    #[test]
    fn csv_snapshot_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[0][3], "0");
        assert_eq!(&rows[0][4], "3;5");
        assert_eq!(&rows[0][5], "moving_up");
        assert_eq!(&rows[0][6], "Going up, on floor 2. Doors are closed.");
    }

    #[test]
    fn csv_tick_summary_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "15", "2", "1", "4"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }

    #[test]
    fn integration_csv() {
        let config = config(6, 2);
        let calls = vec![TrafficCall::new(Tick(0), CallKind::HallUp { floor: 3 })];
        let mut sim = SimBuilder::new(config.clone(), BuildingConfig::uniform(5, 2, 0))
            .calls(calls)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Snapshots at ticks 0, 2, 4 for two cars.
        let mut rdr = csv::Reader::from_path(dir.path().join("car_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);

        // Tick 0: car 0 took the call and climbed to floor 1.
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][4], "3");
        assert_eq!(&rows[0][5], "moving_up");
        // Tick 2: car 0 stands at floor 3 with the stop still pending.
        assert_eq!(&rows[2][2], "3");
        assert_eq!(&rows[2][6], "Standing at floor 3. Doors are closed.");
        // Car 1 never moves.
        assert_eq!(&rows[5][0], "1");
        assert_eq!(&rows[5][5], "idle");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][1], "1000");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[5][1], "1025");
        assert_eq!(&rows[5][2], "0");
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::observer::SimOutputObserver;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Fails every summary write and counts snapshot rows.
    #[derive(Default)]
    struct FlakyWriter {
        snapshot_rows: usize,
        finished:      bool,
    }

    impl OutputWriter for FlakyWriter {
        fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
            self.snapshot_rows += rows.len();
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("disk full at {}", row.tick))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_taken_once() {
        let config = config(3, 1);
        let mut sim = SimBuilder::new(config.clone(), BuildingConfig::uniform(4, 1, 0))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(FlakyWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("summary writes fail");
        assert!(err.to_string().contains("disk full at 0"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.snapshot_rows, 3);
        assert!(writer.finished);
    }

    #[test]
    fn summary_times_follow_sim_clock() {
        #[derive(Default)]
        struct Times(Vec<i64>);

        impl OutputWriter for Times {
            fn write_snapshots(&mut self, _rows: &[CarSnapshotRow]) -> OutputResult<()> {
                Ok(())
            }
            fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
                self.0.push(row.unix_time_secs);
                Ok(())
            }
            fn finish(&mut self) -> OutputResult<()> {
                Ok(())
            }
        }

        let config = SimConfig { tick_duration_secs: 7, ..config(4, 0) };
        let mut sim = SimBuilder::new(config.clone(), BuildingConfig::uniform(4, 1, 0))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(Times::default(), &config);
        sim.run(&mut obs).unwrap();

        let clock = config.make_clock();
        let expected: Vec<i64> = (0..4).map(|t| clock.unix_secs_at(Tick(t))).collect();
        assert_eq!(obs.into_writer().0, expected);
        assert_eq!(expected, vec![1_000, 1_007, 1_014, 1_021]);
    }

    #[test]
    fn snapshot_reflects_maintenance() {
        let config = config(2, 1);
        let calls = vec![TrafficCall::new(Tick(1), CallKind::Maintenance { car: ElevatorId(0) })];
        let mut sim = SimBuilder::new(config.clone(), BuildingConfig::uniform(4, 1, 2))
            .calls(calls)
            .build()
            .unwrap();

        #[derive(Default)]
        struct Capture(Vec<CarSnapshotRow>);

        impl OutputWriter for Capture {
            fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
                self.0.extend_from_slice(rows);
                Ok(())
            }
            fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
                Ok(())
            }
            fn finish(&mut self) -> OutputResult<()> {
                Ok(())
            }
        }

        let mut obs = SimOutputObserver::new(Capture::default(), &config);
        sim.run(&mut obs).unwrap();
        let rows = obs.into_writer().0;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "idle");
        assert_eq!(rows[0].message, "Standing at floor 2. Doors are closed.");
        assert_eq!(rows[1].state, "maintenance");
        assert_eq!(rows[1].message, "On maintenance.");
        assert_eq!(rows[1].pending_stops, "");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let mut open = snap_row(1, 4);
        open.doors_open = true;
        w.write_snapshots(&[snap_row(0, 4), open]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM car_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (doors, stops): (i64, String) = conn
            .query_row(
                "SELECT doors_open, pending_stops FROM car_snapshots WHERE car_id = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(doors, 1);
        assert_eq!(stops, "3;5");
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, unix_time, waiting): (i64, i64, i64) = conn
            .query_row(
                "SELECT tick, unix_time_secs, unhandled_events FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(tick, 7);
        assert_eq!(unix_time, 35);
        assert_eq!(waiting, 4);
    }

    #[test]
    fn sqlite_duplicate_tick_errors() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(1)).unwrap();
        assert!(w.write_tick_summary(&summary_row(1)).is_err());
    }
}
