//! CSV traffic loader.
//!
//! # CSV format
//!
//! One row per call.  Rows need not be sorted by tick.
//!
//! ```csv
//! tick,kind,floor,car
//! 0,hall_up,0,
//! 3,cab,5,0
//! 4,hall_down,7,
//! 9,maintenance,,1
//! ```
//!
//! | `kind`        | `floor`  | `car`    |
//! |---------------|----------|----------|
//! | `hall_up`     | required | ignored  |
//! | `hall_down`   | required | ignored  |
//! | `cab`         | required | required |
//! | `maintenance` | ignored  | required |
//!
//! Floors are not checked against any building here; a call for a floor the
//! building does not have is simply refused later by the cars.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{ElevatorId, Tick};

use crate::{CallKind, ScheduleError, ScheduleResult, TrafficCall};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick:  u64,
    kind:  String,
    floor: Option<u32>,
    car:   Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load traffic calls from a CSV file, in file order.
pub fn load_calls_csv(path: &Path) -> ScheduleResult<Vec<TrafficCall>> {
    let file = std::fs::File::open(path)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(reader: R) -> ScheduleResult<Vec<TrafficCall>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut calls = Vec::new();
    for (i, result) in csv_reader.deserialize::<CallRecord>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| ScheduleError::Parse { row, message: e.to_string() })?;
        calls.push(TrafficCall::new(Tick(record.tick), parse_kind(&record, row)?));
    }
    Ok(calls)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(record: &CallRecord, row: usize) -> ScheduleResult<CallKind> {
    let missing = |column: &str| ScheduleError::Parse {
        row,
        message: format!("{:?} call needs a {column} value", record.kind),
    };

    match record.kind.as_str() {
        "hall_up" => Ok(CallKind::HallUp {
            floor: record.floor.ok_or_else(|| missing("floor"))?,
        }),
        "hall_down" => Ok(CallKind::HallDown {
            floor: record.floor.ok_or_else(|| missing("floor"))?,
        }),
        "cab" => Ok(CallKind::Cab {
            car:   ElevatorId(record.car.ok_or_else(|| missing("car"))?),
            floor: record.floor.ok_or_else(|| missing("floor"))?,
        }),
        "maintenance" => Ok(CallKind::Maintenance {
            car: ElevatorId(record.car.ok_or_else(|| missing("car"))?),
        }),
        other => Err(ScheduleError::Parse {
            row,
            message: format!(
                "unknown call kind {other:?}: expected hall_up, hall_down, cab, or maintenance"
            ),
        }),
    }
}
