//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `car_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarSnapshotRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record([
            "car_id", "tick", "floor", "doors_open", "pending_stops", "state", "message",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "unix_time_secs", "calls_applied", "calls_skipped", "unhandled_events",
        ])?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record([
                row.car_id.to_string().as_str(),
                row.tick.to_string().as_str(),
                row.floor.to_string().as_str(),
                if row.doors_open { "1" } else { "0" },
                row.pending_stops.as_str(),
                row.state.as_str(),
                row.message.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.calls_applied.to_string(),
            row.calls_skipped.to_string(),
            row.unhandled_events.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
