//! Plain data row types written by output backends.

/// One car's state at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id:        u32,
    pub tick:          u64,
    pub floor:         u32,
    pub doors_open:    bool,
    /// Pending stops in ascending order, `;`-separated.  Empty when free.
    pub pending_stops: String,
    /// `CarState` name: `idle`, `moving_up`, `moving_down`, `doors_open`,
    /// or `maintenance`.
    pub state:         String,
    /// The status line shown on the car's screens.
    pub message:       String,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub unix_time_secs:   i64,
    pub calls_applied:    u64,
    pub calls_skipped:    u64,
    pub unhandled_events: u64,
}
