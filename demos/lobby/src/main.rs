//! lobby — runs a small office building through a morning of lift traffic.
//!
//! Traffic comes from, in order of preference: a `--calls` CSV file, seeded
//! random passengers (`--random`), or the built-in script below.  Car
//! snapshots and per-tick summaries are written as CSV to `--out`.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lift_core::{BuildingConfig, SimConfig, Tick};
use lift_dispatch::ElevatorController;
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_schedule::{load_calls_csv, load_calls_reader};
use lift_sim::{SimBuilder, SimObserver, TickStats};

// ── Built-in script ───────────────────────────────────────────────────────────

// Two passengers meet at the lobby, a third joins on the way up, and car 1
// is taken out of service halfway through.
const LOBBY_CALLS_CSV: &str = "\
tick,kind,floor,car\n\
0,hall_up,0,\n\
1,cab,6,0\n\
1,hall_up,3,\n\
6,cab,5,0\n\
10,hall_down,7,\n\
14,maintenance,,1\n\
15,hall_down,2,\n\
22,cab,0,0\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "lobby", about = "Elevator bank simulation with CSV output")]
struct Args {
    /// Number of floors (ignored with --building)
    #[arg(long, default_value_t = 8)]
    floors: u32,

    /// Number of cars, all starting on the ground floor (ignored with --building)
    #[arg(long, default_value_t = 2)]
    cars: usize,

    /// JSON building description: {"floor_count": 8, "cars": [{"initial_floor": 0}]}
    #[arg(long)]
    building: Option<PathBuf>,

    /// Traffic CSV with columns tick,kind,floor,car
    #[arg(long)]
    calls: Option<PathBuf>,

    /// Generate random traffic instead of the built-in script
    #[arg(long, default_value_t = false)]
    random: bool,

    /// Per-tick probability of a hall call (with --random)
    #[arg(long, default_value_t = 0.15)]
    hall_rate: f64,

    /// Per-tick probability of a cab call (with --random)
    #[arg(long, default_value_t = 0.1)]
    cab_rate: f64,

    #[arg(long, default_value_t = 40)]
    ticks: u64,

    #[arg(long, default_value_t = 5)]
    tick_secs: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory for car_snapshots.csv and tick_summaries.csv
    #[arg(long, default_value = "output/lobby")]
    out: PathBuf,
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    calls_skipped: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, calls_skipped: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        self.summary_rows += 1;
        self.calls_skipped += stats.calls_skipped;
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, controller: &ElevatorController) {
        self.snapshot_rows += controller.elevators().len();
        self.inner.on_snapshot(tick, controller);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_building(path: &Path) -> Result<BuildingConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading building file {}", path.display()))?;
    let building = serde_json::from_str(&text)
        .with_context(|| format!("parsing building file {}", path.display()))?;
    Ok(building)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    // 1. Building.
    let building = match &args.building {
        Some(path) => load_building(path)?,
        None => BuildingConfig::uniform(args.floors, args.cars, 0),
    };

    // 2. Sim config.
    let config = SimConfig {
        start_unix_secs:       1_700_000_000,
        tick_duration_secs:    args.tick_secs,
        total_ticks:           args.ticks,
        seed:                  args.seed,
        output_interval_ticks: 1,
    };

    // 3. Traffic and sim.
    let builder = SimBuilder::new(config.clone(), building.clone());
    let builder = match (&args.calls, args.random) {
        (Some(path), _) => builder.calls(
            load_calls_csv(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        (None, true) => builder.random_traffic(args.hall_rate, args.cab_rate),
        (None, false) => builder.calls(load_calls_reader(Cursor::new(LOBBY_CALLS_CSV))?),
    };
    let mut sim = builder.build()?;
    info!(
        floors = building.floor_count,
        cars = building.cars.len(),
        calls = sim.calls.len(),
        ticks = config.total_ticks,
        "building ready"
    );

    // 4. Output.
    std::fs::create_dir_all(&args.out)?;
    let writer = CsvWriter::new(&args.out)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let controller = &sim.controller;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  car_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!(
        "  hall calls         : {} ({} waiting, {} traffic calls skipped)",
        controller.events().len(),
        controller.unhandled_events().count(),
        obs.calls_skipped
    );
    println!();

    // 7. Final car status, as shown on each car's screens.
    println!("{:<6} {:<8} {:<12} {}", "Car", "Floor", "State", "Screen");
    println!("{}", "-".repeat(72));
    for car in controller.elevators() {
        let screen = controller
            .screens(car.id())
            .first()
            .map(|s| s.text())
            .unwrap_or("");
        println!(
            "{:<6} {:<8} {:<12} {}",
            car.id().0,
            car.current_floor(),
            car.state().as_str(),
            screen,
        );
    }

    Ok(())
}
