//! reference: the canonical social-distancing run of the seir_sim engine.
//!
//! 100 agents on the 5 × 5 square, one seeded Infectious agent, everyone
//! eligible to distance once 15 agents are Infectious, 700 steps.  Writes
//! `history.csv` and `agent_snapshots.csv` and logs a summary.
//!
//! ```text
//! RUST_LOG=debug cargo run -p reference --release -- output/reference
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seir_core::{EpiState, SeirConfig, Step};
use seir_output::{CsvWriter, OutputObserver, OutputWriter};
use seir_sim::{EngineBuilder, SimObserver, Snapshot};
use seir_spatial::RTreeSearch;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:        usize = 100;
const SEED:               u64   = 42;
const FRAMES:             u64   = 700;
const DISTANCING_SHARE:   f64   = 1.0;
const DISTANCING_AT:      usize = 15;
const SNAPSHOT_INTERVAL:  u64   = 10;
const PROGRESS_INTERVAL:  u64   = 100;
const DEFAULT_OUTPUT_DIR: &str  = "output/reference";

// ── Observer wrapper that logs progress ───────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner: OutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_start(&mut self, snapshot: &Snapshot<'_>) {
        info!(counts = %snapshot.counts(), "initial state");
        self.inner.on_start(snapshot);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        if snapshot.step.0.is_multiple_of(PROGRESS_INTERVAL) {
            info!(step = snapshot.step.0, counts = %snapshot.counts(), "progress");
        }
        self.inner.on_snapshot(snapshot);
    }

    fn on_distancing_activated(&mut self, step: Step, infectious: usize) {
        info!(step = step.0, infectious, "distancing in effect");
        self.inner.on_distancing_activated(step, infectious);
    }

    fn on_sim_end(&mut self, final_step: Step) {
        self.inner.on_sim_end(final_step);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 1. Config.
    let config = SeirConfig::default()
        .with_population(AGENT_COUNT)
        .with_distancing(DISTANCING_SHARE, DISTANCING_AT)
        .with_frames(FRAMES)
        .with_seed(SEED);
    info!(agents = AGENT_COUNT, frames = FRAMES, seed = SEED, out = %out_dir.display(), "reference run");

    // 2. Engine.
    let mut engine = EngineBuilder::new(config)
        .search(RTreeSearch)
        .build()
        .context("building engine")?;

    // 3. Output.
    let writer = CsvWriter::new(&out_dir).with_context(|| format!("opening {}", out_dir.display()))?;
    let mut obs = ProgressObserver { inner: OutputObserver::new(writer, SNAPSHOT_INTERVAL) };

    // 4. Run.
    let t0 = Instant::now();
    engine.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        tracing::error!("output error: {e}");
    }

    // 5. Summary.
    let history = engine.history();
    let final_counts = history.latest().copied().unwrap_or_default();
    let (peak_step, peak) = history.peak(EpiState::Infectious).unwrap_or((Step::ZERO, 0));
    info!(elapsed_s = elapsed.as_secs_f64(), records = history.len(), "simulation complete");
    info!(peak, peak_step = peak_step.0, "peak infectious");
    match engine.distancing().activated_at() {
        Some(step) => info!(step = step.0, "distancing activated"),
        None => info!("distancing never activated"),
    }
    info!(final_counts = %final_counts, "final state");

    Ok(())
}
