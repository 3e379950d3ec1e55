//! `OutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use seir_core::{AgentId, Step};
use seir_sim::{SimObserver, Snapshot};

use crate::row::{AgentSnapshotRow, HistoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every history record, and agent snapshots
/// every `snapshot_interval` steps, to any [`OutputWriter`] backend.
///
/// The initial state (step 0) counts as a snapshot step.  An interval of 0
/// disables agent snapshots.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `engine.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W, snapshot_interval: u64) -> Self {
        Self { writer, snapshot_interval, last_error: None }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, snapshot: &Snapshot<'_>) {
        let counts = snapshot
            .history
            .get(snapshot.step)
            .copied()
            .unwrap_or_else(|| snapshot.counts());
        let result = self.writer.write_history(&HistoryRow::new(snapshot.step, &counts));
        self.store_err(result);

        if self.snapshot_interval > 0 && snapshot.step.0.is_multiple_of(self.snapshot_interval) {
            let rows = agent_rows(snapshot.step, snapshot);
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn agent_rows(step: Step, snapshot: &Snapshot<'_>) -> Vec<AgentSnapshotRow> {
    snapshot
        .agents
        .iter()
        .enumerate()
        .map(|(i, agent)| AgentSnapshotRow::from_agent(step, AgentId(i as u32), agent))
        .collect()
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_start(&mut self, snapshot: &Snapshot<'_>) {
        self.record(snapshot);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        self.record(snapshot);
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
