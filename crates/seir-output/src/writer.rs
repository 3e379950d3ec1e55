//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these errors; it stores the first one for
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one history record.
    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
