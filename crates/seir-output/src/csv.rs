//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `history.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

pub const HISTORY_FILE: &str = "history.csv";
pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both CSV files in it, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut history = Writer::from_path(dir.join(HISTORY_FILE))?;
        history.write_record(["step", "susceptible", "exposed", "infectious", "recovered"])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["step", "agent_id", "x", "y", "state", "distancing"])?;

        Ok(Self { history, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
                (row.distancing as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.step.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infectious.to_string(),
            row.recovered.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
