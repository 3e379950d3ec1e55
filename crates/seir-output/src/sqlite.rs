//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `history` and `agent_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

pub const DATABASE_FILE: &str = "output.db";

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join(DATABASE_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS history (
                 step        INTEGER PRIMARY KEY,
                 susceptible INTEGER NOT NULL,
                 exposed     INTEGER NOT NULL,
                 infectious  INTEGER NOT NULL,
                 recovered   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 step       INTEGER NOT NULL,
                 agent_id   INTEGER NOT NULL,
                 x          REAL    NOT NULL,
                 y          REAL    NOT NULL,
                 state      TEXT    NOT NULL,
                 distancing INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (step, agent_id, x, y, state, distancing) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.agent_id,
                    row.x,
                    row.y,
                    row.state.as_str(),
                    row.distancing as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO history (step, susceptible, exposed, infectious, recovered) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.step, row.susceptible, row.exposed, row.infectious, row.recovered],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
