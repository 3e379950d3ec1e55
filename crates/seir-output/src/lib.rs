//! `seir-output`: simulation output writers for the seir_sim engine.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                           |
//! |-----------|---------|-----------------------------------------|
//! | *(none)*  | CSV     | `history.csv`, `agent_snapshots.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                             |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `seir_sim::SimObserver`.  The engine knows nothing about
//! this crate.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use seir_core::SeirConfig;
//! use seir_output::{CsvWriter, OutputObserver};
//! use seir_sim::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new(SeirConfig::default()).build().unwrap();
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = OutputObserver::new(writer, 10);
//! engine.run(&mut obs).unwrap();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{AgentSnapshotRow, HistoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
