//! `seir-core`: foundational types for the `seir_sim` epidemic engine.
//!
//! This crate is a dependency of every other `seir-*` crate.  It has no
//! `seir-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Domain`, strict-radius contact predicate    |
//! | [`time`]        | `Step` counter                                        |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`state`]       | `EpiState` compartment enum                           |
//! | [`counts`]      | `AggregateCounts` `(S, E, I, R)` tuple                |
//! | [`config`]      | `SeirConfig` and its validation                       |
//! | [`error`]       | `SeirError`, `SeirResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod counts;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{distancing_count, SeirConfig};
pub use counts::AggregateCounts;
pub use error::{SeirError, SeirResult};
pub use geo::{Domain, Point};
pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use state::EpiState;
pub use time::Step;
