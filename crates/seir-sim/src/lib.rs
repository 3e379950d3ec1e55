//! `seir-sim`: step loop orchestrator for the seir_sim engine.
//!
//! # Step loop
//!
//! ```text
//! for step in 1..=config.frames:
//!   ① Movement:       jitter + clamp every agent (distancing step if latched).
//!   ② Transmission:   Infectious × Susceptible pairs within the radius draw
//!                     against infection_rate; hits become pending Exposed.
//!   ③ Transition:     Exposed timers count down, then pending Infectious;
//!                     Infectious draw against recovery_rate.
//!   ④ Commit:         state := pending_state for every agent.
//!   ⑤ Distancing:     latch fires once when committed I >= threshold.
//!   ⑥ Record:         append (S, E, I, R) to History; observer snapshot.
//! ```
//!
//! History index 0 holds the initial state, so a finished run has
//! `frames + 1` records.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the geometric contact scan on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust
//! use seir_core::{EpiState, SeirConfig};
//! use seir_sim::{EngineBuilder, NoopObserver};
//!
//! let config = SeirConfig::default()
//!     .with_population(100)
//!     .with_distancing(1.0, 15)
//!     .with_frames(50)
//!     .with_seed(42);
//! let mut engine = EngineBuilder::new(config).build()?;
//! let history = engine.run(&mut NoopObserver)?;
//! println!("peak infectious: {:?}", history.peak(EpiState::Infectious));
//! # Ok::<(), seir_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod history;
pub mod observer;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{Engine, EnginePhase, StepReport};
pub use error::{SimError, SimResult};
pub use history::History;
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::Snapshot;
