//! `seir-dynamics`: the passes that make up one simulation step.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`movement`]     | `Movement`: jitter + clamp, step size per distancing flag  |
//! | [`transmission`] | `Transmission`: proximity + Bernoulli exposure            |
//! | [`transition`]   | `Transition`: timed E→I, stochastic I→R                   |
//! | [`distancing`]   | `DistancingPolicy`: one-way threshold latch               |
//!
//! # Step protocol
//!
//! The engine runs the passes in this order:
//!
//! 1. **Movement** mutates positions only.
//! 2. **Transmission** reads committed `state`, writes `pending_state`.
//! 3. **Transition** reads committed `state` and timers, writes
//!    `pending_state` and timers.
//! 4. **Commit** (`Population::commit`) is the single point where `state`
//!    changes.
//! 5. **Distancing** reads the committed Infectious count and may latch
//!    eligible agents into distancing.
//!
//! Passes 2 and 3 never read what they write, so agent visiting order cannot
//! change the outcome of a step.

pub mod distancing;
pub mod movement;
pub mod transition;
pub mod transmission;


pub use distancing::DistancingPolicy;
pub use movement::Movement;
pub use transition::{Transition, TransitionReport};
pub use transmission::{Transmission, TransmissionReport};
