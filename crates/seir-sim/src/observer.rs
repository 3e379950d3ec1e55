//! Simulation observer trait for progress reporting and data collection.

use seir_core::Step;

use crate::Snapshot;

/// Callbacks invoked by [`Engine::step`][crate::Engine::step] and
/// [`Engine::run`][crate::Engine::run] at step boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: infectious-count printer
///
/// ```rust
/// use seir_sim::{SimObserver, Snapshot};
///
/// struct Printer { interval: u64 }
///
/// impl SimObserver for Printer {
///     fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
///         if snapshot.step.0 % self.interval == 0 {
///             println!("{}: {}", snapshot.step, snapshot.counts());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once with the initial state (history index 0), before the
    /// first step runs.
    fn on_start(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called at the very start of each step, before movement.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called at the end of each step, after the history record is appended.
    fn on_snapshot(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called on the step where the distancing latch fires.
    ///
    /// `infectious` is the committed count that crossed the threshold.
    fn on_distancing_activated(&mut self, _step: Step, _infectious: usize) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
