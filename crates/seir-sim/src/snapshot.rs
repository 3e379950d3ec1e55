//! Read-only view handed to observers.

use seir_agent::Agent;
use seir_core::{AggregateCounts, Step};

use crate::History;

/// Engine state at a step boundary.
///
/// Borrows the engine immutably; an observer can read but never change the
/// run through it.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    /// Completed steps; `Step::ZERO` for the initial state.
    pub step:              Step,
    /// Every agent, indexed by `AgentId`.
    pub agents:            &'a [Agent],
    /// The cumulative series up to and including `step`.
    pub history:           &'a History,
    /// Whether the distancing latch has fired.
    pub distancing_active: bool,
}

impl Snapshot<'_> {
    /// Committed totals at this step.
    pub fn counts(&self) -> AggregateCounts {
        AggregateCounts::tally(self.agents.iter().map(|a| a.state))
    }
}
