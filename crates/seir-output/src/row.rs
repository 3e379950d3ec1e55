//! Plain data row types written by output backends.

use seir_agent::Agent;
use seir_core::{AggregateCounts, AgentId, EpiState, Step};

/// One agent's position and compartment at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub step:       u64,
    pub agent_id:   u32,
    pub x:          f64,
    pub y:          f64,
    pub state:      EpiState,
    /// The agent's distancing latch.
    pub distancing: bool,
}

impl AgentSnapshotRow {
    pub fn from_agent(step: Step, id: AgentId, agent: &Agent) -> Self {
        Self {
            step:       step.0,
            agent_id:   id.0,
            x:          agent.position.x,
            y:          agent.position.y,
            state:      agent.state,
            distancing: agent.distancing_active,
        }
    }
}

/// One history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow {
    pub step:        u64,
    pub susceptible: u64,
    pub exposed:     u64,
    pub infectious:  u64,
    pub recovered:   u64,
}

impl HistoryRow {
    pub fn new(step: Step, counts: &AggregateCounts) -> Self {
        Self {
            step:        step.0,
            susceptible: counts.susceptible as u64,
            exposed:     counts.exposed as u64,
            infectious:  counts.infectious as u64,
            recovered:   counts.recovered as u64,
        }
    }
}
