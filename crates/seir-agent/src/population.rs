//! Population storage: an ordered `Vec<Agent>` plus the distancing group.
//!
//! Every agent is addressed by its index (`AgentId`).  Membership is fixed
//! after construction; only per-agent fields change.

use seir_core::{AggregateCounts, AgentId, EpiState};

use crate::Agent;

/// The full set of agents for one run.
///
/// Construct through [`PopulationBuilder`][crate::PopulationBuilder], which
/// enforces the seeding and distancing-group invariants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    agents: Vec<Agent>,

    /// Ids of the distancing-eligible agents, ascending.
    distancing_group: Vec<AgentId>,
}

impl Population {
    /// Wrap hand-placed agents.  The distancing group is read from each
    /// agent's `distancing_eligible` flag.
    ///
    /// No seeding invariant is checked here; use this for fixtures and
    /// restored runs, and [`PopulationBuilder`][crate::PopulationBuilder]
    /// for fresh ones.
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        let distancing_group = agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.distancing_eligible)
            .map(|(i, _)| AgentId(i as u32))
            .collect();
        Self { agents, distancing_group }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }

    /// All agents, indexed by `AgentId`.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access to every agent.  Length cannot change.
    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// The agents pre-selected to adopt distancing, ascending.
    pub fn distancing_group(&self) -> &[AgentId] {
        &self.distancing_group
    }

    /// Ids of agents whose committed state is `state`, ascending.
    pub fn ids_in(&self, state: EpiState) -> impl Iterator<Item = AgentId> + '_ {
        self.agents
            .iter()
            .enumerate()
            .filter(move |(_, a)| a.state == state)
            .map(|(i, _)| AgentId(i as u32))
    }

    /// Committed-state totals.
    pub fn counts(&self) -> AggregateCounts {
        AggregateCounts::tally(self.agents.iter().map(|a| a.state))
    }

    /// Number of agents whose committed state is `state`.
    pub fn count(&self, state: EpiState) -> usize {
        self.agents.iter().filter(|a| a.state == state).count()
    }

    /// Replace every `state` with its `pending_state`.  The single commit
    /// point of a step.
    pub fn commit(&mut self) {
        for agent in &mut self.agents {
            agent.commit();
        }
    }

    /// `true` when no agent has an uncommitted state change.
    pub fn is_settled(&self) -> bool {
        self.agents.iter().all(|a| a.state == a.pending_state)
    }

    /// Flip every eligible agent into distancing.  Returns how many flipped.
    pub fn activate_distancing(&mut self) -> usize {
        let mut flipped = 0;
        for &id in &self.distancing_group {
            if self.agents[id.index()].activate_distancing() {
                flipped += 1;
            }
        }
        flipped
    }
}
