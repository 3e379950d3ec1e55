//! Compartment transitions that do not depend on contacts.

use seir_agent::Population;
use seir_core::{EpiState, RandomSource, SeirConfig};

/// Timed E→I and stochastic I→R.
///
/// For each agent, by committed `state`:
///
/// - **Exposed**: a positive timer is decremented; a zero timer sets the
///   pending state to Infectious.  An agent exposed earlier in the same step
///   is still Susceptible here, so its first decrement happens next step.
///   It therefore reports Exposed for `incubation_period + 1` consecutive
///   history records before turning Infectious.
/// - **Infectious**: one draw against `recovery_rate`; a hit sets the
///   pending state to Recovered.
/// - **Susceptible**, **Recovered**: untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    pub recovery_rate: f64,
}

/// What one transition pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionReport {
    /// Exposed agents whose incubation ended (E→I).
    pub onsets:     usize,
    /// Infectious agents that recovered (I→R).
    pub recoveries: usize,
}

impl Transition {
    pub fn from_config(config: &SeirConfig) -> Self {
        Self { recovery_rate: config.recovery_rate }
    }

    pub fn apply<R: RandomSource + ?Sized>(&self, population: &mut Population, rng: &mut R) -> TransitionReport {
        let mut report = TransitionReport::default();
        for agent in population.agents_mut() {
            match agent.state {
                EpiState::Exposed => {
                    if agent.incubation_timer > 0 {
                        agent.incubation_timer -= 1;
                    } else {
                        agent.pending_state = EpiState::Infectious;
                        report.onsets += 1;
                    }
                }
                EpiState::Infectious => {
                    if rng.bernoulli(self.recovery_rate) {
                        agent.pending_state = EpiState::Recovered;
                        report.recoveries += 1;
                    }
                }
                EpiState::Susceptible | EpiState::Recovered => {}
            }
        }
        report
    }
}
