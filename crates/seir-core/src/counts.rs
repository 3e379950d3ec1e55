//! Per-step compartment totals.

use crate::EpiState;

/// `(S, E, I, R)` totals for one step.
///
/// `total()` equals the population size at every step; the engine asserts
/// this in debug builds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infectious:  usize,
    pub recovered:   usize,
}

impl AggregateCounts {
    pub fn new(susceptible: usize, exposed: usize, infectious: usize, recovered: usize) -> Self {
        Self { susceptible, exposed, infectious, recovered }
    }

    /// Tally an iterator of states.
    pub fn tally<I: IntoIterator<Item = EpiState>>(states: I) -> Self {
        let mut counts = Self::default();
        for s in states {
            counts.increment(s);
        }
        counts
    }

    #[inline]
    pub fn increment(&mut self, state: EpiState) {
        *self.get_mut(state) += 1;
    }

    #[inline]
    pub fn get(&self, state: EpiState) -> usize {
        match state {
            EpiState::Susceptible => self.susceptible,
            EpiState::Exposed     => self.exposed,
            EpiState::Infectious  => self.infectious,
            EpiState::Recovered   => self.recovered,
        }
    }

    fn get_mut(&mut self, state: EpiState) -> &mut usize {
        match state {
            EpiState::Susceptible => &mut self.susceptible,
            EpiState::Exposed     => &mut self.exposed,
            EpiState::Infectious  => &mut self.infectious,
            EpiState::Recovered   => &mut self.recovered,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infectious + self.recovered
    }
}

impl std::fmt::Display for AggregateCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S={} E={} I={} R={}",
            self.susceptible, self.exposed, self.infectious, self.recovered
        )
    }
}
