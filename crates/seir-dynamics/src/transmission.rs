//! Proximity-based transmission.

use seir_agent::Population;
use seir_core::{EpiState, RandomSource, SeirConfig};
use seir_spatial::{ContactSearch, Site};

/// Exposes Susceptible agents near Infectious ones.
///
/// Every (Infectious, Susceptible) pair strictly closer than `radius`, as
/// judged by committed `state` on post-movement positions, gets one
/// independent draw against `rate`.  A hit sets the target's pending state
/// to Exposed and resets its incubation timer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transmission {
    pub radius:            f64,
    pub rate:              f64,
    pub incubation_period: u32,
}

/// What one transmission pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransmissionReport {
    /// In-range (Infectious, Susceptible) pairs, i.e. draws taken.
    pub contacts:  usize,
    /// Distinct agents newly marked Exposed.
    pub exposures: usize,
}

impl Transmission {
    pub fn from_config(config: &SeirConfig) -> Self {
        Self {
            radius:            config.infection_radius,
            rate:              config.infection_rate,
            incubation_period: config.incubation_period,
        }
    }

    pub fn apply<S, R>(&self, population: &mut Population, search: &S, rng: &mut R) -> TransmissionReport
    where
        S: ContactSearch + ?Sized,
        R: RandomSource + ?Sized,
    {
        let sites = |state: EpiState| -> Vec<Site> {
            population
                .ids_in(state)
                .map(|id| Site::new(id, population.get(id).position))
                .collect()
        };
        let sources = sites(EpiState::Infectious);
        if sources.is_empty() {
            return TransmissionReport::default();
        }
        let targets = sites(EpiState::Susceptible);

        let contacts = search.contacts(&sources, &targets, self.radius);

        let mut report = TransmissionReport::default();
        for hits in &contacts {
            for &target in hits {
                report.contacts += 1;
                if rng.bernoulli(self.rate) && population.get_mut(target).expose(self.incubation_period) {
                    report.exposures += 1;
                }
            }
        }
        report
    }
}
