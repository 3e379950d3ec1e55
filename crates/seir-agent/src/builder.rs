//! Fluent, validated construction of a [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use seir_agent::PopulationBuilder;
//! use seir_core::{EpiState, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(100)
//!     .infected(2)
//!     .exposed(3)
//!     .incubation_period(5)
//!     .distancing_percentage(0.5)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.count(EpiState::Infectious), 2);
//! assert_eq!(population.distancing_group().len(), 50);
//! ```

use seir_core::{distancing_count, Domain, EpiState, RandomSource, SeirConfig, SeirError, SeirResult};

use crate::{Agent, Population};

/// Builder for a [`Population`].
///
/// Seeds are allocated by index: agents `0..infected` start Infectious, the
/// next `exposed` start Exposed, the rest Susceptible.  Positions are drawn
/// agent by agent (`x` then `y`), then the distancing group is sampled
/// without replacement.
#[derive(Clone, Debug)]
pub struct PopulationBuilder {
    size:                  usize,
    infected:              usize,
    exposed:               usize,
    incubation_period:     u32,
    distancing_percentage: f64,
    domain:                Domain,
}

impl PopulationBuilder {
    /// A builder for `size` Susceptible agents on the reference 5 × 5 domain.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            infected: 0,
            exposed: 0,
            incubation_period: 0,
            distancing_percentage: 0.0,
            domain: Domain::new(5.0),
        }
    }

    /// Take every population parameter from a run configuration.
    pub fn from_config(config: &SeirConfig) -> Self {
        Self {
            size:                  config.population_size,
            infected:              config.initial_infected,
            exposed:               config.initial_exposed,
            incubation_period:     config.incubation_period,
            distancing_percentage: config.distancing_percentage,
            domain:                config.domain(),
        }
    }

    pub fn infected(mut self, n: usize) -> Self {
        self.infected = n;
        self
    }

    pub fn exposed(mut self, n: usize) -> Self {
        self.exposed = n;
        self
    }

    pub fn incubation_period(mut self, steps: u32) -> Self {
        self.incubation_period = steps;
        self
    }

    pub fn distancing_percentage(mut self, fraction: f64) -> Self {
        self.distancing_percentage = fraction;
        self
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    fn validate(&self) -> SeirResult<()> {
        if self.size == 0 {
            return Err(SeirError::InvalidConfiguration("population size must be at least 1".into()));
        }
        if u32::try_from(self.size).is_err() {
            return Err(SeirError::InvalidConfiguration(format!(
                "population size {} exceeds the agent id range",
                self.size
            )));
        }
        if self.infected.checked_add(self.exposed).is_none_or(|n| n > self.size) {
            return Err(SeirError::InvalidConfiguration(format!(
                "{} infected + {} exposed exceeds population size {}",
                self.infected, self.exposed, self.size
            )));
        }
        if !(0.0..=1.0).contains(&self.distancing_percentage) {
            return Err(SeirError::InvalidConfiguration(format!(
                "distancing percentage must lie in [0, 1], got {}",
                self.distancing_percentage
            )));
        }
        if !self.domain.size.is_finite() || self.domain.size <= 0.0 {
            return Err(SeirError::InvalidConfiguration(format!(
                "domain size must be positive and finite, got {}",
                self.domain.size
            )));
        }
        Ok(())
    }

    /// Validate the parameters and draw the population from `rng`.
    pub fn build<R: RandomSource + ?Sized>(self, rng: &mut R) -> SeirResult<Population> {
        self.validate()?;

        let mut agents: Vec<Agent> = (0..self.size)
            .map(|i| {
                let state = if i < self.infected {
                    EpiState::Infectious
                } else if i < self.infected + self.exposed {
                    EpiState::Exposed
                } else {
                    EpiState::Susceptible
                };
                Agent::new(self.domain.sample(&mut *rng), state, self.incubation_period)
            })
            .collect();

        let eligible = distancing_count(self.distancing_percentage, self.size);
        for i in rng.sample_indices(self.size, eligible) {
            agents[i].distancing_eligible = true;
        }

        tracing::debug!(
            size = self.size,
            infected = self.infected,
            exposed = self.exposed,
            eligible,
            "population built"
        );

        let population = Population::from_agents(agents);
        debug_assert_eq!(population.distancing_group().len(), eligible);
        Ok(population)
    }
}
