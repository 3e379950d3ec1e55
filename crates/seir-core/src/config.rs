//! Run configuration and its construction-time validation.

use crate::{Domain, SeirError, SeirResult};

/// Top-level simulation configuration.
///
/// `Default` reproduces the reference parameter set.  Every engine and
/// population constructor calls [`validate`](Self::validate) first, so an
/// invalid configuration never produces a running simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeirConfig {
    /// Number of agents.
    pub population_size: usize,

    /// Contacts strictly closer than this distance may transmit.
    pub infection_radius: f64,

    /// Agents seeded Infectious (allocated first, by index).
    pub initial_infected: usize,

    /// Agents seeded Exposed (allocated after the Infectious seed).
    pub initial_exposed: usize,

    /// Per-contact, per-step transmission probability.
    pub infection_rate: f64,

    /// Reserved exposure-stage probability.  Validated and carried through
    /// the configuration surface; the E→I transition is purely timed.
    pub exposure_rate: f64,

    /// Per-step I→R probability.
    pub recovery_rate: f64,

    /// Steps an agent counts down while Exposed.
    pub incubation_period: u32,

    /// Enables the distancing policy for the run.
    pub social_distancing: bool,

    /// Fraction of the population eligible to adopt distancing.
    pub distancing_percentage: f64,

    /// Infectious count at which eligible agents start distancing.
    pub distancing_threshold: usize,

    /// Number of steps to simulate.
    pub frames: u64,

    /// Side length `L` of the square domain.
    pub domain_size: f64,

    /// Movement factor for agents that are not distancing.
    pub normal_step: f64,

    /// Movement factor for agents that are distancing.
    pub distancing_step: f64,

    /// Seed for the default random source.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SeirConfig {
    fn default() -> Self {
        Self {
            population_size:       200,
            infection_radius:      0.35,
            initial_infected:      1,
            initial_exposed:       0,
            infection_rate:        0.2,
            exposure_rate:         0.2,
            recovery_rate:         0.04,
            incubation_period:     21,
            social_distancing:     false,
            distancing_percentage: 0.5,
            distancing_threshold:  15,
            frames:                200,
            domain_size:           5.0,
            normal_step:           0.25,
            distancing_step:       0.03,
            seed:                  None,
        }
    }
}

impl SeirConfig {
    /// Check every construction invariant.
    pub fn validate(&self) -> SeirResult<()> {
        if self.population_size == 0 {
            return Err(SeirError::invalid("population_size must be at least 1"));
        }
        if u32::try_from(self.population_size).is_err() {
            return Err(SeirError::invalid(format!(
                "population_size {} exceeds the agent id range",
                self.population_size
            )));
        }
        let seeded = self
            .initial_infected
            .checked_add(self.initial_exposed)
            .filter(|&n| n <= self.population_size);
        if seeded.is_none() {
            return Err(SeirError::invalid(format!(
                "initial_infected ({}) + initial_exposed ({}) exceeds population_size ({})",
                self.initial_infected, self.initial_exposed, self.population_size
            )));
        }

        probability("infection_rate", self.infection_rate)?;
        probability("exposure_rate", self.exposure_rate)?;
        probability("recovery_rate", self.recovery_rate)?;
        probability("distancing_percentage", self.distancing_percentage)?;

        if !self.infection_radius.is_finite() || self.infection_radius < 0.0 {
            return Err(SeirError::invalid(format!(
                "infection_radius must be non-negative and finite, got {}",
                self.infection_radius
            )));
        }
        if !self.domain_size.is_finite() || self.domain_size <= 0.0 {
            return Err(SeirError::invalid(format!(
                "domain_size must be positive and finite, got {}",
                self.domain_size
            )));
        }
        movement_factor("normal_step", self.normal_step)?;
        movement_factor("distancing_step", self.distancing_step)?;
        Ok(())
    }

    /// The square agents move in.
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain::new(self.domain_size)
    }

    // ── Fluent helpers ────────────────────────────────────────────────────

    pub fn with_population(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_frames(mut self, frames: u64) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_seeds(mut self, infected: usize, exposed: usize) -> Self {
        self.initial_infected = infected;
        self.initial_exposed = exposed;
        self
    }

    /// Turn the distancing policy on with the given eligible fraction and
    /// Infectious-count threshold.
    pub fn with_distancing(mut self, percentage: f64, threshold: usize) -> Self {
        self.social_distancing = true;
        self.distancing_percentage = percentage;
        self.distancing_threshold = threshold;
        self
    }
}

fn probability(name: &str, p: f64) -> SeirResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SeirError::invalid(format!("{name} must lie in [0, 1], got {p}")))
    }
}

fn movement_factor(name: &str, f: f64) -> SeirResult<()> {
    if f.is_finite() && f >= 0.0 {
        Ok(())
    } else {
        Err(SeirError::invalid(format!("{name} must be non-negative and finite, got {f}")))
    }
}

/// Size of the distancing-eligible subset of `size` agents:
/// `round(fraction × size)`, half away from zero, capped at `size`.
pub fn distancing_count(fraction: f64, size: usize) -> usize {
    let n = (fraction * size as f64).round() as usize;
    n.min(size)
}
