//! Threshold-triggered social distancing.

use seir_agent::Population;
use seir_core::{SeirConfig, Step};

/// One-way latch: the first time the committed Infectious count reaches
/// `threshold`, every distancing-eligible agent starts distancing for the
/// rest of the run.
///
/// A disabled policy never fires, so movement always uses the normal step.
#[derive(Clone, Debug, PartialEq)]
pub struct DistancingPolicy {
    enabled:      bool,
    threshold:    usize,
    activated_at: Option<Step>,
}

impl DistancingPolicy {
    pub fn new(enabled: bool, threshold: usize) -> Self {
        Self { enabled, threshold, activated_at: None }
    }

    pub fn from_config(config: &SeirConfig) -> Self {
        Self::new(config.social_distancing, config.distancing_threshold)
    }

    /// `true` once the latch has fired.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// The step at which the latch fired.
    #[inline]
    pub fn activated_at(&self) -> Option<Step> {
        self.activated_at
    }

    /// Check the committed Infectious count at the end of step `now`.
    ///
    /// Returns `Some(n)` on the call that fires the latch, where `n` is the
    /// number of agents switched into distancing; `None` otherwise
    /// (disabled, below threshold, or already fired).
    pub fn evaluate(&mut self, now: Step, infectious: usize, population: &mut Population) -> Option<usize> {
        if !self.enabled || self.is_active() || infectious < self.threshold {
            return None;
        }
        self.activated_at = Some(now);
        let flipped = population.activate_distancing();
        tracing::info!(
            step = now.0,
            infectious,
            threshold = self.threshold,
            flipped,
            "social distancing activated"
        );
        Some(flipped)
    }
}
