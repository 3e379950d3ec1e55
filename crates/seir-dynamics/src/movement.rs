//! Random-walk movement inside the square domain.

use seir_agent::{Agent, Population};
use seir_core::{Domain, Point, RandomSource, SeirConfig};

/// Uniform jitter in `[-f, f]` on each axis, clamped to the domain.
///
/// `f` is `distancing_step` for agents whose distancing latch is set and
/// `normal_step` for everyone else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Movement {
    pub domain:          Domain,
    pub normal_step:     f64,
    pub distancing_step: f64,
}

impl Movement {
    pub fn from_config(config: &SeirConfig) -> Self {
        Self {
            domain:          config.domain(),
            normal_step:     config.normal_step,
            distancing_step: config.distancing_step,
        }
    }

    /// Movement factor for `agent` this step.
    #[inline]
    pub fn step_size(&self, agent: &Agent) -> f64 {
        if agent.distancing_active {
            self.distancing_step
        } else {
            self.normal_step
        }
    }

    /// Move one agent.  Draws `dx` then `dy`.
    pub fn move_agent<R: RandomSource + ?Sized>(&self, agent: &mut Agent, rng: &mut R) {
        let f = self.step_size(agent);
        let dx = rng.uniform(-f, f);
        let dy = rng.uniform(-f, f);
        let p = agent.position;
        agent.position = self.domain.clamp(Point::new(p.x + dx, p.y + dy));
    }

    /// Move every agent in index order.
    pub fn apply<R: RandomSource + ?Sized>(&self, population: &mut Population, rng: &mut R) {
        for agent in population.agents_mut() {
            self.move_agent(agent, rng);
        }
    }
}
