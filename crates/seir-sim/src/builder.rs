//! Fluent builder for constructing an [`Engine`].

use seir_agent::{Population, PopulationBuilder};
use seir_core::{EpiState, RandomSource, SeirConfig, SimRng, Step};
use seir_dynamics::{DistancingPolicy, Movement, Transition, Transmission};
use seir_spatial::{BruteForceSearch, ContactSearch};

use crate::{Engine, EnginePhase, History, SimError, SimResult};

/// Fluent builder for [`Engine<S, R>`].
///
/// # Required inputs
///
/// - [`SeirConfig`]: validated in [`build`](Self::build).
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.search(s)`      | [`BruteForceSearch`]                             |
/// | `.rng(r)`         | `SimRng` seeded from `config.seed` (or entropy)  |
/// | `.population(p)`  | Drawn from the random source by `PopulationBuilder` |
///
/// # Example
///
/// ```rust
/// use seir_core::SeirConfig;
/// use seir_sim::{EngineBuilder, NoopObserver};
/// use seir_spatial::RTreeSearch;
///
/// let config = SeirConfig::default().with_population(50).with_frames(10).with_seed(7);
/// let mut engine = EngineBuilder::new(config)
///     .search(RTreeSearch)
///     .build()
///     .unwrap();
/// let history = engine.run(&mut NoopObserver).unwrap();
/// assert_eq!(history.len(), 11);
/// ```
pub struct EngineBuilder<S: ContactSearch = BruteForceSearch, R: RandomSource = SimRng> {
    config:     SeirConfig,
    search:     S,
    rng:        R,
    population: Option<Population>,
}

impl EngineBuilder {
    /// Create a builder with the default search and a `SimRng` seeded from
    /// `config.seed`.
    pub fn new(config: SeirConfig) -> Self {
        let rng = SimRng::from_seed_option(config.seed);
        Self { config, search: BruteForceSearch, rng, population: None }
    }
}

impl<S: ContactSearch, R: RandomSource> EngineBuilder<S, R> {
    /// Replace the contact search.
    pub fn search<S2: ContactSearch>(self, search: S2) -> EngineBuilder<S2, R> {
        EngineBuilder {
            config:     self.config,
            search,
            rng:        self.rng,
            population: self.population,
        }
    }

    /// Replace the random source.  Every draw of the run, including the
    /// initial placement, comes from it.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> EngineBuilder<S, R2> {
        EngineBuilder {
            config:     self.config,
            search:     self.search,
            rng,
            population: self.population,
        }
    }

    /// Supply a prepared population instead of drawing one.
    ///
    /// Must hold exactly `config.population_size` agents, each committed,
    /// inside `config.domain()`, and with an incubation timer no longer
    /// than `config.incubation_period`.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate the configuration, draw (or check) the population, and
    /// return an engine in [`EnginePhase::Initialized`].
    pub fn build(self) -> SimResult<Engine<S, R>> {
        self.config.validate()?;
        let mut rng = self.rng;

        let population = match self.population {
            Some(p) => {
                check_population(&p, &self.config)?;
                p
            }
            None => PopulationBuilder::from_config(&self.config).build(&mut rng)?,
        };

        let initial = population.counts();
        tracing::info!(
            population = population.len(),
            frames = self.config.frames,
            %initial,
            distancing = self.config.social_distancing,
            eligible = population.distancing_group().len(),
            "engine constructed"
        );

        Ok(Engine {
            movement:     Movement::from_config(&self.config),
            transmission: Transmission::from_config(&self.config),
            transition:   Transition::from_config(&self.config),
            distancing:   DistancingPolicy::from_config(&self.config),
            config:       self.config,
            population,
            history:      History::starting_with(initial),
            now:          Step::ZERO,
            phase:        EnginePhase::Initialized,
            search:       self.search,
            rng,
            last_report:  None,
        })
    }
}

/// Reject a supplied population the step loop cannot run from.
fn check_population(population: &Population, config: &SeirConfig) -> SimResult<()> {
    if population.len() != config.population_size {
        return Err(SimError::PopulationMismatch {
            expected: config.population_size,
            got:      population.len(),
        });
    }
    let domain = config.domain();
    for id in population.agent_ids() {
        let agent = population.get(id);
        let reason = if agent.state != agent.pending_state {
            format!("pending {} differs from committed {}", agent.pending_state, agent.state)
        } else if !domain.contains(agent.position) {
            format!("position {} lies outside the {} domain", agent.position, domain.size)
        } else if agent.state == EpiState::Exposed && agent.incubation_timer > config.incubation_period {
            format!(
                "incubation timer {} exceeds incubation_period {}",
                agent.incubation_timer, config.incubation_period
            )
        } else {
            continue;
        };
        return Err(SimError::InvalidPopulation { agent: id, reason });
    }
    Ok(())
}
