//! The `Engine` struct and its step loop.

use seir_agent::{Agent, Population};
use seir_core::{AggregateCounts, EpiState, RandomSource, SeirConfig, SimRng, Step};
use seir_dynamics::{
    DistancingPolicy, Movement, Transition, TransitionReport, Transmission, TransmissionReport,
};
use seir_spatial::{BruteForceSearch, ContactSearch};

use crate::{History, SimError, SimObserver, SimResult, Snapshot};

// ── Phase and per-step report ─────────────────────────────────────────────────

/// Lifecycle of an [`Engine`].
///
/// `Initialized → Running → Terminated`.  The engine enters `Running` on the
/// first call to [`Engine::step`] or [`Engine::run`] and `Terminated` once
/// `config.frames` steps have completed.  There is no way back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    Initialized,
    Running,
    Terminated,
}

/// What the passes of one step did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub step:         Step,
    pub transmission: TransmissionReport,
    pub transition:   TransitionReport,
    /// Agents switched into distancing this step, if the latch fired.
    pub distancing:   Option<usize>,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Engine<S, R>` owns the population, the history and the single random
/// source, and drives the step loop:
///
/// 1. **Movement**: jitter and clamp every agent.
/// 2. **Transmission**: Infectious sources expose in-range Susceptible
///    targets (via `S: ContactSearch`).
/// 3. **Transition**: timed E→I, stochastic I→R.
/// 4. **Commit**: every agent adopts its pending state.
/// 5. **Distancing**: the latch checks the committed Infectious count.
/// 6. **Record**: counts are appended to the history and a snapshot is
///    offered to the observer.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<S: ContactSearch = BruteForceSearch, R: RandomSource = SimRng> {
    pub(crate) config:       SeirConfig,
    pub(crate) population:   Population,
    pub(crate) history:      History,
    pub(crate) now:          Step,
    pub(crate) phase:        EnginePhase,
    pub(crate) movement:     Movement,
    pub(crate) transmission: Transmission,
    pub(crate) transition:   Transition,
    pub(crate) distancing:   DistancingPolicy,
    pub(crate) search:       S,
    pub(crate) rng:          R,
    pub(crate) last_report:  Option<StepReport>,
}

impl<S: ContactSearch, R: RandomSource> Engine<S, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Execute one step and return the counts appended to the history.
    ///
    /// The first call also emits [`SimObserver::on_start`]; the call that
    /// completes step `config.frames` emits [`SimObserver::on_sim_end`].
    /// Calling again after that returns [`SimError::Terminated`].
    pub fn step<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> SimResult<AggregateCounts> {
        if self.phase == EnginePhase::Initialized {
            self.start(observer);
        }
        if self.phase == EnginePhase::Terminated {
            return Err(SimError::Terminated { steps: self.now.0 });
        }
        Ok(self.advance(observer))
    }

    /// Run the remaining steps up to `config.frames` and return the history.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> SimResult<&History> {
        match self.phase {
            EnginePhase::Terminated => return Err(SimError::Terminated { steps: self.now.0 }),
            EnginePhase::Initialized => self.start(observer),
            EnginePhase::Running => {}
        }
        while self.phase == EnginePhase::Running {
            self.advance(observer);
        }
        Ok(&self.history)
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step:              self.now,
            agents:            self.population.agents(),
            history:           &self.history,
            distancing_active: self.distancing.is_active(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SeirConfig {
        &self.config
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        self.population.agents()
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Completed steps.
    #[inline]
    pub fn now(&self) -> Step {
        self.now
    }

    #[inline]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.phase == EnginePhase::Terminated
    }

    #[inline]
    pub fn distancing(&self) -> &DistancingPolicy {
        &self.distancing
    }

    /// Report of the most recent step, `None` before the first.
    #[inline]
    pub fn last_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    /// Consume the engine and keep only its history.
    pub fn into_history(self) -> History {
        self.history
    }

    // ── Step loop ─────────────────────────────────────────────────────────

    fn start<O: SimObserver + ?Sized>(&mut self, observer: &mut O) {
        self.phase = EnginePhase::Running;
        observer.on_start(&self.snapshot());
        if self.now.0 >= self.config.frames {
            self.finish(observer);
        }
    }

    fn advance<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> AggregateCounts {
        let now = self.now.next();
        observer.on_step_start(now);

        // ── Passes: decisions read `state`, writes go to `pending_state` ──
        self.movement.apply(&mut self.population, &mut self.rng);
        let transmission = self
            .transmission
            .apply(&mut self.population, &self.search, &mut self.rng);
        let transition = self.transition.apply(&mut self.population, &mut self.rng);

        // ── Commit ────────────────────────────────────────────────────────
        self.population.commit();

        // ── Distancing latch ──────────────────────────────────────────────
        let infectious = self.population.count(EpiState::Infectious);
        let distancing = self.distancing.evaluate(now, infectious, &mut self.population);
        if distancing.is_some() {
            observer.on_distancing_activated(now, infectious);
        }

        // ── Record ────────────────────────────────────────────────────────
        let counts = self.population.counts();
        debug_assert_eq!(counts.total(), self.population.len(), "compartments must partition the population");
        debug_assert!(
            self.history.latest().is_none_or(|prev| counts.recovered >= prev.recovered),
            "Recovered count decreased at {now}"
        );
        debug_assert!(
            self.population.agents().iter().all(|a| a.state != EpiState::Exposed
                || a.incubation_timer <= self.config.incubation_period),
            "incubation timer above incubation_period at {now}"
        );
        self.history.push(counts);
        self.now = now;

        let report = StepReport { step: now, transmission, transition, distancing };
        tracing::trace!(
            step = now.0,
            contacts = transmission.contacts,
            exposures = transmission.exposures,
            onsets = transition.onsets,
            recoveries = transition.recoveries,
            "step report"
        );
        tracing::debug!(step = now.0, %counts, "step complete");
        self.last_report = Some(report);

        observer.on_snapshot(&self.snapshot());

        if now.0 >= self.config.frames {
            self.finish(observer);
        }
        counts
    }

    fn finish<O: SimObserver + ?Sized>(&mut self, observer: &mut O) {
        self.phase = EnginePhase::Terminated;
        let counts = self.history.latest().copied().unwrap_or_default();
        let peak = self.history.peak(EpiState::Infectious);
        tracing::info!(
            steps = self.now.0,
            %counts,
            peak_infectious = peak.map(|(_, n)| n),
            peak_step = peak.map(|(s, _)| s.0),
            distancing_at = self.distancing.activated_at().map(|s| s.0),
            "simulation finished"
        );
        observer.on_sim_end(self.now);
    }
}
