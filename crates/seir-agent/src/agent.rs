//! A single simulated individual.

use seir_core::{EpiState, Point};

/// One agent: position, double-buffered compartment, incubation countdown
/// and distancing flags.
///
/// # Double buffering
///
/// Within a step every decision reads [`state`](Self::state) and every write
/// goes to [`pending_state`](Self::pending_state).  [`commit`](Self::commit)
/// is the only place `state` changes, so the order in which agents are
/// visited cannot affect the outcome of a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: Point,

    /// Compartment as of the last commit.
    pub state: EpiState,

    /// Compartment to adopt at the next commit.  Equal to `state` between steps.
    pub pending_state: EpiState,

    /// Remaining steps before an Exposed agent turns Infectious.  Only
    /// meaningful while Exposed.
    pub incubation_timer: u32,

    /// Pre-selected at construction to adopt distancing once it is triggered.
    pub distancing_eligible: bool,

    /// One-way latch; never reset once set.
    pub distancing_active: bool,
}

impl Agent {
    /// A fresh agent at `position` in `state`.  Exposed agents start their
    /// countdown at `incubation_period`.
    pub fn new(position: Point, state: EpiState, incubation_period: u32) -> Self {
        Self {
            position,
            state,
            pending_state: state,
            incubation_timer: if state == EpiState::Exposed { incubation_period } else { 0 },
            distancing_eligible: false,
            distancing_active: false,
        }
    }

    /// Mark this agent to become Exposed at the next commit and (re)start
    /// its incubation countdown.
    ///
    /// Returns `true` if this call changed the pending state; repeated calls
    /// within one step only reset the timer to the same value.
    #[inline]
    pub fn expose(&mut self, incubation_period: u32) -> bool {
        let fresh = self.pending_state != EpiState::Exposed;
        self.pending_state = EpiState::Exposed;
        self.incubation_timer = incubation_period;
        fresh
    }

    /// Adopt the pending state.
    #[inline]
    pub fn commit(&mut self) {
        self.state = self.pending_state;
    }

    /// Switch distancing on if this agent is eligible.  Returns `true` if
    /// the flag flipped.
    #[inline]
    pub fn activate_distancing(&mut self) -> bool {
        if self.distancing_eligible && !self.distancing_active {
            self.distancing_active = true;
            true
        } else {
            false
        }
    }
}
