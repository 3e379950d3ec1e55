//! Append-only per-step compartment totals.

use seir_core::{AggregateCounts, EpiState, Step};

/// The `(S, E, I, R)` series of a run.
///
/// Index 0 is the initial state; the engine appends exactly one record per
/// completed step, so after `k` steps `len() == k + 1` and `get(Step(k))` is
/// the state after step `k`.  Records are never modified once appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    records: Vec<AggregateCounts>,
}

impl History {
    /// A history holding only the initial state.
    pub fn starting_with(initial: AggregateCounts) -> Self {
        Self { records: vec![initial] }
    }

    pub(crate) fn push(&mut self, counts: AggregateCounts) {
        self.records.push(counts);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts after `step` completed steps.
    #[inline]
    pub fn get(&self, step: Step) -> Option<&AggregateCounts> {
        self.records.get(step.index())
    }

    /// The most recent record.
    #[inline]
    pub fn latest(&self) -> Option<&AggregateCounts> {
        self.records.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AggregateCounts] {
        &self.records
    }

    /// `(step, counts)` pairs in order, starting at `Step::ZERO`.
    pub fn iter(&self) -> impl Iterator<Item = (Step, &AggregateCounts)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, c)| (Step(i as u64), c))
    }

    /// One compartment's count at every recorded step.
    pub fn series(&self, state: EpiState) -> Vec<usize> {
        self.records.iter().map(|c| c.get(state)).collect()
    }

    /// The largest count of `state` and the earliest step it occurred at.
    pub fn peak(&self, state: EpiState) -> Option<(Step, usize)> {
        let mut best: Option<(Step, usize)> = None;
        for (step, counts) in self.iter() {
            let n = counts.get(state);
            if best.is_none_or(|(_, b)| n > b) {
                best = Some((step, n));
            }
        }
        best
    }
}
