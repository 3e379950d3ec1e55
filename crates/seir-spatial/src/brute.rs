//! Quadratic all-pairs contact search.

use seir_core::AgentId;

use crate::{ContactList, ContactSearch, Site};

/// Tests every (source, target) pair.  O(sources × targets) per call.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForceSearch;

fn in_range(source: &Site, targets: &[Site], radius: f64) -> Vec<AgentId> {
    targets
        .iter()
        .filter(|t| source.point.within(t.point, radius))
        .map(|t| t.id)
        .collect()
}

impl ContactSearch for BruteForceSearch {
    fn contacts(&self, sources: &[Site], targets: &[Site], radius: f64) -> ContactList {
        #[cfg(not(feature = "parallel"))]
        {
            sources.iter().map(|s| in_range(s, targets, radius)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps source order.
            sources.par_iter().map(|s| in_range(s, targets, radius)).collect()
        }
    }
}
