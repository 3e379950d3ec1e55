//! R-tree contact search.
//!
//! # Exactness
//!
//! `rstar` answers "within squared distance" queries with its own arithmetic.
//! The query radius is widened by a relative epsilon so that it returns a
//! superset of the true contacts, and every candidate is then re-checked with
//! [`Point::within`], the same predicate [`BruteForceSearch`] uses.  The two
//! searches therefore report identical contact lists.
//!
//! [`BruteForceSearch`]: crate::BruteForceSearch

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use seir_core::{AgentId, Point};

use crate::{ContactList, ContactSearch, Site};

/// Relative widening applied to the query radius before the exact re-check.
const QUERY_SLACK: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct TargetEntry {
    point: Point,
    id:    AgentId,
}

impl RTreeObject for TargetEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point.to_array())
    }
}

impl PointDistance for TargetEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.point.distance_sq(Point::new(point[0], point[1]))
    }
}

// ── RTreeSearch ───────────────────────────────────────────────────────────────

/// Bulk-loads the targets into an R-tree on every call and queries it once
/// per source.
///
/// Pays off when contacts are sparse relative to the population, i.e. a
/// small radius on a large domain.
#[derive(Copy, Clone, Debug, Default)]
pub struct RTreeSearch;

impl ContactSearch for RTreeSearch {
    fn contacts(&self, sources: &[Site], targets: &[Site], radius: f64) -> ContactList {
        // `within` is strict, so a non-positive radius never matches.
        if radius <= 0.0 || targets.is_empty() {
            return vec![Vec::new(); sources.len()];
        }

        let tree = RTree::bulk_load(
            targets
                .iter()
                .map(|t| TargetEntry { point: t.point, id: t.id })
                .collect(),
        );
        let reach = radius * (1.0 + QUERY_SLACK);
        let reach_sq = reach * reach;

        sources
            .iter()
            .map(|s| {
                let mut hits: Vec<AgentId> = tree
                    .locate_within_distance(s.point.to_array(), reach_sq)
                    .filter(|e| s.point.within(e.point, radius))
                    .map(|e| e.id)
                    .collect();
                hits.sort_unstable();
                hits
            })
            .collect()
    }
}
