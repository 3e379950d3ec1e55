//! The contact-search trait.
//!
//! # Pluggability
//!
//! The transmission pass calls contact search through [`ContactSearch`], so
//! an application can swap the quadratic scan for an indexed one without
//! touching the dynamics.  The default [`BruteForceSearch`] matches the
//! reference algorithm exactly.
//!
//! [`BruteForceSearch`]: crate::BruteForceSearch

use seir_core::{AgentId, Point};

/// An agent id with the position it occupies this step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Site {
    pub id:    AgentId,
    pub point: Point,
}

impl Site {
    #[inline]
    pub fn new(id: AgentId, point: Point) -> Self {
        Self { id, point }
    }
}

/// For source `k` (in the order passed in), the targets strictly within the
/// radius, ascending by id.
pub type ContactList = Vec<Vec<AgentId>>;

/// Pluggable proximity query.
///
/// # Contract
///
/// - `sources` and `targets` are each sorted ascending by id.
/// - The result has exactly one entry per source, in source order.
/// - Each entry lists every target with
///   `source.point.within(target.point, radius)`, ascending by id.
///
/// The transmission pass draws one random number per listed pair in this
/// order, so any implementation honouring the contract is interchangeable.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so an engine can be moved across
/// threads, and so searches can fan out over Rayon internally.
pub trait ContactSearch: Send + Sync {
    fn contacts(&self, sources: &[Site], targets: &[Site], radius: f64) -> ContactList;
}
