//! `seir-spatial`: contact search for proximity-based transmission.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`search`] | `ContactSearch` trait, `Site`, `ContactList`                  |
//! | [`brute`]  | `BruteForceSearch`: every source against every target         |
//! | [`rtree`]  | `RTreeSearch`: `rstar` index over targets, exact re-check     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Brute-force scan runs per source on Rayon's thread pool.   |
//!
//! Every implementation returns the same contacts in the same order, so the
//! choice of search never changes a seeded run.

pub mod brute;
pub mod rtree;
pub mod search;


pub use brute::BruteForceSearch;
pub use rtree::RTreeSearch;
pub use search::{ContactList, ContactSearch, Site};
