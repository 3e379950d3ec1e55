//! `seir-agent`: agent records and population storage for the `seir_sim`
//! engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`: one individual's position, state and flags       |
//! | [`population`]  | `Population`: contiguous `Vec<Agent>` + distancing group  |
//! | [`builder`]     | `PopulationBuilder` (validated construction)              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod builder;
pub mod population;


pub use agent::Agent;
pub use builder::PopulationBuilder;
pub use population::Population;
