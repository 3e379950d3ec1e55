use seir_core::{AgentId, SeirError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] SeirError),

    #[error("simulation already terminated after {steps} steps")]
    Terminated { steps: u64 },

    #[error("population has {got} agents but the configuration expects {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("supplied agent {agent} is invalid: {reason}")]
    InvalidPopulation {
        agent:  AgentId,
        reason: String,
    },
}

pub type SimResult<T> = Result<T, SimError>;
