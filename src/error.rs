// src/error.rs

use thiserror::Error;

/// Everything that can go wrong inside the scheduling core.
///
/// None of these are recovered locally: construction errors kill the agent
/// being built, parse errors kill the `produce_order` call, and collaborator
/// errors kill the run. An order that the market rejects as invalid is NOT
/// an error; the engine drops it silently and moves on.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("order log exhausted")]
    OrderLogExhausted,

    #[error("malformed order line {line:?}: {reason}")]
    MalformedOrderLine { line: String, reason: String },

    #[error("agent pool is empty, nothing to sample")]
    EmptyAgentPool,

    #[error("collaborator failure: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Wrap an arbitrary Market/World failure so it can travel through `run`
    /// unmodified.
    pub fn collaborator<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SimError::Collaborator(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
