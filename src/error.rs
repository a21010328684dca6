//! The error taxonomy of planner operations

use thiserror::Error;

/// Errors a planner operation can surface.
///
/// None of these are fatal to a running session: a validation error aborts the
/// single operation that raised it, and the [`Provider`](crate::provider::Provider)
/// recovers from transport and decode failures by falling back to the local
/// cache slots.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A required input field was missing when creating a subject
    #[error("{0}")]
    Validation(&'static str),

    /// The store could not be reached, or answered with a failure status
    #[error("transport failure: {0}")]
    Transport(String),

    /// The store answered with a document or row shape this crate does not understand
    #[error("decode failure: {0}")]
    Decode(String),
}

impl PlannerError {
    pub fn is_validation(&self) -> bool {
        match self {
            PlannerError::Validation(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for PlannerError {
    fn from(err: url::ParseError) -> Self {
        PlannerError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Decode(err.to_string())
    }
}
