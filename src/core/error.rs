//! Engine error type.
//!
//! Passing, finishing and empty rounds are ordinary transitions and never
//! show up here. An `EngineError` means either the caller handed in a bad
//! configuration or an engine invariant was broken.

use thiserror::Error;

/// Errors raised by the engine and session driver.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Cards were removed that are not held, or a hand was asked for more
    /// cards than it has. Unrecoverable within a game.
    #[error("illegal state: {reason}")]
    IllegalState { reason: String },

    /// Session or engine built with unsupported parameters.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// Checkpoint could not be encoded or decoded.
    #[error("snapshot codec failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl EngineError {
    pub(crate) fn illegal_state(reason: impl Into<String>) -> Self {
        Self::IllegalState {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// True for errors that indicate a logic defect rather than bad input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
