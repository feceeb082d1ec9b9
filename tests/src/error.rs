//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to build the starting state.
    #[error("failed to set up scenario '{scenario}': {message}")]
    Setup { scenario: String, message: String },

    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// Final store check failed.
    #[error("final state of scenario '{scenario}' mismatched: {message}")]
    FinalState { scenario: String, message: String },
}

impl ScenarioError {
    pub fn setup(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Setup {
            scenario: scenario.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn final_state(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FinalState {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}
