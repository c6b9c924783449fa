//! Error types for the onboarding flow.
//!
//! Field validation failures are not errors: they are reported as data through
//! `validation::FieldErrors`. The types here cover misuse of the flow and bad
//! configuration.

use crate::onboarding::OnboardingStage;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Onboarding progression errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: OnboardingStage,
        to: OnboardingStage,
    },

    #[error("Stage {stage} is not complete: {reason}")]
    StageIncomplete {
        stage: OnboardingStage,
        reason: String,
    },

    #[error("Answer for {expected} given while on {actual}")]
    WrongStage {
        expected: OnboardingStage,
        actual: OnboardingStage,
    },

    #[error("No stage before {stage}")]
    NoPreviousStage { stage: OnboardingStage },

    #[error("Onboarding already finished")]
    AlreadyFinished,

    #[error("Onboarding not finished (currently at {stage})")]
    NotFinished { stage: OnboardingStage },
}

/// Demo session loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session has neither a registration nor a login form")]
    MissingAuth,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
