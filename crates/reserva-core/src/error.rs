//! Error types for reserva-core

use thiserror::Error;

/// Core error type
///
/// Tool-level failures never surface here; the loop converts them into
/// conversation messages so the model can adapt.
#[derive(Debug, Error)]
pub enum Error {
    /// Persona name did not resolve
    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    /// Completion client error (fatal for the current turn)
    #[error("llm error: {0}")]
    Llm(#[from] reserva_llm::Error),

    /// The turn was cancelled between round-trips
    #[error("turn cancelled")]
    Cancelled,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
