//! Error types for reserva-domain

use thiserror::Error;

/// Domain error type
#[derive(Debug, Error)]
pub enum Error {
    /// Service lookup failed
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// Employee lookup failed
    #[error("employee not found: {0}")]
    EmployeeNotFound(String),

    /// Date or time string did not parse
    #[error("invalid date or time: {0}")]
    InvalidSlot(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
