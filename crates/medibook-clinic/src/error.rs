//! Error types for the clinic collaborators

use medibook_core::DoctorId;
use thiserror::Error;

/// Result type alias for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;

/// Errors that can occur in clinic operations
#[derive(Debug, Error)]
pub enum ClinicError {
    /// A screen loaded without its expected handoff record; the caller
    /// recovers by redirecting to the listing screen.
    #[error("No record under '{0}' in the session handoff")]
    MissingContext(&'static str),

    /// Doctor id not present in the directory
    #[error("Unknown doctor: {0}")]
    UnknownDoctor(DoctorId),

    /// The requested slot cannot be booked
    #[error("Slot not available: {0}")]
    SlotUnavailable(String),

    /// A handoff value failed to encode or decode
    #[error("Handoff serialization error: {0}")]
    Handoff(#[from] serde_json::Error),
}
