use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::models::TaskId;
use crate::store::StoreOp;

/// Error set for the scheduler core. Every variant is recoverable and scoped
/// to the single operation that raised it.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Local validation ---------------------------------------------------
    /// Draft field rejected before any store call was attempted.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A create/update is already awaiting store confirmation.
    #[error("A task submit is already in flight.")]
    SubmitInFlight,

    /// `begin_edit` target is not in the current snapshot.
    #[error("No task with id {0} in the current snapshot.")]
    UnknownTask(TaskId),

    // ---- Store collaborator -------------------------------------------------
    /// A store operation (network/permission) failed; local state is untouched
    /// and the caller may retry.
    #[error("Store {op} failed: {message}")]
    Store { op: StoreOp, message: String },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Bad canonical date/time/enum string.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config JSON decode/encode, etc.)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for a field-level validation failure.
    pub fn validation<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
    /// Helper for a failed store operation.
    pub fn store<S: Into<String>>(op: StoreOp, message: S) -> Self {
        Error::Store {
            op,
            message: message.into(),
        }
    }
}
