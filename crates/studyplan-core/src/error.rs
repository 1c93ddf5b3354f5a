//! Core error types for studyplan-core.
//!
//! Only input-validation failures abort a planning run. Everything the
//! allocator cannot satisfy degrades into warning lines inside the plan
//! itself, so callers always get a best-effort result.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for one planning run.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The user id does not match the stored identifier shape.
    #[error("invalid user id '{0}': expected a 24-character hex identifier")]
    InvalidUserId(String),

    /// The store has no record for this user.
    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// A configured learning window label could not be parsed.
    #[error("time window error: {0}")]
    Format(#[from] FormatError),

    /// The record store failed to supply records.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}

/// Time-window label parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The label is missing the literal `" - "` separator.
    #[error("time range '{0}' is missing the ' - ' separator")]
    MissingSeparator(String),

    /// One of the two timestamps is not a valid `HH:MM` clock time.
    #[error("invalid timestamp '{0}': expected HH:MM")]
    BadTimestamp(String),

    /// The range is empty or inverted; windows spanning midnight are not
    /// supported.
    #[error("time range '{0}' must end after it starts")]
    EmptyOrInverted(String),
}

/// Record-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record file could not be read.
    #[error("failed to read records from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// A record did not match the expected document shape.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("record backend error: {0}")]
    Backend(String),
}

/// Result type alias for PlanError
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
