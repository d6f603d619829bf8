//! Error types for MARC lint operations.
//!
//! Data-quality findings are never errors: they are reported as
//! [`Diagnostic`](crate::diagnostic::Diagnostic) values. [`MarcError`] covers
//! contract violations and failures while building the lint components
//! (leader parsing, code tables, fixed-field schema, configuration).

use thiserror::Error;

/// Error type for all MARC lint library operations.
#[derive(Error, Debug)]
pub enum MarcError {
    /// Error indicating an invalid leader (24-byte header).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// A code table source was malformed (duplicate or badly sized codes).
    #[error("Invalid code table: {0}")]
    CodeTable(String),

    /// A fixed-field schema byte range could not be built.
    #[error("Invalid fixed-field schema: {0}")]
    Schema(String),

    /// A lint configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error reading a tab-separated code table.
    #[error("Code table read error: {0}")]
    Csv(#[from] csv::Error),

    /// Error decoding a JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
