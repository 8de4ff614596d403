//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for structural misconfiguration of a record.
//! - Propagate remote-store failures verbatim, without wrapping.
//!
//! Does NOT handle:
//! - Logging or retrying; errors are returned to the immediate caller.
//!
//! Invariants:
//! - Structural variants carry the offending field name for debugging.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a configuration record.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The record does not serialize to a structured object with named
    /// fields. No fields are touched.
    #[error("configuration must be a structured record with named fields")]
    InvalidConfiguration,

    /// A declared field is not textual. Detected before any environment or
    /// remote access.
    #[error("field '{0}' must be a string")]
    InvalidFieldType(&'static str),

    /// A declared field is not visible to serialization and so cannot be
    /// written back. Detected before any environment or remote access.
    #[error("field '{0}' must be externally settable")]
    InvalidFieldAccess(&'static str),

    /// A remote fetch failed. Propagated verbatim from the store capability;
    /// fields resolved in earlier iterations remain mutated.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
