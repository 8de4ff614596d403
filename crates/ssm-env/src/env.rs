//! Environment variable access for configuration resolution.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering for the
//!   derived `_SSM` keys.
//! - Read base environment values verbatim (unset reads as empty string).
//! - Provide optional `.env` preloading via `load_dotenv`.
//!
//! Does NOT handle:
//! - Deciding which variables to read (see resolver.rs).
//! - Writing to the environment; all access is read-only.
//!
//! Invariants:
//! - Empty or whitespace-only derived keys are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.
//! - Dotenv errors never include raw `.env` line contents.

use crate::error::ResolveError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Read an environment variable verbatim, with unset (or non-unicode)
/// reading as the empty string. This is the semantics base field values are
/// resolved with: "unset" is an empty string, not an error.
pub(crate) fn env_var_or_default(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(error: &dotenvy::Error) -> bool {
    matches!(error, dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
}

/// Load environment variables from a `.env` file if present.
///
/// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
/// the `.env` file will not be loaded (useful for testing).
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ResolveError::DotenvParse`)
/// - The `.env` file exists but cannot be read due to I/O errors (`ResolveError::DotenvIo`)
///
/// Missing `.env` files are silently ignored (returns `Ok(())`).
///
/// SAFETY: Error messages never include raw .env line contents to prevent
/// secret leakage.
pub fn load_dotenv() -> Result<(), ResolveError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ResolveError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ResolveError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ResolveError::DotenvUnknown),
    }
}
