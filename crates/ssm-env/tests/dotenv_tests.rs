//! Tests for dotenv preloading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1` skips dotenv loading.
//!
//! Invariants:
//! - Tests must serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use serial_test::serial;
use ssm_env::ResolveError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    // No .env file in temp_dir
    let result = temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], ssm_env::load_dotenv);

    assert!(
        result.is_ok(),
        "Missing .env file should be silently ignored"
    );
}

#[test]
#[serial]
fn test_valid_dotenv_populates_environment() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "_SSM_DOTENV_TEST_KEY=from-dotenv\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_SSM_DOTENV_TEST_KEY", None),
        ],
        || {
            ssm_env::load_dotenv().expect("Valid .env file should load successfully");
            assert_eq!(
                std::env::var("_SSM_DOTENV_TEST_KEY").as_deref(),
                Ok("from-dotenv")
            );
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "_SSM_DOTENV_SKIPPED_KEY=should-not-load\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("_SSM_DOTENV_SKIPPED_KEY", None),
        ],
        || {
            ssm_env::load_dotenv().expect("Disabled dotenv loading should succeed");
            assert!(
                std::env::var("_SSM_DOTENV_SKIPPED_KEY").is_err(),
                "DOTENV_DISABLED=1 must skip .env loading"
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_error_leaks_no_contents() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "INVALID LINE WITH super-secret-value\n",
    )
    .unwrap();

    let result = temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], ssm_env::load_dotenv);

    match result {
        Err(err @ ResolveError::DotenvParse { .. }) => {
            let message = err.to_string();
            assert!(
                !message.contains("super-secret-value"),
                "Error message must not leak .env contents: {message}"
            );
        }
        other => panic!("Expected DotenvParse error, got {other:?}"),
    }
}
