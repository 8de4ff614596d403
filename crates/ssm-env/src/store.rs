//! Remote parameter store capability.
//!
//! Responsibilities:
//! - Define the narrow `ParameterStore` trait the resolver consumes: a
//!   single fetch operation, so any vendor parameter store (or a test fake)
//!   can stand behind it.
//! - Define the request/response types exchanged with the store.
//!
//! Does NOT handle:
//! - Deciding when to fetch (see resolver.rs).
//! - Vendor SDK construction, sessions, regions, credentials.
//!
//! Invariants:
//! - Fetched values are wrapped in `SecretString` so decrypted secrets never
//!   appear in `Debug` output.
//! - Cancellation is the enclosing future: dropping an in-flight
//!   `fetch_parameter` call cancels it. Implementations must not install
//!   their own timeout policy on behalf of the resolver.

use async_trait::async_trait;
use secrecy::SecretString;

/// Request for one remote parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRequest {
    /// Remote parameter identifier, taken from the field's derived `_SSM`
    /// environment variable.
    pub name: String,
    /// Whether the store should decrypt the value before returning it.
    pub with_decryption: bool,
}

/// A fetched remote parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// The parameter value.
    pub value: SecretString,
}

/// The remote secret/parameter store the resolver fetches overrides from.
///
/// Failures are returned as opaque [`anyhow::Error`]s and propagated to the
/// caller verbatim; the resolver performs no retry and no wrapping.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch a named parameter, optionally decrypted.
    async fn fetch_parameter(&self, request: ParameterRequest) -> anyhow::Result<Parameter>;
}

/// Store for records that never opt into remote resolution.
///
/// Legal to pass whenever no field's derived `_SSM` variable is set; if a
/// field does opt in, the fetch fails and resolution aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

#[async_trait]
impl ParameterStore for NoStore {
    async fn fetch_parameter(&self, request: ParameterRequest) -> anyhow::Result<Parameter> {
        Err(anyhow::anyhow!(
            "no parameter store configured for remote parameter '{}'",
            request.name
        ))
    }
}
