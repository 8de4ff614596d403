//! Test doubles for the remote parameter store.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use ssm_env::testing::FakeStore;
//!
//! let store = FakeStore::new()
//!     .with_parameter("/remote/value", "something remote")
//!     .with_failure("/remote/value/failed", "remote failed");
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::store::{Parameter, ParameterRequest, ParameterStore};

/// Scripted in-memory parameter store.
///
/// Each parameter name maps to a canned value or a canned failure message;
/// fetching an unscripted name fails. Every request is recorded so tests can
/// assert whether (and how) the capability was invoked.
#[derive(Debug, Default)]
pub struct FakeStore {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<ParameterRequest>>,
}

impl FakeStore {
    /// Create a fake store with no scripted parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful fetch for `name`.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.responses.insert(name.into(), Ok(value.into()));
        self
    }

    /// Script a failing fetch for `name`.
    pub fn with_failure(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(name.into(), Err(message.into()));
        self
    }

    /// Requests recorded so far, in call order.
    pub fn calls(&self) -> Vec<ParameterRequest> {
        self.calls.lock().expect("fake store lock poisoned").clone()
    }
}

#[async_trait]
impl ParameterStore for FakeStore {
    async fn fetch_parameter(&self, request: ParameterRequest) -> anyhow::Result<Parameter> {
        self.calls
            .lock()
            .expect("fake store lock poisoned")
            .push(request.clone());

        match self.responses.get(&request.name) {
            Some(Ok(value)) => Ok(Parameter {
                value: SecretString::new(value.clone().into()),
            }),
            Some(Err(message)) => Err(anyhow::anyhow!("{message}")),
            None => Err(anyhow::anyhow!(
                "parameter '{}' is not scripted",
                request.name
            )),
        }
    }
}
