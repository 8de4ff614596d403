//! Environment-driven configuration with remote parameter overrides.
//!
//! This crate populates the string fields of a configuration record from
//! environment variables. When a field's companion `<KEY>_SSM` variable
//! holds a parameter name, the field's value is instead fetched from a
//! remote secret/parameter store through the [`ParameterStore`] capability:
//! twelve-factor configuration with an escape hatch to externally managed
//! secrets.
//!
//! Record types declare their resolvable fields by implementing
//! [`Resolvable`]; no runtime reflection is involved.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use ssm_env::{FieldDescriptor, NoStore, Resolvable};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct ServiceConfig {
//!     username: String,
//!     password: String,
//! }
//!
//! impl Resolvable for ServiceConfig {
//!     const FIELDS: &'static [FieldDescriptor] = &[
//!         FieldDescriptor::new("username", "SERVICE_USER"),
//!         FieldDescriptor::new("password", "SERVICE_PASSWORD").encrypted(),
//!     ];
//! }
//!
//! # tokio_test::block_on(async {
//! let mut config = ServiceConfig::default();
//!
//! // If SERVICE_USER_SSM is set on the system, e.g. to "/remote/user", the
//! // parameter store is queried for "/remote/user" and the result replaces
//! // the local SERVICE_USER value. NoStore is fine while no field opts in.
//! ssm_env::resolve(&mut config, &NoStore).await?;
//! # Ok::<(), ssm_env::ResolveError>(())
//! # })
//! # .unwrap();
//! ```

mod descriptor;
mod env;
mod error;
mod extract;
mod resolver;
mod store;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use descriptor::{FieldDescriptor, Resolvable};
pub use env::{env_var_or_none, load_dotenv};
pub use error::{ResolveError, Result};
pub use resolver::resolve;
pub use store::{NoStore, Parameter, ParameterRequest, ParameterStore};
