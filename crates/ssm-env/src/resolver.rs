//! Two-tier field resolution: local environment, then remote override.
//!
//! Responsibilities:
//! - Drive resolution of every declared field in declaration order.
//! - Apply the local environment value, then override it from the remote
//!   store when the field's derived `_SSM` variable is set.
//! - Commit resolved values back into the caller's record.
//!
//! Does NOT handle:
//! - Structural validation (see extract.rs).
//! - Retry, caching or timeout policy for remote fetches; a single remote
//!   failure aborts the whole resolution.
//!
//! Invariants:
//! - A remote value, when fetched successfully, always replaces the local
//!   value.
//! - The working image is committed back into the record even when a remote
//!   fetch fails: fields resolved in earlier iterations stay mutated, later
//!   fields stay untouched. Callers relying on atomicity must keep a copy of
//!   the record themselves.
//! - Secret values are never logged.

use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::descriptor::{FieldDescriptor, Resolvable};
use crate::env::{env_var_or_default, env_var_or_none};
use crate::error::ResolveError;
use crate::extract::extract;
use crate::store::{ParameterRequest, ParameterStore};

/// Resolve every declared field of `record` from the environment, fetching
/// remote overrides through `store` for fields whose derived `_SSM`
/// variable holds a parameter name.
///
/// Per declared field, in declaration order:
/// 1. The base environment variable is written into the field (empty string
///    if unset).
/// 2. If `<ENV_KEY>_SSM` holds a non-empty value, that value is fetched from
///    `store` (decrypted when the field is marked encrypted) and replaces
///    the local value. A fetch failure aborts resolution and is returned
///    verbatim.
///
/// `store` is only called for fields that opt in; [`NoStore`](crate::NoStore)
/// is legal whenever no field does. Cancellation is the enclosing future:
/// wrap the returned future in `tokio::time::timeout` (or drop it) to cancel
/// an in-flight remote fetch. No timeout is imposed here.
pub async fn resolve<T, S>(record: &mut T, store: &S) -> Result<(), ResolveError>
where
    T: Resolvable,
    S: ParameterStore + ?Sized,
{
    let mut image = extract(record)?;
    if T::FIELDS.is_empty() {
        return Ok(());
    }

    let outcome = resolve_fields(&mut image, T::FIELDS, store).await;

    // Commit even on failure so the partial-mutation contract holds.
    match serde_json::from_value(Value::Object(image)) {
        Ok(updated) => {
            *record = updated;
            outcome
        }
        Err(_) => outcome.and(Err(ResolveError::InvalidConfiguration)),
    }
}

async fn resolve_fields<S>(
    image: &mut Map<String, Value>,
    fields: &'static [FieldDescriptor],
    store: &S,
) -> Result<(), ResolveError>
where
    S: ParameterStore + ?Sized,
{
    for descriptor in fields {
        let local = env_var_or_default(descriptor.env_key());
        trace!(
            field = descriptor.field(),
            env_key = descriptor.env_key(),
            "applying local environment value"
        );
        image.insert(descriptor.field().to_string(), Value::String(local));

        let Some(name) = env_var_or_none(&descriptor.remote_key()) else {
            continue;
        };

        debug!(
            field = descriptor.field(),
            parameter = %name,
            with_decryption = descriptor.is_encrypted(),
            "overriding field from remote parameter store"
        );

        let request = ParameterRequest {
            name,
            with_decryption: descriptor.is_encrypted(),
        };
        let parameter = store.fetch_parameter(request).await?;

        image.insert(
            descriptor.field().to_string(),
            Value::String(parameter.value.expose_secret().to_owned()),
        );
    }

    Ok(())
}
