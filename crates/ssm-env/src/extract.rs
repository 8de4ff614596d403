//! Structural validation of configuration records.
//!
//! Responsibilities:
//! - Serialize a record into the working image the resolver mutates.
//! - Validate that the record is a structured object and that every
//!   declared field is textual and externally writable.
//!
//! Does NOT handle:
//! - Environment or remote access (see resolver.rs); extraction is pure
//!   inspection with no side effects.
//!
//! Invariants:
//! - Validation runs for declared fields only; undeclared fields of any
//!   type are ignored and left untouched by the whole system.
//! - Errors surface before any field is resolved, so a failing extraction
//!   never mutates the record.

use serde_json::{Map, Value};

use crate::descriptor::Resolvable;
use crate::error::ResolveError;

/// Serialize `record` and validate its declared fields, returning the
/// mutable image resolution operates on.
pub(crate) fn extract<T: Resolvable>(record: &T) -> Result<Map<String, Value>, ResolveError> {
    let image = serde_json::to_value(record).map_err(|_| ResolveError::InvalidConfiguration)?;

    let Value::Object(map) = image else {
        return Err(ResolveError::InvalidConfiguration);
    };

    for descriptor in T::FIELDS {
        match map.get(descriptor.field()) {
            Some(Value::String(_)) => {}
            Some(_) => return Err(ResolveError::InvalidFieldType(descriptor.field())),
            None => return Err(ResolveError::InvalidFieldAccess(descriptor.field())),
        }
    }

    Ok(map)
}
