//! Field registration metadata for resolvable configuration records.
//!
//! Responsibilities:
//! - Define `FieldDescriptor`, the (field, environment key, encryption flag)
//!   triple describing one resolvable field.
//! - Define the `Resolvable` trait that configuration record types implement
//!   to declare their resolvable fields.
//!
//! Does NOT handle:
//! - Validating descriptors against a concrete record (see extract.rs).
//! - Reading the environment or the remote store (see resolver.rs).
//!
//! Invariants:
//! - `Resolvable::FIELDS` lists fields in declaration order; that order is
//!   the resolution order.
//! - The derived remote-lookup key is always the environment key plus the
//!   literal `_SSM` suffix.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Suffix appended to a field's environment key to form the variable that
/// opts the field into remote resolution.
const REMOTE_KEY_SUFFIX: &str = "_SSM";

/// Describes one resolvable field of a configuration record.
///
/// Descriptors are declared as constants on the record type via
/// [`Resolvable::FIELDS`] and are never constructed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    field: &'static str,
    env_key: &'static str,
    encrypted: bool,
}

impl FieldDescriptor {
    /// Declare a resolvable field.
    ///
    /// `field` is the record field's serialized name; `env_key` is the base
    /// environment variable read for it. Keys are expected to match
    /// `[A-Za-z0-9_]+` so the derived `_SSM` variable is itself a valid
    /// variable name.
    pub const fn new(field: &'static str, env_key: &'static str) -> Self {
        Self {
            field,
            env_key,
            encrypted: false,
        }
    }

    /// Mark the field as encrypted: a remote fetch for it requests
    /// decryption.
    pub const fn encrypted(self) -> Self {
        Self {
            field: self.field,
            env_key: self.env_key,
            encrypted: true,
        }
    }

    /// The serialized name of the record field this descriptor resolves.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The base environment variable read for this field.
    pub const fn env_key(&self) -> &'static str {
        self.env_key
    }

    /// Whether a remote fetch for this field requests decryption.
    pub const fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// The derived environment variable that opts this field into remote
    /// resolution. Its value, when non-empty, is the remote parameter name.
    pub fn remote_key(&self) -> String {
        format!("{}{}", self.env_key, REMOTE_KEY_SUFFIX)
    }
}

/// A configuration record whose string fields can be resolved from the
/// environment and, optionally, a remote parameter store.
///
/// The serde bounds are what make the record inspectable and writable
/// without runtime reflection: the resolver serializes the record, mutates
/// the serialized image and deserializes it back. Record types must
/// round-trip faithfully through serde; fields hidden from serialization
/// (e.g. `#[serde(skip)]`) cannot be declared in [`FIELDS`](Self::FIELDS)
/// and are reset to their defaults by the round trip.
pub trait Resolvable: Serialize + DeserializeOwned {
    /// Resolvable fields in declaration order.
    ///
    /// Order matters: resolution is not atomic, so a remote failure leaves
    /// every field earlier in this list mutated and every later field
    /// untouched.
    const FIELDS: &'static [FieldDescriptor];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_key_appends_suffix() {
        let descriptor = FieldDescriptor::new("username", "SERVICE_USER");
        assert_eq!(descriptor.remote_key(), "SERVICE_USER_SSM");
    }

    #[test]
    fn test_encrypted_marker_only_changes_flag() {
        let plain = FieldDescriptor::new("password", "SERVICE_PASSWORD");
        let encrypted = plain.encrypted();

        assert!(!plain.is_encrypted());
        assert!(encrypted.is_encrypted());
        assert_eq!(encrypted.field(), "password");
        assert_eq!(encrypted.env_key(), "SERVICE_PASSWORD");
    }
}
