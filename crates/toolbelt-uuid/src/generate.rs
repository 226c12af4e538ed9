//! RFC4122 v4 and v5 generation.
//!
//! Both versions are built from raw bytes: 16 random bytes for v4, the first
//! 16 bytes of `SHA-1(namespace || name)` for v5. [`uuid::Builder`] stamps the
//! version nibble (byte 6) and the `10` variant bits (byte 8).

use toolbelt_crypto::{random_bytes, sha1_digest};
use uuid::{Builder, Uuid};

use crate::error::UuidError;
use crate::namespace::parse_namespace;

/// Generate a random (version 4) UUID.
pub fn generate_v4() -> Result<Uuid, UuidError> {
    let bytes: [u8; 16] = random_bytes()?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}

/// Generate a name-based (version 5) UUID.
///
/// `namespace` is parsed leniently (see [`parse_namespace`]). The same
/// `(name, namespace)` pair always yields the same UUID.
pub fn generate_v5(name: &str, namespace: &str) -> Result<Uuid, UuidError> {
    validate_name(name)?;
    let namespace = parse_namespace(namespace)?;
    Ok(derive_v5(name, &namespace))
}

/// Generate a v5 UUID from an already parsed namespace.
pub fn generate_v5_with(name: &str, namespace: &Uuid) -> Result<Uuid, UuidError> {
    validate_name(name)?;
    Ok(derive_v5(name, namespace))
}

/// Names must contain something other than whitespace. The name itself is
/// hashed untrimmed.
pub(crate) fn validate_name(name: &str) -> Result<(), UuidError> {
    if name.trim().is_empty() {
        return Err(UuidError::EmptyName);
    }
    Ok(())
}

pub(crate) fn derive_v5(name: &str, namespace: &Uuid) -> Uuid {
    let digest = sha1_digest(&[namespace.as_bytes(), name.as_bytes()]);
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Builder::from_sha1_bytes(bytes).into_uuid()
}
