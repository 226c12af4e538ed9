//! HMAC-SHA-2 signing and constant-time verification.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::CryptoError;

/// Hash function backing an HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmacHash {
    Sha256,
    Sha384,
    Sha512,
}

impl HmacHash {
    /// MAC length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HmacHash::Sha256 => 32,
            HmacHash::Sha384 => 48,
            HmacHash::Sha512 => 64,
        }
    }
}

/// Compute `HMAC(key, message)` with the given hash.
///
/// An empty key is rejected with [`CryptoError::InvalidKey`].
pub fn hmac_sign(hash: HmacHash, key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if key.is_empty() {
        return Err(CryptoError::InvalidKey("key is empty".to_string()));
    }
    match hash {
        HmacHash::Sha256 => sign_with::<Hmac<Sha256>>(key, message),
        HmacHash::Sha384 => sign_with::<Hmac<Sha384>>(key, message),
        HmacHash::Sha512 => sign_with::<Hmac<Sha512>>(key, message),
    }
}

/// Verify an HMAC tag in constant time.
///
/// # Returns
/// true if valid, false otherwise (never errors on invalid tag). An empty
/// key never verifies.
pub fn hmac_verify(hash: HmacHash, key: &[u8], message: &[u8], tag: &[u8]) -> bool {
    if key.is_empty() {
        return false;
    }
    match hash {
        HmacHash::Sha256 => verify_with::<Hmac<Sha256>>(key, message, tag),
        HmacHash::Sha384 => verify_with::<Hmac<Sha384>>(key, message, tag),
        HmacHash::Sha512 => verify_with::<Hmac<Sha512>>(key, message, tag),
    }
}

fn sign_with<M>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    M: Mac + KeyInit,
{
    let mut mac =
        <M as KeyInit>::new_from_slice(key).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn verify_with<M>(key: &[u8], message: &[u8], tag: &[u8]) -> bool
where
    M: Mac + KeyInit,
{
    match <M as KeyInit>::new_from_slice(key) {
        Ok(mut mac) => {
            mac.update(message);
            mac.verify_slice(tag).is_ok()
        }
        Err(_) => false,
    }
}
