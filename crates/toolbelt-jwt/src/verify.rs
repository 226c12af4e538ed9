//! Signature verification.
//!
//! The MAC is recomputed over the token's own `header.payload` text, never
//! over re-serialised JSON: key order and whitespace in the original bytes
//! must survive untouched.

use serde::Serialize;
use serde_json::Value;
use toolbelt_crypto::{base64url_decode, hmac_verify};

use crate::algorithm::Algorithm;
use crate::decode::{decode, DecodedToken};

/// Outcome of checking a token's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "algorithm", rename_all = "lowercase")]
pub enum Verification {
    /// The signature matches.
    Valid,
    /// The signature does not match, is missing, or the token is malformed.
    Invalid,
    /// `alg` is `none` or absent: there is nothing to check.
    Unsigned,
    /// `alg` names an algorithm this tool cannot check.
    Unsupported(String),
}

impl Verification {
    /// `Some(true)` / `Some(false)` for a checked signature, `None` when no
    /// check was possible.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Verification::Valid => Some(true),
            Verification::Invalid => Some(false),
            Verification::Unsigned | Verification::Unsupported(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

/// Verify a token against a shared secret. Never fails; see [`Verification`].
pub fn verify(token: &str, secret: &str) -> Verification {
    match decode(token) {
        Ok(decoded) => verify_decoded(&decoded, secret),
        Err(e) => {
            tracing::debug!(error = %e, "token failed structural check");
            Verification::Invalid
        }
    }
}

/// Verify an already decoded token.
pub fn verify_decoded(decoded: &DecodedToken, secret: &str) -> Verification {
    let Some(header) = decoded.header.as_json() else {
        return Verification::Invalid;
    };

    let alg = match header.get("alg") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Verification::Unsigned,
        Some(Value::String(alg)) if alg.is_empty() => return Verification::Unsigned,
        Some(Value::String(alg)) => alg.as_str(),
        Some(other) => return Verification::Unsupported(other.to_string()),
    };

    let Ok(algorithm) = alg.parse::<Algorithm>() else {
        return Verification::Unsupported(alg.to_string());
    };
    let Some(hash) = algorithm.hmac_hash() else {
        return Verification::Unsigned;
    };

    if secret.is_empty() {
        return Verification::Invalid;
    }
    let signature = match base64url_decode(&decoded.signature) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        _ => return Verification::Invalid,
    };

    let outcome = if hmac_verify(
        hash,
        secret.as_bytes(),
        decoded.signing_input.as_bytes(),
        &signature,
    ) {
        Verification::Valid
    } else {
        Verification::Invalid
    };
    tracing::debug!(alg = %algorithm, valid = outcome.is_valid(), "verified token");
    outcome
}
