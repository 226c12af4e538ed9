use serde::Serialize;

use crate::decode::{decode, DecodedToken};
use crate::error::TokenError;
use crate::verify::{verify_decoded, Verification};

/// A decoded token plus, when a secret was at hand, its verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    #[serde(flatten)]
    pub token: DecodedToken,
    pub verification: Option<Verification>,
}

impl Inspection {
    /// Tri-state result for display: checked valid, checked invalid, or not checked.
    pub fn verified(&self) -> Option<bool> {
        self.verification.as_ref().and_then(Verification::as_bool)
    }
}

/// Decode a pasted token and verify it when possible.
///
/// Verification runs only when `secret` is non-empty and the header declares
/// an algorithm other than `none`.
pub fn inspect(token: &str, secret: Option<&str>) -> Result<Inspection, TokenError> {
    let decoded = decode(token)?;
    let verification = match secret.filter(|s| !s.is_empty()) {
        Some(secret) if declares_signature(&decoded) => Some(verify_decoded(&decoded, secret)),
        _ => None,
    };
    Ok(Inspection {
        token: decoded,
        verification,
    })
}

fn declares_signature(decoded: &DecodedToken) -> bool {
    match decoded.header.as_json().and_then(|h| h.get("alg")) {
        Some(serde_json::Value::String(alg)) => !alg.is_empty() && alg != "none",
        Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) | None => false,
        Some(_) => true,
    }
}
