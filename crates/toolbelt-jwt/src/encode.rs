//! Token construction: `b64(header).b64(payload).b64(signature)`.

use serde_json::{Map, Value};
use toolbelt_crypto::{base64url_encode, hmac_sign, CryptoError};

use crate::algorithm::Algorithm;
use crate::error::TokenError;

/// Encode a token from header and payload JSON text.
///
/// Both inputs are parsed before anything is encoded, each with its own
/// error. See [`encode_value`] for the header rewriting and signing rules.
pub fn encode(
    header_json: &str,
    payload_json: &str,
    algorithm: Algorithm,
    secret: &str,
) -> Result<String, TokenError> {
    let header: Value = serde_json::from_str(header_json)
        .map_err(|e| TokenError::InvalidHeaderJson(e.to_string()))?;
    let payload: Value = serde_json::from_str(payload_json)
        .map_err(|e| TokenError::InvalidPayloadJson(e.to_string()))?;
    encode_value(&header, &payload, algorithm, secret)
}

/// Encode a token from parsed header and payload objects.
///
/// The header's `alg` is replaced by `algorithm`, and `typ` is set to `"JWT"`
/// when it is missing or falsy. Key order is kept as given. `alg: none`
/// yields an empty third segment; the HS* algorithms require a non-empty
/// secret and sign `b64(header) + "." + b64(payload)`.
///
/// Integral floats are written as integers (`1.0` as `1`, `1e3` as `1000`)
/// so the segments match what a browser's `JSON.stringify` produces.
pub fn encode_value(
    header: &Value,
    payload: &Value,
    algorithm: Algorithm,
    secret: &str,
) -> Result<String, TokenError> {
    let mut header: Map<String, Value> =
        header.as_object().cloned().ok_or(TokenError::HeaderNotObject)?;
    let mut payload: Map<String, Value> =
        payload.as_object().cloned().ok_or(TokenError::PayloadNotObject)?;

    header.insert("alg".to_string(), Value::from(algorithm.as_str()));
    if header.get("typ").map_or(true, is_falsy) {
        header.insert("typ".to_string(), Value::from("JWT"));
    }
    header.values_mut().for_each(normalize_numbers);
    payload.values_mut().for_each(normalize_numbers);

    let header_b64 = base64url_encode(serde_json::to_string(&header)?.as_bytes());
    let payload_b64 = base64url_encode(serde_json::to_string(&payload)?.as_bytes());
    let signing_input = format!("{}.{}", header_b64, payload_b64);

    let signature_b64 = match algorithm.hmac_hash() {
        Some(hash) => {
            let tag = hmac_sign(hash, secret.as_bytes(), signing_input.as_bytes()).map_err(
                |e| match e {
                    CryptoError::InvalidKey(_) => TokenError::MissingSecret,
                    other => TokenError::Crypto(other),
                },
            )?;
            base64url_encode(&tag)
        }
        None => String::new(),
    };

    tracing::debug!(alg = %algorithm, "encoded token");
    Ok(format!("{}.{}", signing_input, signature_b64))
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrite integral floats as integers, recursively.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                    *value = Value::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// JavaScript truthiness, for the `typ || "JWT"` default.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
