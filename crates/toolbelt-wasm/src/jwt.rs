//! WASM bindings for toolbelt-jwt.

use crate::error::{to_js_coded_error, to_js_value};
use serde::Serialize;
use toolbelt_jwt::{
    default_header, default_payload, encode, inspect, verify, Algorithm, Inspection, TokenError,
};
use wasm_bindgen::prelude::*;
use zeroize::Zeroizing;

/// Decoded token as the UI renders it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenView<'a> {
    #[serde(flatten)]
    inspection: &'a Inspection,
    header_pretty: String,
    payload_pretty: String,
    algorithm: Option<&'a str>,
    /// `true` / `false` / `null`, as the tool has always shown it.
    verified: Option<bool>,
}

impl<'a> TokenView<'a> {
    fn new(inspection: &'a Inspection) -> Self {
        Self {
            header_pretty: inspection.token.header.pretty(),
            payload_pretty: inspection.token.payload.pretty(),
            algorithm: inspection.token.algorithm(),
            verified: inspection.verified(),
            inspection,
        }
    }
}

#[wasm_bindgen(js_name = "jwtAlgorithms")]
pub fn wasm_jwt_algorithms() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::as_str).collect();
    to_js_value(&names)
}

#[wasm_bindgen(js_name = "encodeJwt")]
pub fn wasm_encode_jwt(
    header_json: &str,
    payload_json: &str,
    alg: &str,
    secret: String,
) -> Result<String, JsValue> {
    let secret = Zeroizing::new(secret);
    let algorithm: Algorithm = alg.parse().map_err(to_js_coded_error)?;
    encode(header_json, payload_json, algorithm, &secret).map_err(to_js_coded_error)
}

#[wasm_bindgen(js_name = "decodeJwt")]
pub fn wasm_decode_jwt(token: &str) -> Result<JsValue, JsValue> {
    let inspection = inspect(token, None).map_err(to_js_coded_error)?;
    to_js_value(&TokenView::new(&inspection))
}

/// Returns `true`, `false`, or `null` when there is no signature to check.
#[wasm_bindgen(js_name = "verifyJwt")]
pub fn wasm_verify_jwt(token: &str, secret: String) -> JsValue {
    let secret = Zeroizing::new(secret);
    match verify(token, &secret).as_bool() {
        Some(valid) => JsValue::from_bool(valid),
        None => JsValue::NULL,
    }
}

#[wasm_bindgen(js_name = "inspectJwt")]
pub fn wasm_inspect_jwt(token: &str, secret: Option<String>) -> Result<JsValue, JsValue> {
    let secret = secret.map(Zeroizing::new);
    let inspection = inspect(token, secret.as_deref().map(String::as_str))
        .map_err(to_js_coded_error)?;
    to_js_value(&TokenView::new(&inspection))
}

#[wasm_bindgen(js_name = "defaultJwtHeader")]
pub fn wasm_default_jwt_header() -> Result<String, JsValue> {
    serde_json::to_string_pretty(&default_header())
        .map_err(|e| to_js_coded_error(TokenError::from(e)))
}

/// Sample payload; `issued_at` is seconds since UNIX epoch and defaults to now.
#[wasm_bindgen(js_name = "defaultJwtPayload")]
pub fn wasm_default_jwt_payload(issued_at: Option<f64>) -> Result<String, JsValue> {
    let issued_at = issued_at.unwrap_or_else(|| js_sys::Date::now() / 1000.0);
    serde_json::to_string_pretty(&default_payload(issued_at.max(0.0).floor() as u64))
        .map_err(|e| to_js_coded_error(TokenError::from(e)))
}
