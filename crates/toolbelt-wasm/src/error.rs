//! Error conversion for WASM boundary.

use serde::Serialize;
use toolbelt_jwt::TokenError;
use toolbelt_uuid::{ErrorKind, UuidError};
use wasm_bindgen::JsValue;

/// Convert any error with Display into a JsValue error.
pub fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize a Rust value to a JS value, using plain objects instead of Maps.
///
/// `serde_wasm_bindgen::to_value` serializes Rust maps/objects as JS `Map` by default,
/// which breaks property access (e.g. `header.alg` returns `undefined` on a Map).
pub fn to_js_value(value: &impl Serialize) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(to_js_error)
}

/// Errors that carry a machine-readable code and a validation/capability kind.
pub trait CodedError: std::fmt::Display {
    fn kind(&self) -> ErrorKind;
    fn code(&self) -> &'static str;
}

impl CodedError for UuidError {
    fn kind(&self) -> ErrorKind {
        UuidError::kind(self)
    }

    fn code(&self) -> &'static str {
        UuidError::code(self)
    }
}

impl CodedError for TokenError {
    fn kind(&self) -> ErrorKind {
        TokenError::kind(self)
    }

    fn code(&self) -> &'static str {
        TokenError::code(self)
    }
}

/// Shape of errors thrown to JS: `{ kind, code, message }`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub kind: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorPayload {
    pub fn from_error(e: &impl CodedError) -> Self {
        Self {
            kind: e.kind().as_str(),
            code: e.code(),
            message: e.to_string(),
        }
    }

    /// Bad input rejected at the boundary, before reaching a core.
    pub fn validation(code: &'static str, e: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Validation.as_str(),
            code,
            message: e.to_string(),
        }
    }
}

/// Convert a coded error into a plain JS object so the UI can tell
/// "unsupported runtime" apart from "bad input".
pub fn to_js_coded_error(e: impl CodedError) -> JsValue {
    let payload = ErrorPayload::from_error(&e);
    to_js_value(&payload).unwrap_or_else(|_| to_js_error(&e))
}

/// Throw a boundary validation failure as `{ kind: "validation", code, message }`.
pub fn to_js_validation_error(code: &'static str, e: impl std::fmt::Display) -> JsValue {
    let payload = ErrorPayload::validation(code, &e);
    to_js_value(&payload).unwrap_or_else(|_| to_js_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbelt_jwt::Algorithm;

    #[test]
    fn uuid_validation_payload() {
        let payload = ErrorPayload::from_error(&UuidError::EmptyName);
        assert_eq!(
            payload,
            ErrorPayload {
                kind: "validation",
                code: "empty_name",
                message: "Name is required for v5".to_string(),
            }
        );
    }

    #[test]
    fn boundary_validation_payload() {
        let payload = ErrorPayload::validation("invalid_lines", "expected a sequence");
        assert_eq!(payload.kind, "validation");
        assert_eq!(payload.code, "invalid_lines");
        assert_eq!(payload.message, "expected a sequence");
    }

    #[test]
    fn token_payload_uses_code() {
        let err = "HS999".parse::<Algorithm>().unwrap_err();
        let payload = ErrorPayload::from_error(&err);
        assert_eq!(payload.kind, "validation");
        assert_eq!(payload.code, "unsupported_algorithm");
        assert!(payload.message.contains("HS999"));
    }
}
