//! Best-effort token decoding.

use serde::Serialize;
use serde_json::Value;
use toolbelt_crypto::base64url_decode;

use crate::error::TokenError;

/// Decoded contents of a header or payload segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SegmentContent {
    /// Valid base64url carrying valid JSON.
    Json(Value),
    /// Valid base64url whose bytes are not JSON (lossy UTF-8).
    Text(String),
    /// Not base64url at all.
    Undecodable,
}

impl SegmentContent {
    fn from_segment(segment: &str) -> Self {
        match base64url_decode(segment) {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => SegmentContent::Json(value),
                Err(_) => SegmentContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
            },
            Err(_) => SegmentContent::Undecodable,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            SegmentContent::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Two-space indented JSON, or the raw text when the segment isn't JSON.
    pub fn pretty(&self) -> String {
        match self {
            SegmentContent::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            SegmentContent::Text(text) => text.clone(),
            SegmentContent::Undecodable => String::new(),
        }
    }
}

/// A token split into its parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedToken {
    pub header: SegmentContent,
    pub payload: SegmentContent,
    /// Raw third segment; empty when absent.
    pub signature: String,
    /// The exact `header.payload` text the signature covers.
    pub signing_input: String,
}

impl DecodedToken {
    /// The `alg` the header declares, if it is a string.
    pub fn algorithm(&self) -> Option<&str> {
        self.header.as_json()?.get("alg")?.as_str()
    }
}

/// Split and decode a token.
///
/// The token must have two or three dot-separated segments. Header and
/// payload decode independently, and a segment that isn't JSON is kept as
/// text instead of failing the whole decode, so malformed tokens can still be
/// inspected.
pub fn decode(token: &str) -> Result<DecodedToken, TokenError> {
    let token = token.trim();
    let segments: Vec<&str> = token.split('.').collect();
    if !(2..=3).contains(&segments.len()) {
        return Err(TokenError::InvalidStructure {
            segments: segments.len(),
        });
    }

    let (header_b64, payload_b64) = (segments[0], segments[1]);
    Ok(DecodedToken {
        header: SegmentContent::from_segment(header_b64),
        payload: SegmentContent::from_segment(payload_b64),
        signature: segments.get(2).copied().unwrap_or_default().to_string(),
        signing_input: format!("{}.{}", header_b64, payload_b64),
    })
}
