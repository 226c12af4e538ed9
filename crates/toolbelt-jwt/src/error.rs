use thiserror::Error;
use toolbelt_crypto::{CryptoError, ErrorKind};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid JSON in header: {0}")]
    InvalidHeaderJson(String),

    #[error("Invalid JSON in payload: {0}")]
    InvalidPayloadJson(String),

    #[error("Header must be a JSON object")]
    HeaderNotObject,

    #[error("Payload must be a JSON object")]
    PayloadNotObject,

    #[error("Secret is required for HMAC signing")]
    MissingSecret,

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token structure: expected 2 or 3 segments, got {segments}")]
    InvalidStructure { segments: usize },

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::Crypto(e) => e.kind(),
            _ => ErrorKind::Validation,
        }
    }

    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::InvalidHeaderJson(_) => "invalid_header_json",
            TokenError::InvalidPayloadJson(_) => "invalid_payload_json",
            TokenError::HeaderNotObject => "header_not_object",
            TokenError::PayloadNotObject => "payload_not_object",
            TokenError::MissingSecret => "missing_secret",
            TokenError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            TokenError::InvalidStructure { .. } => "invalid_structure",
            TokenError::Crypto(e) => e.code(),
            TokenError::Json(_) => "json",
        }
    }
}
