use thiserror::Error;

/// Whether a failure came from user input or from the runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Capability,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Capability => "capability",
        }
    }
}

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid base64url: {0}")]
    InvalidBase64(String),

    #[error("Invalid HMAC key: {0}")]
    InvalidKey(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}

impl CryptoError {
    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::InvalidBase64(_) => "invalid_base64",
            CryptoError::InvalidKey(_) => "invalid_key",
            CryptoError::RngFailed(_) => "rng_unavailable",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::RngFailed(_) => ErrorKind::Capability,
            CryptoError::InvalidBase64(_) | CryptoError::InvalidKey(_) => ErrorKind::Validation,
        }
    }
}
