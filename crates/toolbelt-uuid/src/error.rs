use thiserror::Error;
use toolbelt_crypto::{CryptoError, ErrorKind};

#[derive(Debug, Error)]
pub enum UuidError {
    #[error("Name is required for v5")]
    EmptyName,

    #[error("Invalid namespace UUID: {0}")]
    InvalidNamespace(String),

    #[error("Unknown namespace preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Secure random source unavailable: {0}")]
    Capability(#[from] CryptoError),
}

impl UuidError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UuidError::Capability(e) => e.kind(),
            UuidError::EmptyName
            | UuidError::InvalidNamespace(_)
            | UuidError::UnknownPreset(_)
            | UuidError::InvalidUuid(_)
            | UuidError::InvalidOptions(_) => ErrorKind::Validation,
        }
    }

    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            UuidError::EmptyName => "empty_name",
            UuidError::InvalidNamespace(_) => "invalid_namespace",
            UuidError::UnknownPreset(_) => "unknown_preset",
            UuidError::InvalidUuid(_) => "invalid_uuid",
            UuidError::InvalidOptions(_) => "invalid_options",
            UuidError::Capability(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_is_distinguished_from_validation() {
        let err = UuidError::from(CryptoError::RngFailed("no entropy".into()));
        assert_eq!(err.kind(), ErrorKind::Capability);
        assert_eq!(err.code(), "rng_unavailable");

        assert_eq!(UuidError::EmptyName.kind(), ErrorKind::Validation);
        assert_eq!(UuidError::EmptyName.code(), "empty_name");
    }

    #[test]
    fn input_errors_are_validation() {
        for err in [
            UuidError::InvalidUuid("zz".into()),
            UuidError::InvalidOptions("count".into()),
            UuidError::UnknownPreset("ldap".into()),
        ] {
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(UuidError::InvalidUuid("zz".into()).code(), "invalid_uuid");
        assert_eq!(UuidError::InvalidOptions("x".into()).code(), "invalid_options");
    }
}
