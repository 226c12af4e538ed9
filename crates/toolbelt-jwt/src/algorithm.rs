use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toolbelt_crypto::HmacHash;

use crate::error::TokenError;

/// Signing algorithms the token tool can produce and check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "HS256")]
    Hs256,
    #[serde(rename = "HS384")]
    Hs384,
    #[serde(rename = "HS512")]
    Hs512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::None,
        Algorithm::Hs256,
        Algorithm::Hs384,
        Algorithm::Hs512,
    ];

    /// Value of the `alg` header field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
        }
    }

    /// HMAC hash for signed algorithms, `None` for `alg: none`.
    pub fn hmac_hash(&self) -> Option<HmacHash> {
        match self {
            Algorithm::None => None,
            Algorithm::Hs256 => Some(HmacHash::Sha256),
            Algorithm::Hs384 => Some(HmacHash::Sha384),
            Algorithm::Hs512 => Some(HmacHash::Sha512),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    /// Exact, case-sensitive match on the `alg` wire value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| TokenError::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("none".parse::<Algorithm>().unwrap(), Algorithm::None);
        assert_eq!("HS256".parse::<Algorithm>().unwrap(), Algorithm::Hs256);
        assert_eq!("HS384".parse::<Algorithm>().unwrap(), Algorithm::Hs384);
        assert_eq!("HS512".parse::<Algorithm>().unwrap(), Algorithm::Hs512);
    }

    #[test]
    fn rejects_unknown_and_miscased() {
        for alg in ["RS256", "hs256", "None", ""] {
            let err = alg.parse::<Algorithm>().unwrap_err();
            assert!(matches!(err, TokenError::UnsupportedAlgorithm(_)), "{alg}");
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Hs384).unwrap(), "\"HS384\"");
        let alg: Algorithm = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(alg, Algorithm::None);
    }

    #[test]
    fn hash_widths() {
        assert_eq!(Algorithm::None.hmac_hash(), None);
        assert_eq!(Algorithm::Hs512.hmac_hash(), Some(HmacHash::Sha512));
    }
}
