//! Well-known v5 namespaces and lenient namespace parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UuidError;

/// RFC4122 Appendix C namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NamespacePreset {
    Dns,
    Url,
    Oid,
    X500,
}

impl NamespacePreset {
    pub const ALL: [NamespacePreset; 4] = [
        NamespacePreset::Dns,
        NamespacePreset::Url,
        NamespacePreset::Oid,
        NamespacePreset::X500,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamespacePreset::Dns => "DNS",
            NamespacePreset::Url => "URL",
            NamespacePreset::Oid => "OID",
            NamespacePreset::X500 => "X500",
        }
    }

    pub const fn uuid(&self) -> Uuid {
        match self {
            NamespacePreset::Dns => Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8),
            NamespacePreset::Url => Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8),
            NamespacePreset::Oid => Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8),
            NamespacePreset::X500 => Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8),
        }
    }
}

impl fmt::Display for NamespacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamespacePreset {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamespacePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UuidError::UnknownPreset(s.to_string()))
    }
}

/// Parse a namespace UUID.
///
/// Hyphens and braces are ignored wherever they appear and hex digits are
/// case-insensitive, so `{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}` and
/// `6ba7b8109dad11d180b400c04fd430c8` are the same namespace. What remains
/// must be exactly 32 hex digits.
pub fn parse_namespace(input: &str) -> Result<Uuid, UuidError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '-'))
        .collect();

    if cleaned.len() != 32 {
        return Err(UuidError::InvalidNamespace(format!(
            "expected 32 hex digits, got {}",
            cleaned.chars().count()
        )));
    }

    let mut bytes = [0u8; 16];
    hex::decode_to_slice(&cleaned, &mut bytes)
        .map_err(|e| UuidError::InvalidNamespace(e.to_string()))?;
    Ok(Uuid::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_rfc4122_constants() {
        assert_eq!(NamespacePreset::Dns.uuid(), Uuid::NAMESPACE_DNS);
        assert_eq!(NamespacePreset::Url.uuid(), Uuid::NAMESPACE_URL);
        assert_eq!(NamespacePreset::Oid.uuid(), Uuid::NAMESPACE_OID);
        assert_eq!(NamespacePreset::X500.uuid(), Uuid::NAMESPACE_X500);
    }

    #[test]
    fn preset_from_str_is_case_insensitive() {
        assert_eq!("dns".parse::<NamespacePreset>().unwrap(), NamespacePreset::Dns);
        assert_eq!("X500".parse::<NamespacePreset>().unwrap(), NamespacePreset::X500);
        assert!(matches!(
            "ldap".parse::<NamespacePreset>(),
            Err(UuidError::UnknownPreset(_))
        ));
    }

    #[test]
    fn parses_canonical_form() {
        let ns = parse_namespace("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        assert_eq!(ns, Uuid::NAMESPACE_DNS);
    }

    #[test]
    fn parses_braced_upper_and_bare_forms() {
        for input in [
            "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6ba7b810-9dad11d1-80b4-00c04fd430c8",
        ] {
            assert_eq!(parse_namespace(input).unwrap(), Uuid::NAMESPACE_DNS, "{input}");
        }
    }

    #[test]
    fn rejects_wrong_length() {
        let err = parse_namespace("not-a-uuid").unwrap_err();
        assert!(matches!(err, UuidError::InvalidNamespace(_)));
        assert!(err.to_string().contains("32 hex digits"));

        assert!(parse_namespace("").is_err());
        assert!(parse_namespace("6ba7b810-9dad-11d1-80b4-00c04fd430c8aa").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let err = parse_namespace("zba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap_err();
        assert!(matches!(err, UuidError::InvalidNamespace(_)));
    }

    #[test]
    fn rejects_multibyte_characters_of_matching_byte_length() {
        // 30 hex digits plus one two-byte character is 32 bytes but 31 chars.
        let input = format!("{}é", "a".repeat(30));
        assert!(parse_namespace(&input).is_err());
    }
}
