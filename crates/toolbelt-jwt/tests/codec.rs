//! Integration tests for the token codec.

use serde_json::{json, Value};
use toolbelt_jwt::{decode, encode, verify, Algorithm, TokenError, Verification};

// ============================================================================
// Helpers
// ============================================================================

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
const PAYLOAD: &str = r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#;
const SECRET: &str = "test-secret";

const BASE64URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn hs256_token() -> String {
    encode(HEADER, PAYLOAD, Algorithm::Hs256, SECRET).expect("encode")
}

/// Replace the character at `index` with a different base64url character.
fn flip_char(segment: &str, index: usize) -> String {
    let mut chars: Vec<char> = segment.chars().collect();
    chars[index] = BASE64URL_ALPHABET
        .chars()
        .find(|c| *c != chars[index])
        .unwrap();
    chars.into_iter().collect()
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn encode_decode_round_trip() {
    let token = hs256_token();
    let decoded = decode(&token).unwrap();

    let header: Value = serde_json::from_str(HEADER).unwrap();
    let payload: Value = serde_json::from_str(PAYLOAD).unwrap();
    assert_eq!(decoded.header.as_json(), Some(&header));
    assert_eq!(decoded.payload.as_json(), Some(&payload));

    // Key order survives too.
    assert_eq!(decoded.header.as_json().unwrap().to_string(), HEADER);
    assert_eq!(decoded.payload.as_json().unwrap().to_string(), PAYLOAD);

    assert_eq!(verify(&token, SECRET), Verification::Valid);
    assert_eq!(verify(&token, SECRET).as_bool(), Some(true));
}

// ============================================================================
// Tampering
// ============================================================================

#[test]
fn any_payload_character_flip_is_detected() {
    let token = hs256_token();
    let parts: Vec<&str> = token.split('.').collect();
    let payload = parts[1];

    for i in 0..payload.chars().count() {
        let tampered = format!("{}.{}.{}", parts[0], flip_char(payload, i), parts[2]);
        assert_eq!(
            verify(&tampered, SECRET),
            Verification::Invalid,
            "flip at {i} went unnoticed"
        );
    }
}

#[test]
fn header_flip_is_not_valid() {
    let token = hs256_token();
    let parts: Vec<&str> = token.split('.').collect();
    for i in 0..parts[0].chars().count() {
        let tampered = format!("{}.{}.{}", flip_char(parts[0], i), parts[1], parts[2]);
        assert!(!verify(&tampered, SECRET).is_valid(), "flip at {i}");
    }
}

// ============================================================================
// alg: none
// ============================================================================

#[test]
fn none_token_has_empty_signature_and_null_verification() {
    let token = encode(HEADER, PAYLOAD, Algorithm::None, "").unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[2].is_empty());

    let decoded = decode(&token).unwrap();
    assert_eq!(decoded.header.as_json().unwrap()["alg"], json!("none"));

    for secret in ["", "anything", SECRET] {
        assert_eq!(verify(&token, secret), Verification::Unsigned);
        assert_eq!(verify(&token, secret).as_bool(), None);
    }
}

// ============================================================================
// Wrong secret
// ============================================================================

#[test]
fn wrong_secret_is_false() {
    let token = hs256_token();
    for secret in ["test-secreT", "test-secret ", "x", "🔑"] {
        assert_eq!(verify(&token, secret).as_bool(), Some(false), "{secret}");
    }
}

#[test]
fn widths_do_not_cross_verify() {
    let token = encode(HEADER, PAYLOAD, Algorithm::Hs384, SECRET).unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    // Swap in an HS512 signature over the same signing input.
    let other = encode(HEADER, PAYLOAD, Algorithm::Hs512, SECRET).unwrap();
    let other_sig = other.rsplit('.').next().unwrap();
    let forged = format!("{}.{}.{}", parts[0], parts[1], other_sig);
    assert_eq!(verify(&forged, SECRET), Verification::Invalid);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn malformed_tokens_reject_with_structural_error() {
    let err = decode("not.a.token.with.too.many.parts").unwrap_err();
    assert!(matches!(err, TokenError::InvalidStructure { segments: 7 }));
    assert_eq!(err.code(), "invalid_structure");

    let err = decode("single-segment").unwrap_err();
    assert!(matches!(err, TokenError::InvalidStructure { segments: 1 }));
}

#[test]
fn unsupported_algorithm_string_is_rejected() {
    let err = "RS256".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, TokenError::UnsupportedAlgorithm(_)));
}
