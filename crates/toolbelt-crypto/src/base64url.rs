use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::CryptoError;

/// Base64url encode bytes without padding.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(data)
}

/// Base64url decode a string to bytes.
///
/// Trailing `=` padding is tolerated so that segments produced by padded
/// encoders still decode. Decoding is canonical: a final character whose
/// unused low bits are not zero (`e31` rather than `e30`) is rejected,
/// where a browser's `atob` silently drops those bits.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>, CryptoError> {
    Base64UrlUnpadded::decode_vec(s.trim_end_matches('='))
        .map_err(|e| CryptoError::InvalidBase64(e.to_string()))
}
