//! Platform primitives shared by the toolbelt widgets.
//!
//! - Base64url without padding
//! - SHA-1 for name-based UUIDs
//! - HMAC-SHA-256/384/512 with constant-time verification
//! - OS random bytes

pub mod base64url;
pub mod digest;
pub mod error;
pub mod mac;
pub mod random;

pub use base64url::{base64url_decode, base64url_encode};
pub use digest::{sha1_digest, SHA1_LENGTH};
pub use error::{CryptoError, ErrorKind};
pub use mac::{hmac_sign, hmac_verify, HmacHash};
pub use random::random_bytes;
