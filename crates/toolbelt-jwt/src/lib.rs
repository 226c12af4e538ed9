//! JWT tool core.
//!
//! Builds, decodes and verifies compact JWS tokens signed with `none`,
//! `HS256`, `HS384` or `HS512`:
//!
//! - `encode`: header/payload JSON → `b64(header).b64(payload).b64(mac)`
//! - `decode`: best-effort split, partial success allowed
//! - `verify`: constant-time HMAC check over the token's own signing input,
//!   with distinct outcomes for unsigned and unsupported tokens
//! - `inspect`: decode, then verify when a secret is available

mod algorithm;
mod decode;
mod encode;
mod error;
mod inspect;
mod template;
mod verify;

pub use algorithm::Algorithm;
pub use decode::{decode, DecodedToken, SegmentContent};
pub use encode::{encode, encode_value};
pub use error::TokenError;
pub use inspect::{inspect, Inspection};
pub use template::{default_header, default_payload};
pub use toolbelt_crypto::ErrorKind;
pub use verify::{verify, verify_decoded, Verification};
