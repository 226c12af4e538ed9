//! SHA-1 digest used for name-based identifiers.

use sha1::{Digest, Sha1};

/// SHA-1 digest length in bytes.
pub const SHA1_LENGTH: usize = 20;

/// SHA-1 over the concatenation of `parts`, without materialising the
/// concatenated buffer.
pub fn sha1_digest(parts: &[&[u8]]) -> [u8; SHA1_LENGTH] {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; SHA1_LENGTH];
    out.copy_from_slice(&hasher.finalize());
    out
}
