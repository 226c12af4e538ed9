use crate::error::CryptoError;

/// Fill a fixed-size array from the OS random source.
///
/// In the browser this is `crypto.getRandomValues`. A missing source is
/// reported as [`CryptoError::RngFailed`].
pub fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        tracing::warn!(error = %e, "OS random source unavailable");
        CryptoError::RngFailed(e.to_string())
    })?;
    Ok(bytes)
}
