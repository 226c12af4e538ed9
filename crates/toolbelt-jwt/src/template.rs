//! Starting header and payload shown by the token tool.

use serde_json::{json, Value};

pub fn default_header() -> Value {
    json!({"alg": "HS256", "typ": "JWT"})
}

/// Sample claims with `iat` set to `issued_at` (seconds since UNIX epoch).
///
/// Callers supply the clock (`js_sys::Date::now()` in WASM, `SystemTime` on
/// native).
pub fn default_payload(issued_at: u64) -> Value {
    json!({
        "sub": "1234567890",
        "name": "John Doe",
        "iat": issued_at,
    })
}
