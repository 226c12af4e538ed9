//! Text handed to the clipboard and file-download sinks.
//!
//! The host performs the side effect; this module only shapes the text.

use crate::error::to_js_validation_error;
use wasm_bindgen::prelude::*;

/// MIME type of downloaded results.
pub const EXPORT_MIME: &str = "text/plain";

/// One result per line.
pub fn export_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// `<prefix>-<timestamp_ms>.txt`, e.g. `uuids-1700000000000.txt`.
pub fn export_filename(prefix: &str, timestamp_ms: u64) -> String {
    format!("{}-{}.txt", prefix, timestamp_ms)
}

#[wasm_bindgen(js_name = "exportMime")]
pub fn export_mime() -> String {
    EXPORT_MIME.to_string()
}

#[wasm_bindgen(js_name = "exportText")]
pub fn wasm_export_text(lines: JsValue) -> Result<String, JsValue> {
    let lines: Vec<String> = serde_wasm_bindgen::from_value(lines)
        .map_err(|e| to_js_validation_error("invalid_lines", e))?;
    Ok(export_text(&lines))
}

#[wasm_bindgen(js_name = "exportFilename")]
pub fn wasm_export_filename(prefix: &str, timestamp_ms: Option<f64>) -> String {
    let timestamp_ms = timestamp_ms.unwrap_or_else(js_sys::Date::now);
    export_filename(prefix, timestamp_ms.max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_newlines() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(export_text(&lines), "a\nb\nc");
        assert_eq!(export_text(&[]), "");
    }

    #[test]
    fn mime_is_plain_text() {
        assert_eq!(export_mime(), "text/plain");
    }

    #[test]
    fn filename_shape() {
        assert_eq!(export_filename("uuids", 1700000000000), "uuids-1700000000000.txt");
        assert_eq!(export_filename("jwt", 0), "jwt-0.txt");
    }
}
