//! WASM bindings for toolbelt-uuid.

use crate::error::{to_js_coded_error, to_js_value};
use serde::Serialize;
use toolbelt_uuid::{
    generate_batch, generate_v4, generate_v5, parse_uuid, NamespacePreset, UuidError, UuidFormat,
    UuidOptions,
};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct PresetEntry {
    name: &'static str,
    uuid: String,
}

#[wasm_bindgen(js_name = "generateUuidV4")]
pub fn wasm_generate_uuid_v4() -> Result<String, JsValue> {
    generate_v4()
        .map(|id| id.to_string())
        .map_err(to_js_coded_error)
}

#[wasm_bindgen(js_name = "generateUuidV5")]
pub fn wasm_generate_uuid_v5(name: &str, namespace: &str) -> Result<String, JsValue> {
    generate_v5(name, namespace)
        .map(|id| id.to_string())
        .map_err(to_js_coded_error)
}

/// Generate a formatted batch. `options` is a partial `UuidOptions` object;
/// `undefined` or `null` means all defaults.
#[wasm_bindgen(js_name = "generateUuids")]
pub fn wasm_generate_uuids(options: JsValue) -> Result<JsValue, JsValue> {
    let options: UuidOptions = if options.is_undefined() || options.is_null() {
        UuidOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| to_js_coded_error(UuidError::InvalidOptions(e.to_string())))?
    };
    let ids = generate_batch(&options).map_err(to_js_coded_error)?;
    to_js_value(&ids)
}

#[wasm_bindgen(js_name = "uuidNamespacePresets")]
pub fn wasm_uuid_namespace_presets() -> Result<JsValue, JsValue> {
    let presets: Vec<PresetEntry> = NamespacePreset::ALL
        .iter()
        .map(|preset| PresetEntry {
            name: preset.as_str(),
            uuid: preset.uuid().to_string(),
        })
        .collect();
    to_js_value(&presets)
}

/// UUID of a namespace preset by name (`dns`, `url`, `oid`, `x500`).
pub fn preset_uuid(name: &str) -> Result<String, UuidError> {
    let preset: NamespacePreset = name.parse()?;
    Ok(preset.uuid().to_string())
}

#[wasm_bindgen(js_name = "uuidNamespacePreset")]
pub fn wasm_uuid_namespace_preset(name: &str) -> Result<String, JsValue> {
    preset_uuid(name).map_err(to_js_coded_error)
}

/// Re-format an existing UUID.
pub fn format_uuid(value: &str, hyphens: bool, uppercase: bool) -> Result<String, UuidError> {
    let id = parse_uuid(value)?;
    Ok(UuidFormat { hyphens, uppercase }.format(&id))
}

#[wasm_bindgen(js_name = "formatUuid")]
pub fn wasm_format_uuid(value: &str, hyphens: bool, uppercase: bool) -> Result<String, JsValue> {
    format_uuid(value, hyphens, uppercase).map_err(to_js_coded_error)
}
