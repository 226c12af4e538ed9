//! WASM bindings for the toolbelt widgets.
//!
//! Exposes the UUID generator and JWT tool cores via wasm-bindgen for
//! consumption by the TypeScript UI. Validation and capability errors are
//! thrown as `{ kind, code, message }` objects.

pub mod error;
pub mod export;
pub mod jwt;
pub mod uuid;

use wasm_bindgen::prelude::*;

/// Route Rust panics to the browser console. Safe to call more than once.
#[wasm_bindgen(js_name = "init")]
pub fn init() {
    console_error_panic_hook::set_once();
}
