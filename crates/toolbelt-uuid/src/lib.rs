//! UUID generator widget core.
//!
//! - Random (v4) UUIDs from the OS random source
//! - Name-based (v5) UUIDs: SHA-1 over namespace and name, deterministic
//! - RFC4122 namespace presets and lenient namespace parsing
//! - Display formatting (hyphen stripping, upper-casing)
//! - Batch generation from the widget's options

pub mod batch;
pub mod error;
pub mod format;
pub mod generate;
pub mod namespace;

pub use batch::{generate_batch, UuidOptions, UuidVersion, MAX_BATCH};
pub use error::UuidError;
pub use format::{parse_uuid, UuidFormat};
pub use generate::{generate_v4, generate_v5, generate_v5_with};
pub use namespace::{parse_namespace, NamespacePreset};
pub use toolbelt_crypto::ErrorKind;
pub use uuid::Uuid;
