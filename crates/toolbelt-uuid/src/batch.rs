//! Batch generation driven by the widget's options.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::UuidError;
use crate::format::UuidFormat;
use crate::generate::{derive_v5, generate_v4, validate_name};
use crate::namespace::{parse_namespace, NamespacePreset};

/// Largest batch a single request may produce.
pub const MAX_BATCH: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    #[default]
    V4,
    V5,
}

/// Options for [`generate_batch`].
///
/// Deserialised from the UI with camelCase keys. Missing fields take the
/// widget's defaults: one v4 UUID, hyphenated lowercase, and for v5 the name
/// `example.com` in the DNS namespace. `count` comes from a number input and
/// may be fractional or negative; it is floored and clamped to at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UuidOptions {
    pub version: UuidVersion,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u32,
    pub name: String,
    pub namespace: String,
    pub hyphens: bool,
    pub uppercase: bool,
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            version: UuidVersion::V4,
            count: 1,
            name: "example.com".to_string(),
            namespace: NamespacePreset::Dns.uuid().to_string(),
            hyphens: true,
            uppercase: false,
        }
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(1);
    }
    Ok(raw.floor().clamp(1.0, MAX_BATCH as f64) as u32)
}

impl UuidOptions {
    /// `count` clamped to `1..=MAX_BATCH`.
    pub fn effective_count(&self) -> usize {
        self.count.clamp(1, MAX_BATCH) as usize
    }

    pub fn format(&self) -> UuidFormat {
        UuidFormat {
            hyphens: self.hyphens,
            uppercase: self.uppercase,
        }
    }
}

/// Generate `options.count` formatted UUIDs.
///
/// v5 inputs are validated once before anything is generated; with fixed
/// inputs every v5 entry in the batch is the same UUID.
pub fn generate_batch(options: &UuidOptions) -> Result<Vec<String>, UuidError> {
    let count = options.effective_count();
    let format = options.format();

    let ids: Vec<Uuid> = match options.version {
        UuidVersion::V4 => (0..count)
            .map(|_| generate_v4())
            .collect::<Result<_, _>>()?,
        UuidVersion::V5 => {
            validate_name(&options.name)?;
            let namespace = parse_namespace(&options.namespace)?;
            (0..count)
                .map(|_| derive_v5(&options.name, &namespace))
                .collect()
        }
    };

    tracing::debug!(version = ?options.version, count, "generated uuid batch");
    Ok(ids.iter().map(|id| format.format(id)).collect())
}
