use uuid::Uuid;

use crate::error::UuidError;

/// Display options applied after generation.
///
/// Formatting never changes which UUID was generated, only how it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidFormat {
    pub hyphens: bool,
    pub uppercase: bool,
}

impl Default for UuidFormat {
    fn default() -> Self {
        Self {
            hyphens: true,
            uppercase: false,
        }
    }
}

impl UuidFormat {
    pub fn format(&self, id: &Uuid) -> String {
        let mut buf = Uuid::encode_buffer();
        let s: &str = match (self.hyphens, self.uppercase) {
            (true, false) => id.hyphenated().encode_lower(&mut buf),
            (true, true) => id.hyphenated().encode_upper(&mut buf),
            (false, false) => id.simple().encode_lower(&mut buf),
            (false, true) => id.simple().encode_upper(&mut buf),
        };
        s.to_string()
    }
}

/// Parse a UUID for re-formatting.
///
/// Accepts the forms [`Uuid::try_parse`] does (hyphenated, simple, braced,
/// URN) after trimming surrounding whitespace.
pub fn parse_uuid(input: &str) -> Result<Uuid, UuidError> {
    Uuid::try_parse(input.trim()).map_err(|e| UuidError::InvalidUuid(e.to_string()))
}
