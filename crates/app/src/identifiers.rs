//! Resource identifier policy.
//!
//! Identifiers are UUID-v4 shaped strings. The check performed here is a shape
//! check only: length, the version nibble slot, and the variant nibble slot. It
//! does not verify the remaining characters.

use uuid::Uuid;

/// Length of a hyphenated UUID string.
pub const IDENTIFIER_LENGTH: usize = 36;

const VERSION_OFFSET: usize = 14;
const VARIANT_OFFSET: usize = 19;

/// Outcome of assigning an identifier to a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// The caller supplied a well-shaped identifier; it still has to be checked
    /// against storage before use.
    Supplied(String),

    /// A fresh identifier generated because none usable was supplied.
    Generated(String),
}

impl Identifier {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Supplied(id) | Self::Generated(id) => id,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Supplied(id) | Self::Generated(id) => id,
        }
    }
}

/// Returns `true` when `id` has the shape of a lowercase UUID-v4 string.
#[must_use]
pub fn validate(id: &str) -> bool {
    let bytes = id.as_bytes();

    if bytes.len() != IDENTIFIER_LENGTH {
        return false;
    }

    matches!(bytes.get(VERSION_OFFSET), Some(b'0'..=b'9' | b'a'..=b'f'))
        && matches!(bytes.get(VARIANT_OFFSET), Some(b'8' | b'9' | b'a' | b'b'))
}

/// Generates a new random UUID-v4 identifier.
#[must_use]
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

/// Keeps a well-shaped supplied identifier, otherwise generates one.
#[must_use]
pub fn assign(supplied: Option<&str>) -> Identifier {
    match supplied {
        Some(id) if validate(id) => Identifier::Supplied(id.to_owned()),
        Some(_) | None => Identifier::Generated(generate()),
    }
}
