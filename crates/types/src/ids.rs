//! Newtype wrapper for warrant identifiers.
//!
//! Identifiers are opaque strings issued upstream. Only a short, uppercased
//! prefix is ever printed on a document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Number of characters of the identifier printed on documents.
pub const SHORT_REF_LEN: usize = 8;

/// An opaque warrant identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WarrantId(Arc<str>);

impl WarrantId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters of the identifier, uppercased.
    pub fn short_ref(&self) -> String {
        self.0
            .chars()
            .take(SHORT_REF_LEN)
            .collect::<String>()
            .to_uppercase()
    }
}

impl From<String> for WarrantId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for WarrantId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for WarrantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WarrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for WarrantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WarrantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(WarrantId::from(s))
    }
}
