use std::fmt;

use sha2::{Digest, Sha256};

use crate::ModelError;

/// A stable row identifier.
///
/// Keys are opaque strings assigned when a row is first created and never
/// change afterwards; they are the addressing fallback when a row has no
/// name. End markers use the `/`-prefixed key of their begin marker.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RowKey(String);

impl RowKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRowKey(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive a deterministic key from a seed string.
    ///
    /// Uses the first 8 bytes of a SHA-256 digest rendered as lowercase hex.
    /// Synthesized rows (cascade import) get reproducible keys this way.
    pub fn derived(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        Self(hex::encode(&digest[..8]))
    }

    /// The key of the end marker matching a begin marker with this key.
    pub fn end_marker(&self) -> Self {
        Self(format!("/{}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ChoiceKey(String);

impl ChoiceKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidChoiceKey(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive a deterministic key from a seed string.
    pub fn derived(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        Self(hex::encode(&digest[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a shared choice list.
///
/// Select-type questions reference exactly one list; many choices share one.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ListName(String);

impl ListName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidListName(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
