//! # Model Identifiers
//!
//! Newtype for model identifiers, the primary addressing primitive of the
//! registry. Identifiers are human-assigned slugs maintained in the data
//! file (e.g., `"mistral-7b"`, `"llama-3.1"`).
//!
//! ## Validation
//!
//! [`ModelId`] is validated to be non-empty at construction time;
//! surrounding whitespace is trimmed. Uniqueness across a registry is
//! enforced by the loader, not here.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for ModelId ---------------------------------------

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A model identifier slug.
///
/// # Validation
///
/// Must be a non-empty string after trimming. No further format
/// restrictions are imposed because upstream id conventions vary across
/// registry generations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidModelId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidModelId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
