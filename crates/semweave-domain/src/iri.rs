//! IRI module - identifiers for entities, properties, and types

use serde::{Deserialize, Serialize};
use std::fmt;

/// An IRI naming an entity, property, or type in the remote entity store
///
/// Stored in raw string form. Validation is shallow: the remote store is the
/// authority on IRI syntax, so construction only rejects values that cannot
/// possibly be absolute IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Create a new IRI
    ///
    /// # Errors
    /// Returns error if the value is empty or has no scheme separator
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("IRI cannot be empty".to_string());
        }
        if !value.contains(':') {
            return Err(format!("IRI '{}' has no scheme", value));
        }
        Ok(Self(value))
    }

    /// Construct from a known-good constant, skipping validation
    pub(crate) fn known(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_creation() {
        let iri = Iri::new("https://ex.org/e1").unwrap();
        assert_eq!(iri.as_str(), "https://ex.org/e1");
    }

    #[test]
    fn test_iri_rejects_empty() {
        assert!(Iri::new("").is_err());
    }

    #[test]
    fn test_iri_rejects_missing_scheme() {
        assert!(Iri::new("no-scheme-here").is_err());
    }

    #[test]
    fn test_iri_display() {
        let iri = Iri::new("urn:example:42").unwrap();
        assert_eq!(iri.to_string(), "urn:example:42");
    }

    #[test]
    fn test_iri_serde_transparent() {
        let iri = Iri::new("https://ex.org/e1").unwrap();
        let json = serde_json::to_string(&iri).unwrap();
        assert_eq!(json, r#""https://ex.org/e1""#);

        let parsed: Iri = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, iri);
    }
}
