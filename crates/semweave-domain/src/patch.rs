//! Entity patch requests - the unit of change proposed to the entity store

use crate::iri::Iri;
use crate::vocab;
use serde::{Deserialize, Serialize};

/// Object position of a patch: a plain literal or a reference to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PatchValue {
    /// Plain literal string
    Literal(String),
    /// Reference to another resource
    Iri(Iri),
}

/// A single proposed addition of a (predicate, value) pair to an entity's
/// record
///
/// Patch requests are immutable once built and carry no identity beyond
/// structural equality. The host SDK serializes them and applies them against
/// the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPatchRequest {
    /// Entity the patch applies to
    pub subject: Iri,

    /// Property being added
    pub predicate: Iri,

    /// Value being added
    pub value: PatchValue,
}

impl EntityPatchRequest {
    /// Create a new patch request
    pub fn new(subject: Iri, predicate: Iri, value: PatchValue) -> Self {
        Self {
            subject,
            predicate,
            value,
        }
    }

    /// Patch adding a keyword literal to `subject`
    ///
    /// # Examples
    ///
    /// ```
    /// use semweave_domain::{EntityPatchRequest, Iri, PatchValue, vocab};
    ///
    /// let subject = Iri::new("https://ex.org/e1").unwrap();
    /// let patch = EntityPatchRequest::keywords(subject, "Cats");
    ///
    /// assert_eq!(patch.predicate.as_str(), vocab::KEYWORDS);
    /// assert_eq!(patch.value, PatchValue::Literal("Cats".to_string()));
    /// ```
    pub fn keywords(subject: Iri, text: impl Into<String>) -> Self {
        Self {
            subject,
            predicate: vocab::keywords(),
            value: PatchValue::Literal(text.into()),
        }
    }
}
