//! Patch construction from extracted values

use semweave_domain::{EntityPatchRequest, Iri};

/// Build one keywords patch request per extracted value
///
/// Output order matches input order. Values are passed through unchanged:
/// empty strings, duplicates, and non-ASCII text are all legal.
pub fn keyword_patches<I>(subject: &Iri, values: I) -> Vec<EntityPatchRequest>
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .map(|value| EntityPatchRequest::keywords(subject.clone(), value))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use semweave_domain::PatchValue;

    proptest! {
        /// Property: one patch per value, subject and predicate fixed, input
        /// order preserved
        #[test]
        fn test_builder_shape(values in proptest::collection::vec(".*", 0..16)) {
            let subject = Iri::new("https://ex.org/e1").unwrap();
            let patches = keyword_patches(&subject, values.clone());

            prop_assert_eq!(patches.len(), values.len());
            for (patch, value) in patches.iter().zip(values) {
                prop_assert_eq!(patch.subject.as_str(), "https://ex.org/e1");
                prop_assert_eq!(patch.predicate.as_str(), semweave_domain::vocab::KEYWORDS);
                prop_assert_eq!(&patch.value, &PatchValue::Literal(value));
            }
        }
    }
}
