//! Fixed vocabulary the plugin writes against

use crate::iri::Iri;

/// Property holding an entity's keyword/tag values
pub const KEYWORDS: &str = "http://schema.org/keywords";

/// Type assigned to entities imported from web pages
pub const WEB_PAGE: &str = "http://schema.org/WebPage";

/// The [`KEYWORDS`] property as an [`Iri`]
pub fn keywords() -> Iri {
    Iri::known(KEYWORDS)
}

/// The [`WEB_PAGE`] type as an [`Iri`]
pub fn web_page() -> Iri {
    Iri::known(WEB_PAGE)
}
