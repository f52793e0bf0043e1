//! Tag-cloud text extraction from raw HTML

use crate::error::ExtractorError;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Extract the trimmed visible text of every `<a>` element carrying
/// `link_class`, in document order
///
/// Parsing is lenient: malformed markup never fails, extraction yields
/// whatever the parser recovers. Zero matches yields an empty vector.
/// Duplicates and whitespace-only values are passed through unchanged.
pub fn tag_cloud_texts(html: &str, link_class: &str) -> Result<Vec<String>, ExtractorError> {
    let selector = link_selector(link_class)?;
    let document = Html::parse_document(html);

    let texts: Vec<String> = document.select(&selector).map(element_text).collect();

    debug!("Matched {} '{}' links", texts.len(), link_class);

    Ok(texts)
}

fn link_selector(link_class: &str) -> Result<Selector, ExtractorError> {
    let css = format!("a.{}", link_class);
    Selector::parse(&css).map_err(|e| ExtractorError::Selector(format!("'{}': {}", css, e)))
}

/// Concatenate an element's text nodes, stripping each fragment
fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
