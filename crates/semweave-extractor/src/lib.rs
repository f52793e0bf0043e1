//! Semweave Extractor
//!
//! Turns fetched pages into entity patch requests for the sitemap-import
//! host SDK.
//!
//! # Overview
//!
//! The host crawls a sitemap, fetches each page, and hands `(entity id,
//! HTML)` to a [`PatchExtractor`](semweave_domain::PatchExtractor)
//! implementation. This crate provides the keyword-cloud implementation: it
//! selects every tag-cloud hyperlink in the page and proposes one
//! `schema.org/keywords` patch per link, plus a no-op implementation that
//! proposes nothing.
//!
//! # Architecture
//!
//! ```text
//! Page HTML → tag-cloud selection → keyword literals → EntityPatchRequest
//! ```
//!
//! # Example Usage
//!
//! ```
//! use semweave_domain::{Iri, PageContent, PatchExtractor};
//! use semweave_extractor::{ExtractorConfig, KeywordCloudExtractor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = KeywordCloudExtractor::new(ExtractorConfig::default());
//!
//! let page = PageContent {
//!     entity_id: Iri::new("https://ex.org/e1")?,
//!     html: r#"<a class="tag-cloud-link">Cats</a>"#.to_string(),
//! };
//!
//! let patches = extractor.extract(page).await?;
//! assert_eq!(patches.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod extractor;
mod patch;


pub use config::{ExtractorConfig, ImportConfig, API_KEY_ENV};
pub use error::ExtractorError;
pub use extract::tag_cloud_texts;
pub use extractor::{KeywordCloudExtractor, NoopExtractor};
pub use patch::keyword_patches;
