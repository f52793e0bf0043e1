//! PatchExtractor implementations

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extract::tag_cloud_texts;
use crate::patch::keyword_patches;
use async_trait::async_trait;
use semweave_domain::{EntityPatchRequest, PageContent, PatchExtractor};
use tracing::info;

/// Extracts tag-cloud link text and proposes one keywords patch per value
///
/// Stateless apart from its configuration; a single instance can serve any
/// number of pages, concurrently or not.
#[derive(Debug, Clone)]
pub struct KeywordCloudExtractor {
    config: ExtractorConfig,
}

impl KeywordCloudExtractor {
    /// Create a new extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl Default for KeywordCloudExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[async_trait]
impl PatchExtractor for KeywordCloudExtractor {
    type Error = ExtractorError;

    async fn extract(&self, page: PageContent) -> Result<Vec<EntityPatchRequest>, Self::Error> {
        let texts = tag_cloud_texts(&page.html, &self.config.link_class)?;

        info!(
            "Extracted {} keyword values for entity '{}'",
            texts.len(),
            page.entity_id
        );

        Ok(keyword_patches(&page.entity_id, texts))
    }
}

/// Degenerate implementation that ignores its input and proposes nothing
///
/// Demonstrates that the contract admits trivial implementations; also
/// usable as a placeholder while a site-specific extractor is being written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractor;

#[async_trait]
impl PatchExtractor for NoopExtractor {
    type Error = ExtractorError;

    async fn extract(&self, _page: PageContent) -> Result<Vec<EntityPatchRequest>, Self::Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semweave_domain::Iri;

    fn test_page(html: &str) -> PageContent {
        PageContent {
            entity_id: Iri::new("https://ex.org/e1").unwrap(),
            html: html.to_string(),
        }
    }

    #[tokio::test]
    async fn test_keyword_cloud_extractor() {
        let extractor = KeywordCloudExtractor::default();
        let page = test_page(r#"<a class="tag-cloud-link">Cats</a>"#);

        let patches = extractor.extract(page).await.unwrap();
        assert_eq!(patches.len(), 1);
    }

    #[tokio::test]
    async fn test_noop_ignores_input() {
        let extractor = NoopExtractor;
        let page = test_page(r#"<a class="tag-cloud-link">Cats</a>"#);

        let patches = extractor.extract(page).await.unwrap();
        assert!(patches.is_empty());
    }
}
