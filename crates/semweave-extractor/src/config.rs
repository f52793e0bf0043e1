//! Configuration for the extractor and the import surface

use semweave_domain::vocab;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the entity store API key
pub const API_KEY_ENV: &str = "SEMWEAVE_KEY";

/// Configuration for [`KeywordCloudExtractor`](crate::KeywordCloudExtractor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// CSS class that marks tag-cloud links
    pub link_class: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.link_class.is_empty() {
            return Err("link_class must not be empty".to_string());
        }
        if !self
            .link_class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "link_class '{}' is not a valid CSS class name",
                self.link_class
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            link_class: "tag-cloud-link".to_string(),
        }
    }
}

/// Import settings handed to the host SDK
///
/// Mirrors `config/sample.toml`. The API key never lives in the file; it is
/// read from the [`API_KEY_ENV`] environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Sitemap listing the webpage URLs to import. Must contain `loc` items
    /// pointing to webpage URLs, not other sitemaps.
    pub sitemap_url: String,

    /// Type assigned to imported entities
    #[serde(default = "default_output_type")]
    pub output_type: String,

    /// Restrict processing to these URLs; empty means the whole sitemap
    #[serde(default)]
    pub urls: Vec<String>,
}

impl ImportConfig {
    /// Load import settings from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Read the entity store API key from the environment
    pub fn api_key(&self) -> Option<String> {
        env::var(API_KEY_ENV).ok()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.sitemap_url.is_empty() {
            return Err("sitemap_url must not be empty".to_string());
        }
        if !self.sitemap_url.starts_with("http://") && !self.sitemap_url.starts_with("https://") {
            return Err(format!("sitemap_url '{}' is not an HTTP URL", self.sitemap_url));
        }
        Ok(())
    }
}

fn default_output_type() -> String {
    vocab::WEB_PAGE.to_string()
}
