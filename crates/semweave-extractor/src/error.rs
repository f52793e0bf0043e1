//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur while building patch requests from a page
///
/// Malformed HTML is not an error: the parser recovers and extraction yields
/// whatever is parseable.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The configured link class does not form a valid CSS selector
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
