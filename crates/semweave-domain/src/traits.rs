//! Trait definitions for the plugin boundary
//!
//! The host SDK consumes these traits. Implementations live in
//! `semweave-extractor`.

use crate::iri::Iri;
use crate::patch::EntityPatchRequest;
use async_trait::async_trait;

/// A fetched page handed to the plugin by the host SDK
///
/// The HTML arrives fully in memory; the plugin performs no fetching of its
/// own.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Entity the page describes
    pub entity_id: Iri,

    /// Raw markup as fetched
    pub html: String,
}

/// Trait for turning a fetched page into entity patch requests
///
/// The host invokes this once per crawled page and applies the returned
/// patches against the remote store. The operation is async to match the
/// host's calling convention but performs no I/O, never blocks, and holds no
/// shared mutable state; invoking it repeatedly or concurrently is safe.
#[async_trait]
pub trait PatchExtractor {
    /// Error type for extraction operations
    type Error;

    /// Produce one patch request per value extracted from `page`
    ///
    /// An empty vector is a valid result and means the page proposed no
    /// changes.
    async fn extract(&self, page: PageContent) -> Result<Vec<EntityPatchRequest>, Self::Error>;
}
