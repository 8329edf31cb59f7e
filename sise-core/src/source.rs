use async_trait::async_trait;

use crate::Document;
use sise_types::SiseError;

/// One document-acquisition strategy in an ordered fallback chain.
///
/// Implementations live outside this workspace's core: a structured JSON
/// endpoint, an alternate endpoint, a rendered page's embedded state blob, a
/// visible-text dump. The pipeline invokes tiers strictly in order and treats
/// an acquisition failure as "no document produced", never as fatal.
///
/// Cancellation and timeouts are the acquisition layer's responsibility; the
/// resolver downstream is pure computation bounded by its step counter.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Stable tier name used in logs and as-of annotations.
    fn name(&self) -> &'static str;

    /// Produce one raw document.
    ///
    /// # Errors
    /// Returns `SiseError::Acquisition` (or any other variant) when no
    /// document could be produced; the pipeline logs it and advances to the
    /// next tier.
    async fn acquire(&self) -> Result<Document, SiseError>;
}
