use crate::error::Result;
use async_trait::async_trait;
use fennel_core::ShortId;

/// The public create/resolve contract of the shortening service.
///
/// Both operations are idempotent under retries: `create` recomputes the
/// same identifier and rewrites identical content, `resolve` is a pure
/// read.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL and returns its content-addressed identifier.
    ///
    /// Returns as soon as the primary write is durable; preview
    /// enrichment happens out of band and is never waited for.
    async fn create(&self, url: &str) -> Result<ShortId>;

    /// Resolves a short id back to its original URL.
    async fn resolve(&self, id: &ShortId) -> Result<String>;
}
