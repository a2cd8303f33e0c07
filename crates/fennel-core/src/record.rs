use crate::short_id::ShortId;
use serde::{Deserialize, Serialize};

/// A stored URL mapping in the short-id keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The content-addressed identifier, always `ShortId::for_url(&url)`.
    pub short_id: ShortId,
    /// The original long-form URL.
    pub url: String,
}

impl UrlRecord {
    /// Builds the record for a URL, deriving its identifier.
    ///
    /// This is the only constructor, so the `short_id == for_url(url)`
    /// invariant holds for every record that reaches the store.
    pub fn for_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            short_id: ShortId::for_url(&url),
            url,
        }
    }
}

/// Webpage preview metadata in the preview keyspace, keyed by `url`.
///
/// Written asynchronously by the enrichment pipeline, strictly after the
/// corresponding [`UrlRecord`] exists, and possibly never if every fetch
/// attempt for the URL fails. Each field is present only when the fetch
/// returned a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRecord {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
