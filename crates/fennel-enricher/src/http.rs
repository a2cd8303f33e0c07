use crate::error::FetchError;
use crate::fetcher::{Preview, PreviewFetcher};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// How much of a document gets scanned for metadata. Preview tags live
/// in the head, so there is no point reading a whole page.
const MAX_SCAN_BYTES: usize = 256 * 1024;

const USER_AGENT: &str = concat!("fennel/", env!("CARGO_PKG_VERSION"));

/// [`PreviewFetcher`] adapter over plain HTTP.
///
/// Issues a GET for the URL, requires an HTML response, and scans the
/// document for a `<title>` tag and Open Graph / standard meta tags.
#[derive(Debug, Clone)]
pub struct HttpPreviewFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPreviewFetcher {
    /// Creates a fetcher whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl PreviewFetcher for HttpPreviewFetcher {
    async fn fetch(&self, url: &str) -> Result<Preview, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_owned();
        if !content_type.contains("text/html") {
            return Err(FetchError::UnsupportedContent(content_type));
        }

        let window = read_scan_window(response).await?;
        Ok(extract_preview(&window))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(error.to_string())
    }
}

/// Reads at most [`MAX_SCAN_BYTES`] of the body, discarding the rest of
/// the stream, so an arbitrarily large page never grows the buffer past
/// the scan window.
async fn read_scan_window(mut response: reqwest::Response) -> Result<String, FetchError> {
    let mut window = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
        if !push_chunk(&mut window, &chunk) {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&window).into_owned())
}

/// Appends a chunk to the scan window, truncating at the cap.
/// Returns `false` once the window is full.
fn push_chunk(window: &mut Vec<u8>, chunk: &[u8]) -> bool {
    let remaining = MAX_SCAN_BYTES - window.len();
    if chunk.len() >= remaining {
        window.extend_from_slice(&chunk[..remaining]);
        return false;
    }
    window.extend_from_slice(chunk);
    true
}

/// Pulls title/description/image out of an HTML document.
///
/// Open Graph tags win over their plain-HTML fallbacks. Empty values are
/// dropped. This is a lightweight tag scan, not a full HTML parse; it
/// covers the meta conventions real pages use for link previews.
fn extract_preview(doc: &str) -> Preview {
    let metas = collect_meta_tags(doc);

    let title = meta_value(&metas, &["og:title", "twitter:title"]).or_else(|| title_tag(doc));
    let description = meta_value(
        &metas,
        &["og:description", "description", "twitter:description"],
    );
    let image = meta_value(&metas, &["og:image", "twitter:image"]);

    Preview {
        title,
        description,
        image,
    }
}

/// All `(property-or-name, content)` pairs from `<meta>` tags, in
/// document order.
fn collect_meta_tags(doc: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut rest = doc;

    while let Some(start) = rest.find("<meta") {
        rest = &rest[start + "<meta".len()..];
        let Some(end) = rest.find('>') else { break };
        let tag = &rest[..end];
        rest = &rest[end + 1..];

        let key = attr_value(tag, "property").or_else(|| attr_value(tag, "name"));
        let content = attr_value(tag, "content");
        if let (Some(key), Some(content)) = (key, content) {
            pairs.push((key.to_ascii_lowercase(), content.to_owned()));
        }
    }

    pairs
}

fn meta_value(pairs: &[(String, String)], keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some((_, content)) = pairs.iter().find(|(k, _)| k == key) {
            if let Some(value) = non_empty(content) {
                return Some(value);
            }
        }
    }
    None
}

/// Extracts a quoted attribute value from the inside of a tag.
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = tag;
    while let Some(pos) = rest.find(name) {
        let after = &rest[pos + name.len()..];
        let after = after.trim_start();
        if let Some(after) = after.strip_prefix('=') {
            let after = after.trim_start();
            let quote = after.chars().next()?;
            if quote == '"' || quote == '\'' {
                let inner = &after[1..];
                return inner.find(quote).map(|end| &inner[..end]);
            }
        }
        rest = &rest[pos + name.len()..];
    }
    None
}

fn title_tag(doc: &str) -> Option<String> {
    let start = doc.find("<title")?;
    let rest = &doc[start..];
    let open_end = rest.find('>')?;
    let inner = &rest[open_end + 1..];
    let close = inner.find("</title")?;
    non_empty(&inner[..close])
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_tag() {
        let doc = "<html><head><title>Example Domain</title></head></html>";
        let preview = extract_preview(doc);
        assert_eq!(preview.title.as_deref(), Some("Example Domain"));
        assert_eq!(preview.description, None);
        assert_eq!(preview.image, None);
    }

    #[test]
    fn open_graph_tags_win_over_title_tag() {
        let doc = r#"<head>
            <title>Fallback</title>
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG Description">
            <meta property="og:image" content="https://example.com/a.png">
        </head>"#;
        let preview = extract_preview(doc);
        assert_eq!(preview.title.as_deref(), Some("OG Title"));
        assert_eq!(preview.description.as_deref(), Some("OG Description"));
        assert_eq!(preview.image.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn falls_back_to_description_meta_name() {
        let doc = r#"<meta name="description" content="Plain description">"#;
        let preview = extract_preview(doc);
        assert_eq!(preview.description.as_deref(), Some("Plain description"));
    }

    #[test]
    fn single_quoted_attributes() {
        let doc = "<meta property='og:image' content='https://example.com/b.png'>";
        let preview = extract_preview(doc);
        assert_eq!(preview.image.as_deref(), Some("https://example.com/b.png"));
    }

    #[test]
    fn empty_content_is_dropped() {
        let doc = r#"<title>  </title><meta property="og:description" content="">"#;
        let preview = extract_preview(doc);
        assert_eq!(preview, Preview::default());
    }

    #[test]
    fn document_without_metadata() {
        let preview = extract_preview("<html><body>nothing here</body></html>");
        assert_eq!(preview, Preview::default());
    }

    #[test]
    fn oversized_body_never_exceeds_the_scan_window() {
        let mut window = Vec::new();
        let chunk = vec![b'a'; 64 * 1024];

        let mut kept_reading = true;
        for _ in 0..16 {
            kept_reading = push_chunk(&mut window, &chunk);
            assert!(window.len() <= MAX_SCAN_BYTES);
            if !kept_reading {
                break;
            }
        }

        assert!(!kept_reading, "reading should stop once the window fills");
        assert_eq!(window.len(), MAX_SCAN_BYTES);
    }

    #[test]
    fn small_body_is_fully_buffered() {
        let mut window = Vec::new();
        assert!(push_chunk(&mut window, b"<title>Example</title>"));
        assert_eq!(window, b"<title>Example</title>");
    }
}
