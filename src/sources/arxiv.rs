//! arXiv upstream client and Atom feed parsing.

use std::sync::Arc;

use feed_rs::parser;

use crate::models::{Paper, SearchQuery};
use crate::sources::SourceError;
use crate::utils::HttpClient;

/// Base URL for the arXiv query API
const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";
/// Base URL for arXiv PDFs
const ARXIV_PDF_URL: &str = "https://arxiv.org/pdf";
/// Base URL for arXiv abstract pages
const ARXIV_ABS_URL: &str = "https://arxiv.org/abs";

/// Client for the arXiv search API and PDF endpoint.
///
/// Stateless beyond the shared HTTP client. The base URLs are injectable so
/// tests can point the client at a stub server.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: Arc<HttpClient>,
    api_base: String,
    pdf_base: String,
}

impl ArxivSource {
    /// Create a client against the real arXiv endpoints.
    pub fn new() -> Self {
        Self::with_client(Arc::new(HttpClient::new()))
    }

    /// Create with a custom HTTP client.
    pub fn with_client(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            api_base: ARXIV_API_URL.to_string(),
            pdf_base: ARXIV_PDF_URL.to_string(),
        }
    }

    /// Create with custom base URLs (for testing against a stub upstream).
    pub fn with_base_urls(
        client: Arc<HttpClient>,
        api_base: impl Into<String>,
        pdf_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            pdf_base: pdf_base.into(),
        }
    }

    /// Extract the arXiv ID from an Atom entry identifier.
    ///
    /// The entry `id` is a URL such as `http://arxiv.org/abs/2301.07041v2`;
    /// the paper ID is its final path segment with any trailing `v<digits>`
    /// version marker removed. No other normalization is applied: case and
    /// formatting pass through unchanged.
    pub fn extract_id(entry_id: &str) -> String {
        let segment = entry_id.rsplit('/').next().unwrap_or(entry_id);
        strip_version(segment).to_string()
    }

    /// Deterministic PDF URL for a paper ID.
    pub fn pdf_url_for(&self, arxiv_id: &str) -> String {
        format!("{}/{}.pdf", self.pdf_base, arxiv_id)
    }

    /// Search arXiv and parse the Atom response into paper records.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Paper>, SourceError> {
        let url = format!(
            "{}?search_query={}&max_results={}&sortBy={}",
            self.api_base,
            urlencoding::encode(&query.query),
            query.max_results,
            query.sort_by.as_str()
        );

        tracing::debug!(url = %url, "querying arXiv");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch arXiv results: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "arXiv API returned status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let feed = parser::parse(bytes.as_ref())
            .map_err(|e| SourceError::Parse(format!("Failed to parse Atom feed: {}", e)))?;

        Ok(feed.entries.iter().map(Self::parse_entry).collect())
    }

    /// Fetch the raw PDF bytes for a paper ID.
    ///
    /// Returns `SourceError::Api` on any non-success HTTP status.
    pub async fn fetch_pdf(&self, arxiv_id: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.pdf_url_for(arxiv_id);

        tracing::debug!(url = %url, "fetching PDF");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch PDF: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!("HTTP {}", response.status().as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read PDF body: {}", e)))?;

        Ok(bytes.to_vec())
    }

    /// Map an Atom entry onto a [`Paper`].
    ///
    /// Upstream omits fields freely; every optional field falls back to an
    /// empty string or empty vector instead of failing the whole response.
    fn parse_entry(entry: &feed_rs::model::Entry) -> Paper {
        let arxiv_id = Self::extract_id(&entry.id);

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_default();

        let authors = entry
            .authors
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>();

        let abstract_text = entry
            .summary
            .as_ref()
            .map(|s| s.content.clone())
            .unwrap_or_default();

        let published = entry
            .published
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();
        let updated = entry.updated.map(|d| d.to_rfc3339()).unwrap_or_default();

        let categories = entry
            .categories
            .iter()
            .map(|c| c.term.clone())
            .collect::<Vec<_>>();

        Paper {
            pdf_url: format!("{}/{}.pdf", ARXIV_PDF_URL, arxiv_id),
            abs_url: format!("{}/{}", ARXIV_ABS_URL, arxiv_id),
            arxiv_id,
            title,
            authors,
            abstract_text: Some(abstract_text),
            published,
            updated,
            categories,
        }
    }
}

impl Default for ArxivSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a trailing `v<digits>` version marker, if present.
fn strip_version(id: &str) -> &str {
    if let Some(pos) = id.rfind('v') {
        let suffix = &id[pos + 1..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return &id[..pos];
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortBy;

    #[test]
    fn test_extract_id() {
        assert_eq!(
            ArxivSource::extract_id("http://arxiv.org/abs/2301.07041v2"),
            "2301.07041"
        );
        assert_eq!(
            ArxivSource::extract_id("http://arxiv.org/abs/1706.03762"),
            "1706.03762"
        );
        // Bare IDs pass through
        assert_eq!(ArxivSource::extract_id("2301.07041v12"), "2301.07041");
        assert_eq!(ArxivSource::extract_id("2301.07041"), "2301.07041");
    }

    #[test]
    fn test_extract_id_no_false_version_strip() {
        // A 'v' not followed by digits is part of the ID, not a version
        assert_eq!(
            ArxivSource::extract_id("http://arxiv.org/abs/math.GV/0104020"),
            "0104020"
        );
        assert_eq!(ArxivSource::extract_id("abcv"), "abcv");
        // Case is preserved, never folded
        assert_eq!(
            ArxivSource::extract_id("http://arxiv.org/abs/Mixed.Case123v3"),
            "Mixed.Case123"
        );
    }

    #[test]
    fn test_pdf_url_for() {
        let source = ArxivSource::new();
        assert_eq!(
            source.pdf_url_for("2301.07041"),
            "https://arxiv.org/pdf/2301.07041.pdf"
        );
    }

    #[test]
    fn test_parse_entry_full_feed() {
        let feed_xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
            <title>ArXiv Query Results</title>
            <id>http://arxiv.org/api/test</id>
            <updated>2023-01-20T00:00:00Z</updated>
            <entry>
                <id>http://arxiv.org/abs/2301.07041v2</id>
                <title>Test Paper Title</title>
                <summary>Test abstract text</summary>
                <published>2023-01-17T18:59:59Z</published>
                <updated>2023-01-19T12:00:00Z</updated>
                <author><name>First Author</name></author>
                <author><name>Second Author</name></author>
                <category term="cs.LG"/>
                <category term="cs.AI"/>
            </entry>
        </feed>"#;

        let feed = feed_rs::parser::parse(feed_xml.as_bytes()).unwrap();
        assert_eq!(feed.entries.len(), 1);

        let paper = ArxivSource::parse_entry(&feed.entries[0]);
        assert_eq!(paper.arxiv_id, "2301.07041");
        assert_eq!(paper.title, "Test Paper Title");
        assert_eq!(paper.authors, vec!["First Author", "Second Author"]);
        assert_eq!(paper.abstract_text.as_deref(), Some("Test abstract text"));
        assert_eq!(paper.categories, vec!["cs.LG", "cs.AI"]);
        assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/2301.07041.pdf");
        assert_eq!(paper.abs_url, "https://arxiv.org/abs/2301.07041");
        assert!(paper.published.starts_with("2023-01-17"));
        assert!(paper.updated.starts_with("2023-01-19"));
    }

    #[test]
    fn test_parse_entry_sparse_feed() {
        // Entry with only an id: every other field gets its fallback
        let feed_xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
            <title>ArXiv Query Results</title>
            <id>http://arxiv.org/api/test</id>
            <updated>2023-01-20T00:00:00Z</updated>
            <entry>
                <id>http://arxiv.org/abs/1706.03762</id>
            </entry>
        </feed>"#;

        let feed = feed_rs::parser::parse(feed_xml.as_bytes()).unwrap();
        let paper = ArxivSource::parse_entry(&feed.entries[0]);
        assert_eq!(paper.arxiv_id, "1706.03762");
        assert_eq!(paper.title, "");
        assert!(paper.authors.is_empty());
        assert_eq!(paper.abstract_text.as_deref(), Some(""));
        assert_eq!(paper.published, "");
        assert!(paper.categories.is_empty());
    }

    #[tokio::test]
    async fn test_search_builds_sort_parameter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/query")
            .match_query(mockito::Matcher::UrlEncoded(
                "sortBy".into(),
                "submittedDate".into(),
            ))
            .with_status(200)
            .with_body(
                r#"<?xml version="1.0" encoding="UTF-8"?>
                <feed xmlns="http://www.w3.org/2005/Atom">
                    <title>ArXiv Query Results</title>
                    <id>http://arxiv.org/api/test</id>
                    <updated>2023-01-20T00:00:00Z</updated>
                </feed>"#,
            )
            .create_async()
            .await;

        let source = ArxivSource::with_base_urls(
            Arc::new(HttpClient::new()),
            format!("{}/query", server.url()),
            format!("{}/pdf", server.url()),
        );

        let query = SearchQuery::new("transformer").sort_by(SortBy::SubmittedDate);
        let papers = source.search(&query).await.unwrap();
        assert!(papers.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/query")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let source = ArxivSource::with_base_urls(
            Arc::new(HttpClient::new()),
            format!("{}/query", server.url()),
            format!("{}/pdf", server.url()),
        );

        let err = source
            .search(&SearchQuery::new("transformer"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api(_)));
    }
}
