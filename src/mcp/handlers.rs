//! Tool handlers built on the arXiv client and the PDF cache.
//!
//! Every handler returns a JSON envelope carrying a `success` flag. Failures
//! in upstream communication, parsing, or filesystem I/O are formatted into
//! `{"error": ..., "success": false}` and returned with HTTP 200; they are
//! never surfaced as transport-level failures.

use serde_json::{json, Value};

use crate::mcp::tools::{Tool, ToolName, ToolRegistry};
use crate::models::{SearchQuery, SortBy};
use crate::sources::ArxivSource;
use crate::utils::PdfCache;

/// The tool server: registry plus the three handlers and their shared state.
///
/// Stateless per call; the cache directory is the only shared mutable
/// resource, and [`PdfCache::store`] keeps concurrent writers safe.
#[derive(Debug, Clone)]
pub struct ResearchServer {
    source: ArxivSource,
    cache: PdfCache,
    registry: ToolRegistry,
}

impl ResearchServer {
    /// Create a server from an arXiv client and an initialized cache.
    pub fn new(source: ArxivSource, cache: PdfCache) -> Self {
        Self {
            source,
            cache,
            registry: ToolRegistry::new(),
        }
    }

    /// The static tool descriptors, in registration order.
    pub fn tools(&self) -> &[Tool] {
        self.registry.tools()
    }

    /// The configured cache root, for the health endpoint.
    pub fn cache_path(&self) -> String {
        self.cache.root().display().to_string()
    }

    /// Route a tool call to its handler.
    ///
    /// Unknown names never reach this point: the HTTP layer rejects them
    /// with a 400 before dispatch.
    pub async fn handle_tool_call(&self, tool: ToolName, args: Value) -> Value {
        tracing::info!(tool = %tool, "tool call");
        match tool {
            ToolName::ArxivSearch => self.arxiv_search(&args).await,
            ToolName::ArxivGetPaper => self.arxiv_get_paper(&args).await,
            ToolName::DownloadPaperPdf => self.download_paper_pdf(&args).await,
        }
    }

    /// `arxiv_search`: keyword search against the arXiv API.
    async fn arxiv_search(&self, args: &Value) -> Value {
        let query = match args.get("query").and_then(Value::as_str) {
            Some(q) => q,
            None => return error_envelope("Missing 'query' parameter"),
        };
        let max_results = args
            .get("max_results")
            .and_then(Value::as_u64)
            .unwrap_or(10) as usize;
        let sort_by = match args.get("sort_by").and_then(Value::as_str) {
            Some(s) => match s.parse::<SortBy>() {
                Ok(sort) => sort,
                Err(e) => return error_envelope(e.to_string()),
            },
            None => SortBy::default(),
        };

        let search = SearchQuery::new(query)
            .max_results(max_results)
            .sort_by(sort_by);

        match self.source.search(&search).await {
            Ok(papers) => {
                let total_results = papers.len();
                json!({
                    "papers": papers,
                    "total_results": total_results,
                    "success": true
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "arXiv search failed");
                error_envelope(format!("Failed to search ArXiv: {}", e))
            }
        }
    }

    /// `arxiv_get_paper`: look up one paper by ID.
    ///
    /// Implemented by delegating to the search handler with an `id:` query
    /// capped at one result; arXiv has no dedicated fetch-by-id endpoint in
    /// this API. A malformed or ambiguous ID therefore returns whatever the
    /// upstream search ranks first, which is not guaranteed to be an exact
    /// match.
    async fn arxiv_get_paper(&self, args: &Value) -> Value {
        let arxiv_id = match args.get("arxiv_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => return error_envelope("Missing 'arxiv_id' parameter"),
        };
        let include_abstract = args
            .get("include_abstract")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let search_args = json!({
            "query": format!("id:{}", arxiv_id),
            "max_results": 1
        });
        let mut search_result = self.arxiv_search(&search_args).await;

        let succeeded = search_result
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let first = search_result
            .get_mut("papers")
            .and_then(Value::as_array_mut)
            .filter(|papers| !papers.is_empty())
            .map(|papers| papers.remove(0));

        let mut paper = match (succeeded, first) {
            (true, Some(paper)) => paper,
            _ => return error_envelope(format!("Paper {} not found", arxiv_id)),
        };

        if !include_abstract {
            if let Some(obj) = paper.as_object_mut() {
                obj.remove("abstract");
            }
        }

        json!({
            "paper": paper,
            "success": true
        })
    }

    /// `download_paper_pdf`: fetch a PDF into the cache, deduplicating by ID.
    ///
    /// A second call for the same ID is a no-op returning the existing path;
    /// no freshness check, no checksum. On any failure nothing is left at
    /// the target path.
    async fn download_paper_pdf(&self, args: &Value) -> Value {
        let arxiv_id = match args.get("arxiv_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => return error_envelope("Missing 'arxiv_id' parameter"),
        };

        if self.cache.contains(&arxiv_id) {
            tracing::debug!(arxiv_id = %arxiv_id, "cache hit");
            return json!({
                "message": format!("Paper {} already downloaded", arxiv_id),
                "file_path": self.cache.path_for(&arxiv_id).display().to_string(),
                "success": true
            });
        }

        let bytes = match self.source.fetch_pdf(&arxiv_id).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(arxiv_id = %arxiv_id, error = %e, "PDF download failed");
                return error_envelope(format!(
                    "Failed to download paper {}: {}",
                    arxiv_id, e
                ));
            }
        };

        match self.cache.store(&arxiv_id, &bytes) {
            Ok((path, size)) => json!({
                "message": format!("Successfully downloaded paper {}", arxiv_id),
                "file_path": path.display().to_string(),
                "file_size": size,
                "success": true
            }),
            Err(e) => {
                tracing::warn!(arxiv_id = %arxiv_id, error = %e, "cache write failed");
                error_envelope(format!("Failed to download paper {}: {}", arxiv_id, e))
            }
        }
    }
}

/// Uniform failure envelope.
fn error_envelope(message: impl Into<String>) -> Value {
    json!({
        "error": message.into(),
        "success": false
    })
}
