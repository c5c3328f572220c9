//! Upstream research source clients.
//!
//! The only source is arXiv: a GET-with-query-parameters endpoint returning
//! an Atom feed, and a PDF endpoint keyed by paper identifier.

mod arxiv;

pub use arxiv::ArxivSource;

/// Errors that can occur when talking to an upstream source.
///
/// The tool handlers flatten all of these into a `{error, success: false}`
/// envelope; the variants exist so internal code can use `?` and tests can
/// match on failure classes.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the upstream API
    #[error("API error: {0}")]
    Api(String),

    /// Feed parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}
