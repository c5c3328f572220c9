//! Research MCP - HTTP tool server for the arXiv catalog.
//!
//! This crate exposes three tools to an external tool-calling agent over a
//! small JSON/HTTP contract:
//!
//! - `arxiv_search`: keyword search against the arXiv API
//! - `arxiv_get_paper`: look up a single paper by arXiv ID
//! - `download_paper_pdf`: download a paper's PDF into a local cache
//!
//! # Architecture
//!
//! - [`sources`]: the arXiv upstream client and Atom feed parsing
//! - [`models`]: paper and search query models
//! - [`utils`]: shared HTTP client and the PDF file cache
//! - [`mcp`]: tool descriptors, dispatch, handlers, and the HTTP front door
//! - [`config`]: process configuration read once at startup
//!
//! # Example
//!
//! ```rust,no_run
//! use research_mcp::mcp::{router, AppState, ResearchServer};
//! use research_mcp::sources::ArxivSource;
//! use research_mcp::utils::PdfCache;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cache = PdfCache::new("/var/lib/research-mcp/cache");
//! cache.initialize()?;
//! let server = ResearchServer::new(ArxivSource::new(), cache);
//! let app = router(AppState::new(server));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod mcp;
pub mod models;
pub mod sources;
pub mod utils;
