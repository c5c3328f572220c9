//! Utility modules: the shared HTTP client and the PDF file cache.

mod cache;
mod http;

pub use cache::PdfCache;
pub use http::HttpClient;
