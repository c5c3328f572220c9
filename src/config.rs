//! Process configuration, read once at startup.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

/// Research MCP - HTTP tool server for searching and downloading arXiv papers
#[derive(Parser, Debug, Clone)]
#[command(name = "research-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HTTP tool server for searching and downloading arXiv papers", long_about = None)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind to
    #[arg(long, default_value_t = 8005)]
    pub port: u16,

    /// Cache directory for downloaded PDFs
    #[arg(long = "cache-path", default_value = "/var/lib/research-mcp/cache")]
    pub cache_path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}
