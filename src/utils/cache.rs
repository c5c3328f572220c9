//! Write-once PDF cache on the local filesystem.
//!
//! The cache is a flat directory with one `<arxiv_id>.pdf` file per paper.
//! There is no TTL, no eviction, and no metadata: existence of the file is
//! the whole contract. Writes go through a temp file in the same directory
//! and are renamed into place, so a failed or concurrent download never
//! leaves a partial file visible under the target path.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// File cache for downloaded PDFs, keyed by arXiv ID.
#[derive(Debug, Clone)]
pub struct PdfCache {
    root: PathBuf,
}

impl PdfCache {
    /// Create a cache rooted at the given directory.
    ///
    /// Call [`initialize`](Self::initialize) before serving requests.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the cache directory. Idempotent, safe to call repeatedly.
    pub fn initialize(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::info!(path = %self.root.display(), "PDF cache initialized");
        Ok(())
    }

    /// The configured cache root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deterministic target path for a paper ID.
    pub fn path_for(&self, arxiv_id: &str) -> PathBuf {
        self.root.join(format!("{}.pdf", arxiv_id))
    }

    /// Whether a PDF for this ID is already cached.
    pub fn contains(&self, arxiv_id: &str) -> bool {
        self.path_for(arxiv_id).exists()
    }

    /// Store PDF bytes for a paper ID, returning the final path and size.
    ///
    /// The bytes are written to a temp file in the cache directory and then
    /// persisted onto the target path in one rename. Concurrent stores for
    /// the same ID are last-writer-wins; both leave a complete file.
    pub fn store(&self, arxiv_id: &str, bytes: &[u8]) -> io::Result<(PathBuf, u64)> {
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;

        let path = self.path_for(arxiv_id);
        tmp.persist(&path).map_err(|e| e.error)?;

        Ok((path, bytes.len() as u64))
    }
}
