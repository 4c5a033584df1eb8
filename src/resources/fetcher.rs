//! The resource fetch seam.
//!
//! The transport that actually retrieves resources lives outside the
//! crate. Implementations must bypass any cache, so an edit to a resource
//! file shows up on the very next load.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Failure to produce usable bytes for a resource.
///
/// The loading policy treats every variant identically (substitute the
/// default); the variants exist for notices and logs only.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("empty body: {path}")]
    EmptyBody { path: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of raw resource bytes.
pub trait ResourceFetcher {
    /// Fetch the resource at `path` (e.g. `/deckA.json`).
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetcher reading resources from a static site root on disk.
#[derive(Clone, Debug)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceFetcher for DirFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let full = self.root.join(path.trim_start_matches('/'));

        if !full.is_file() {
            return Err(FetchError::NotFound {
                path: path.to_string(),
            });
        }

        Ok(std::fs::read(full)?)
    }
}

/// In-memory fetcher for tests and embedded resources.
#[derive(Clone, Debug, Default)]
pub struct StaticFetcher {
    resources: FxHashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    /// Create an empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource body (builder pattern).
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(path.into(), body.into());
        self
    }
}

impl ResourceFetcher for StaticFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                path: path.to_string(),
            })
    }
}
