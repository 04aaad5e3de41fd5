//! Filesystem adapter for the SDR agent.
//!
//! Implements the `FileSystem` trait from `pwsdr-core` for real filesystem
//! I/O, and resolves the data directory plus the content/leads file paths.

use std::path::{Path, PathBuf};

use pwsdr_core::service::fs::FileSystem;
use pwsdr_types::config::StorageConfig;

/// Local filesystem implementation of the `FileSystem` trait.
///
/// All operations go through `tokio::fs` for async I/O.
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new LocalFileSystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Path of the FAQ content file. Absolute config values are kept as-is.
    pub fn content_path(data_dir: &Path, storage: &StorageConfig) -> PathBuf {
        data_dir.join(&storage.content_file)
    }

    /// Path of the leads file. Absolute config values are kept as-is.
    pub fn leads_path(data_dir: &Path, storage: &StorageConfig) -> PathBuf {
        data_dir.join(&storage.leads_file)
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `PWSDR_DATA_DIR` environment variable
/// 2. `~/.pwsdr`
/// 3. `.pwsdr` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PWSDR_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".pwsdr");
    }

    PathBuf::from(".pwsdr")
}
