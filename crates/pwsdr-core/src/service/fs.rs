//! FileSystem trait for abstracting file I/O.
//!
//! Defined in pwsdr-core so services can read and seed files without
//! depending on any specific filesystem implementation. The
//! `LocalFileSystem` adapter lives in pwsdr-infra.

use std::path::Path;

/// Abstraction over filesystem operations.
///
/// This trait allows the service layer to read/write files without coupling
/// to the real filesystem, enabling easy testing with in-memory implementations.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, creating parent directories as needed.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = bool> + Send;
}
