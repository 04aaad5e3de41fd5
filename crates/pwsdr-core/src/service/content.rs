//! FAQ content service.
//!
//! Loads the company/FAQ document from disk, writing the bundled default on
//! first run. The loaded `FaqContent` is handed to callers by value; nothing
//! here keeps a process-wide copy.

use std::path::{Path, PathBuf};

use pwsdr_types::content::FaqContent;
use pwsdr_types::error::ContentError;

use crate::service::fs::FileSystem;

/// Loads and seeds the content document through a `FileSystem`.
pub struct ContentService<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> ContentService<F> {
    pub fn new(fs: F, path: PathBuf) -> Self {
        Self { fs, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the content document.
    ///
    /// If the file does not exist, the bundled default is written first
    /// (pretty-printed JSON) and then read back, so the on-disk copy is the
    /// single source of truth from then on. A malformed file is an error;
    /// the caller is expected to abort startup.
    pub async fn load(&self) -> Result<FaqContent, ContentError> {
        if !self.fs.exists(&self.path).await {
            self.seed_default().await?;
        }

        let raw = self
            .fs
            .read_file(&self.path)
            .await
            .map_err(|e| ContentError::Read {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let content: FaqContent =
            serde_json::from_str(&raw).map_err(|e| ContentError::Malformed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = content.faq.len(),
            company = %content.company.name,
            "loaded FAQ content"
        );

        Ok(content)
    }

    async fn seed_default(&self) -> Result<(), ContentError> {
        let seed_err = |reason: String| ContentError::Seed {
            path: self.path.display().to_string(),
            reason,
        };

        let body = serde_json::to_string_pretty(&FaqContent::default())
            .map_err(|e| seed_err(e.to_string()))?;
        self.fs
            .write_file(&self.path, &body)
            .await
            .map_err(|e| seed_err(e.to_string()))?;

        tracing::info!(path = %self.path.display(), "seeded default FAQ content");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory filesystem fake.
    #[derive(Default)]
    struct MemoryFs {
        files: Mutex<HashMap<PathBuf, String>>,
        writes: Mutex<u32>,
    }

    impl MemoryFs {
        fn with_file(path: &str, content: &str) -> Self {
            let fs = Self::default();
            fs.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
            fs
        }

        fn write_count(&self) -> u32 {
            *self.writes.lock().unwrap()
        }
    }

    impl FileSystem for MemoryFs {
        async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
            *self.writes.lock().unwrap() += 1;
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }

        async fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    #[tokio::test]
    async fn load_seeds_default_when_missing() {
        let service = ContentService::new(MemoryFs::default(), PathBuf::from("/data/pw_content.json"));

        let content = service.load().await.unwrap();

        assert_eq!(content, FaqContent::default());
        assert_eq!(content.faq.len(), 5);
        assert_eq!(service.fs.write_count(), 1);
        let written = service.fs.read_file(service.path()).await.unwrap();
        assert!(written.contains("\n  \"company\""), "seed should be pretty-printed");
    }

    #[tokio::test]
    async fn load_twice_is_identical_and_seeds_once() {
        let service = ContentService::new(MemoryFs::default(), PathBuf::from("/data/pw_content.json"));

        let first = service.load().await.unwrap();
        let second = service.load().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.fs.write_count(), 1);
    }

    #[tokio::test]
    async fn load_reads_existing_file_without_overwriting() {
        let fs = MemoryFs::with_file(
            "/data/c.json",
            r#"{"company": {"name": "Acme", "description": "d", "mission": "m"},
                "faq": [{"q": "Hours?", "a": "Nine to five."}]}"#,
        );
        let service = ContentService::new(fs, PathBuf::from("/data/c.json"));

        let content = service.load().await.unwrap();

        assert_eq!(content.company.name, "Acme");
        assert_eq!(content.faq.len(), 1);
        assert_eq!(service.fs.write_count(), 0);
    }

    #[tokio::test]
    async fn load_malformed_file_fails() {
        let fs = MemoryFs::with_file("/data/c.json", "{ not json");
        let service = ContentService::new(fs, PathBuf::from("/data/c.json"));

        let err = service.load().await.unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[tokio::test]
    async fn load_wrong_shape_fails() {
        let fs = MemoryFs::with_file("/data/c.json", r#"{"faq": []}"#);
        let service = ContentService::new(fs, PathBuf::from("/data/c.json"));

        assert!(matches!(
            service.load().await,
            Err(ContentError::Malformed { .. })
        ));
    }
}
