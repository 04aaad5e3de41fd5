//! JSON-array lead repository.
//!
//! Leads live in a single pretty-printed JSON array, rewritten on every
//! append. Appends through one repository instance are serialized by an
//! async mutex, and each rewrite goes to a sibling temp file that is renamed
//! over the target, so readers never see a half-written array.
//!
//! Separate instances (or processes) pointed at the same file are not
//! coordinated: two of them appending at once can still lose one record.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use pwsdr_core::repository::lead::LeadRepository;
use pwsdr_types::error::LeadStoreError;
use pwsdr_types::lead::LeadRecord;

/// How far ahead of the clock a stored timestamp may be and still act as
/// the floor for the next one.
const MAX_FUTURE_SKEW_SECS: i64 = 5;

/// File-backed `LeadRepository`.
pub struct JsonFileLeadRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileLeadRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file as an empty array if it does not exist yet.
    pub async fn ensure_initialized(&self) -> Result<(), LeadStoreError> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        self.write_all(&[]).await?;
        tracing::info!(path = %self.path.display(), "created empty leads file");
        Ok(())
    }

    /// Read every stored record.
    ///
    /// A missing file is an empty store. A file that does not parse is
    /// moved aside when `quarantine` is set (append path) so the next write
    /// cannot destroy it; otherwise it is only reported.
    async fn read_all(&self, quarantine: bool) -> Result<Vec<LeadRecord>, LeadStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(LeadStoreError::Io(err.to_string())),
        };

        match serde_json::from_str::<Vec<LeadRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(err) if quarantine => {
                let target = self.quarantine_path().await;
                tokio::fs::rename(&self.path, &target)
                    .await
                    .map_err(|e| LeadStoreError::Io(e.to_string()))?;
                tracing::warn!(
                    path = %self.path.display(),
                    moved_to = %target.display(),
                    error = %err,
                    "leads file was corrupt, quarantined and starting empty"
                );
                Ok(Vec::new())
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "leads file is corrupt, reading as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// A `<file>.corrupt-<unix-nanos>` path that no earlier quarantine holds.
    async fn quarantine_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "leads.json".to_string());
        let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        let mut target = self.path.with_file_name(format!("{name}.corrupt-{stamp}"));
        let mut attempt = 1u32;
        while tokio::fs::try_exists(&target).await.unwrap_or(false) {
            target = self
                .path
                .with_file_name(format!("{name}.corrupt-{stamp}-{attempt}"));
            attempt += 1;
        }
        target
    }

    /// Replace the file contents atomically (write temp, then rename).
    async fn write_all(&self, records: &[LeadRecord]) -> Result<(), LeadStoreError> {
        let body = serde_json::to_string_pretty(records)
            .map_err(|e| LeadStoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LeadStoreError::Io(e.to_string()))?;
        }

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "leads.json".to_string());
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let tmp = self
            .path
            .with_file_name(format!(".{name}.{}.{nanos}.tmp", std::process::id()));

        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| LeadStoreError::Io(e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(LeadStoreError::Io(e.to_string()));
        }
        Ok(())
    }
}

/// Keep file order and timestamp order consistent. A previous timestamp
/// that lies in the future (clock skew, legacy local-time stamps) is not
/// copied forward.
fn clamped_timestamp(
    candidate: DateTime<Utc>,
    previous: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    if candidate < previous && previous <= now + Duration::seconds(MAX_FUTURE_SKEW_SECS) {
        previous
    } else {
        candidate
    }
}

impl LeadRepository for JsonFileLeadRepository {
    async fn append(&self, mut record: LeadRecord) -> Result<LeadRecord, LeadStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all(true).await?;

        if let Some(last) = records.last() {
            record.timestamp = clamped_timestamp(record.timestamp, last.timestamp, Utc::now());
        }

        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::debug!(path = %self.path.display(), total = records.len(), "lead appended");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<LeadRecord>, LeadStoreError> {
        self.read_all(false).await
    }
}
