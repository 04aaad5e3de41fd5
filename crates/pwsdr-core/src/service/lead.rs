//! Lead capture service.
//!
//! Turns drafts and tool arguments into timestamped `LeadRecord`s and hands
//! them to the repository. Save failures are returned, never swallowed, so
//! the agent cannot confirm a lead that was not written.

use chrono::Utc;

use pwsdr_types::error::LeadStoreError;
use pwsdr_types::lead::{LeadDraft, LeadRecord};
use pwsdr_types::tool::SaveLeadArgs;

use crate::repository::lead::LeadRepository;

/// Service wrapping a `LeadRepository`.
pub struct LeadService<R: LeadRepository> {
    repo: R,
}

impl<R: LeadRepository> LeadService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stamp `draft` with the current time and persist it.
    ///
    /// Unset fields are stored as null (best-effort save).
    pub async fn save_draft(&self, draft: LeadDraft) -> Result<LeadRecord, LeadStoreError> {
        let missing = draft.missing_fields();
        let record = LeadRecord::from_draft(draft, Utc::now());

        let stored = self.repo.append(record).await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to save lead");
        })?;

        tracing::info!(
            interest = stored.interest.as_deref().unwrap_or("-"),
            timeline = stored.timeline.as_deref().unwrap_or("-"),
            missing_fields = missing.len(),
            "lead saved"
        );
        Ok(stored)
    }

    /// Persist the arguments of a `save_lead` tool call.
    pub async fn save_lead(&self, args: SaveLeadArgs) -> Result<LeadRecord, LeadStoreError> {
        self.save_draft(args.into()).await
    }

    /// All stored leads in save order.
    pub async fn list_leads(&self) -> Result<Vec<LeadRecord>, LeadStoreError> {
        self.repo.list().await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::Mutex;

    use pwsdr_types::lead::LeadField;

    /// In-memory repository fake. `fail` makes every append error out.
    #[derive(Default)]
    pub(crate) struct MemoryLeadRepository {
        pub(crate) records: Mutex<Vec<LeadRecord>>,
        pub(crate) fail: bool,
    }

    impl MemoryLeadRepository {
        pub(crate) fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl LeadRepository for MemoryLeadRepository {
        async fn append(&self, record: LeadRecord) -> Result<LeadRecord, LeadStoreError> {
            if self.fail {
                return Err(LeadStoreError::Io("read-only filesystem".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list(&self) -> Result<Vec<LeadRecord>, LeadStoreError> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn save_draft_stamps_and_persists() {
        let service = LeadService::new(MemoryLeadRepository::default());
        let mut draft = LeadDraft::default();
        draft.set(LeadField::Name, "Asha");
        draft.set(LeadField::Interest, "NEET");

        let before = Utc::now();
        let record = service.save_draft(draft).await.unwrap();

        assert!(record.timestamp >= before);
        assert_eq!(record.name.as_deref(), Some("Asha"));
        assert!(record.email.is_none());
        assert_eq!(service.list_leads().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn save_lead_maps_tool_args() {
        let service = LeadService::new(MemoryLeadRepository::default());
        let args = SaveLeadArgs {
            name: "Rahul".to_string(),
            email: "rahul@example.com".to_string(),
            role: "student".to_string(),
            interest: "JEE".to_string(),
            timeline: Some("now".to_string()),
        };

        let record = service.save_lead(args).await.unwrap();
        assert_eq!(record.email.as_deref(), Some("rahul@example.com"));
        assert_eq!(record.timeline.as_deref(), Some("now"));
    }

    #[tokio::test]
    async fn save_failure_propagates() {
        let service = LeadService::new(MemoryLeadRepository::failing());
        let err = service.save_draft(LeadDraft::default()).await.unwrap_err();
        assert!(matches!(err, LeadStoreError::Io(_)));
    }
}
