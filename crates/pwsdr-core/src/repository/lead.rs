//! Lead repository trait definition.

use pwsdr_types::error::LeadStoreError;
use pwsdr_types::lead::LeadRecord;

/// Repository trait for lead persistence.
///
/// Implementations live in pwsdr-infra (e.g., JsonFileLeadRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait LeadRepository: Send + Sync {
    /// Append a lead. Returns the record as stored.
    ///
    /// Implementations may move the timestamp forward so that stored
    /// timestamps never decrease in file order.
    fn append(
        &self,
        record: LeadRecord,
    ) -> impl std::future::Future<Output = Result<LeadRecord, LeadStoreError>> + Send;

    /// All stored leads in save order.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<LeadRecord>, LeadStoreError>> + Send;
}
