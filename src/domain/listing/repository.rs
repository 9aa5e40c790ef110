use crate::domain::errors::DomainResult;
use crate::domain::listing::entity::ListingRecord;
use async_trait::async_trait;

/// Persisted collection of listings, read and replaced as a whole.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn load_all(&self) -> DomainResult<Vec<ListingRecord>>;
    async fn replace_all(&self, records: &[ListingRecord]) -> DomainResult<()>;
}
