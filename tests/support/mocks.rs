// tests/support/mocks.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use listing_slugs::domain::errors::{DomainError, DomainResult};
use listing_slugs::domain::listing::{ListingRecord, ListingRepository};

pub struct InMemoryListingRepo {
    records: Mutex<Vec<ListingRecord>>,
    writes: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryListingRepo {
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            writes: AtomicUsize::new(0),
            fail_writes: false,
        }
    }

    /// Repository whose `replace_all` always fails.
    pub fn failing_writes(records: Vec<ListingRecord>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(records)
        }
    }

    pub fn snapshot(&self) -> Vec<ListingRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepo {
    async fn load_all(&self) -> DomainResult<Vec<ListingRecord>> {
        Ok(self.snapshot())
    }

    async fn replace_all(&self, records: &[ListingRecord]) -> DomainResult<()> {
        if self.fail_writes {
            return Err(DomainError::DataAccess("disk full".into()));
        }
        *self.records.lock().unwrap() = records.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Repository whose source cannot be read.
pub struct UnreadableListingRepo;

#[async_trait]
impl ListingRepository for UnreadableListingRepo {
    async fn load_all(&self) -> DomainResult<Vec<ListingRecord>> {
        Err(DomainError::DataAccess("permission denied".into()))
    }

    async fn replace_all(&self, _records: &[ListingRecord]) -> DomainResult<()> {
        panic!("replace_all must not run after a failed load");
    }
}
