use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::{map_io, map_json};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{ListingRecord, ListingRepository};

/// Listing collection stored as a pretty-printed JSON array on disk.
///
/// Writes go to a hidden sibling file that is renamed over the original, so
/// a failed write never leaves a truncated collection behind.
pub struct JsonFileListingRepository {
    path: PathBuf,
}

impl JsonFileListingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "listings".into(), |name| name.to_string_lossy());
        self.path.with_file_name(format!(".{file_name}.tmp"))
    }
}

#[async_trait]
impl ListingRepository for JsonFileListingRepository {
    async fn load_all(&self) -> DomainResult<Vec<ListingRecord>> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|err| map_io(&self.path, "read", err))?;
        let records: Vec<ListingRecord> =
            serde_json::from_slice(&raw).map_err(|err| map_json(&self.path, err))?;
        tracing::info!(path = %self.path.display(), count = records.len(), "loaded listings");
        Ok(records)
    }

    async fn replace_all(&self, records: &[ListingRecord]) -> DomainResult<()> {
        let mut body = serde_json::to_string_pretty(records).map_err(|err| {
            DomainError::DataAccess(format!("failed to serialize listings: {err}"))
        })?;
        body.push('\n');

        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, body.as_bytes()).await {
            let _ = fs::remove_file(&staging).await;
            return Err(map_io(&staging, "write", err));
        }
        if let Err(err) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(map_io(&self.path, "replace", err));
        }

        tracing::info!(path = %self.path.display(), count = records.len(), "wrote listings");
        Ok(())
    }
}
