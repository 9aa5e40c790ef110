// src/application/commands/listings/assign.rs
use super::ListingCommandService;
use crate::{application::error::ApplicationResult, domain::listing::SlugAssignmentSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignSlugsCommand {
    /// Compute and report slugs without persisting them.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignSlugsReport {
    pub summary: SlugAssignmentSummary,
    pub persisted: bool,
}

impl ListingCommandService {
    /// Loads every listing, assigns unique slugs and writes the collection
    /// back in one go. Nothing is written unless every record got a slug.
    pub async fn assign_slugs(
        &self,
        command: AssignSlugsCommand,
    ) -> ApplicationResult<AssignSlugsReport> {
        let mut records = self.repo.load_all().await?;
        let summary = self.slug_service.assign_unique_slugs(&mut records)?;

        tracing::info!(
            processed = summary.processed,
            suffixed = summary.suffixed,
            changed = summary.changed,
            "assigned listing slugs"
        );

        if command.dry_run {
            tracing::info!("dry run, listings left untouched");
            return Ok(AssignSlugsReport {
                summary,
                persisted: false,
            });
        }

        self.repo.replace_all(&records).await?;
        Ok(AssignSlugsReport {
            summary,
            persisted: true,
        })
    }
}
