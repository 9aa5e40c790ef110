// src/domain/listing/services/mod.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::entity::{LOCATION_KEY, ListingRecord, TITLE_KEY};
use crate::domain::listing::value_objects::ListingSlug;

/// Counts gathered while assigning slugs to one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlugAssignmentSummary {
    pub processed: usize,
    /// Records whose base slug was already claimed and got a `-N` suffix.
    pub suffixed: usize,
    /// Records whose stored slug differs from the one assigned.
    pub changed: usize,
}

/// Domain service responsible for producing unique slugs for listings.
pub struct ListingSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ListingSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Normalized `title-location` of a record, before collision resolution.
    /// May be empty when neither field has a word character.
    pub fn derive_base_slug(&self, record: &ListingRecord) -> DomainResult<String> {
        let title = record
            .title()
            .ok_or_else(|| DomainError::data_access(format!("missing text field `{TITLE_KEY}`")))?;
        let location = record.location().ok_or_else(|| {
            DomainError::data_access(format!("missing text field `{LOCATION_KEY}`"))
        })?;
        Ok(self.generator.slugify(&format!("{title}-{location}")))
    }

    /// Assigns a unique slug to every record, earlier records taking priority.
    ///
    /// All slugs are computed before any record is touched, so on error the
    /// slice is left exactly as it was passed in. The previously stored slug
    /// is never used as input.
    pub fn assign_unique_slugs(
        &self,
        records: &mut [ListingRecord],
    ) -> DomainResult<SlugAssignmentSummary> {
        let mut claimed: HashSet<String> = HashSet::with_capacity(records.len());
        // Suffixes below the stored value are known to be claimed already.
        let mut next_suffix: HashMap<String, u64> = HashMap::new();
        let mut assigned = Vec::with_capacity(records.len());
        let mut summary = SlugAssignmentSummary::default();

        for (index, record) in records.iter().enumerate() {
            let base = self
                .derive_base_slug(record)
                .map_err(|err| match err {
                    DomainError::DataAccess(reason) => {
                        DomainError::data_access(format!("record {index}: {reason}"))
                    }
                    other => other,
                })?;

            let candidate = if claimed.contains(&base) {
                let counter = next_suffix.entry(base.clone()).or_insert(1);
                let candidate = loop {
                    let candidate = format!("{base}-{counter}");
                    *counter += 1;
                    if !claimed.contains(&candidate) {
                        break candidate;
                    }
                };
                tracing::debug!(index, base = %base, slug = %candidate, "resolved slug collision");
                summary.suffixed += 1;
                candidate
            } else {
                base
            };

            let slug = ListingSlug::new(candidate.clone())?;
            if record.slug() != Some(slug.as_str()) {
                summary.changed += 1;
            }
            claimed.insert(candidate);
            assigned.push(slug);
        }

        for (record, slug) in records.iter_mut().zip(assigned) {
            record.set_slug(slug);
        }
        summary.processed = records.len();
        Ok(summary)
    }
}
