// src/application/commands/listings/service.rs
use std::sync::Arc;

use crate::domain::listing::{ListingRepository, ListingSlugService};

pub struct ListingCommandService {
    pub(super) repo: Arc<dyn ListingRepository>,
    pub(super) slug_service: Arc<ListingSlugService>,
}

impl ListingCommandService {
    pub fn new(repo: Arc<dyn ListingRepository>, slug_service: Arc<ListingSlugService>) -> Self {
        Self { repo, slug_service }
    }
}
