pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::ListingRecord;
pub use repository::ListingRepository;
pub use services::{ListingSlugService, SlugAssignmentSummary};
pub use value_objects::ListingSlug;
