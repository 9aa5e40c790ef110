// src/infrastructure/repositories/mod.rs
pub mod error;
mod json_listing;

pub use json_listing::JsonFileListingRepository;
