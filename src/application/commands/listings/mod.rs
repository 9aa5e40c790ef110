// src/application/commands/listings/mod.rs
mod assign;
mod service;

pub use assign::{AssignSlugsCommand, AssignSlugsReport};
pub use service::ListingCommandService;
