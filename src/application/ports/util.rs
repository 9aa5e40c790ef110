// src/application/ports/util.rs
/// Turns free text into a slug base.
///
/// Implementations must be pure and idempotent, and return only `[a-z0-9_-]`
/// with no leading, trailing or doubled hyphen. The empty string is a valid
/// result.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
