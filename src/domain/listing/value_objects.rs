use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Unique routing key of a listing: lower-case ASCII word characters
/// separated by single hyphens.
///
/// A listing whose title and location hold no word characters has the empty
/// slug, and later ones sharing that base get `-1`, `-2`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingSlug(String);

impl ListingSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "slug `{value}` contains characters outside [a-z0-9_-]"
            )));
        }
        let suffixed_empty_base = value
            .strip_prefix('-')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
        let stray_leading = value.starts_with('-') && !suffixed_empty_base;
        if stray_leading || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(format!(
                "slug `{value}` has a stray hyphen"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingSlug> for String {
    fn from(value: ListingSlug) -> Self {
        value.0
    }
}
