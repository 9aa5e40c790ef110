// src/config.rs
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listings_path: PathBuf,
    dry_run: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listings_path() -> PathBuf {
    PathBuf::from("public/data/properties.json")
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listings_path = match lookup("LISTINGS_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Invalid("LISTINGS_PATH cannot be empty".into()));
            }
            Some(path) => PathBuf::from(path),
            None => default_listings_path(),
        };

        let dry_run = lookup("LISTING_SLUGS_DRY_RUN")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            listings_path,
            dry_run,
        })
    }

    pub fn listings_path(&self) -> &Path {
        &self.listings_path
    }

    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}
