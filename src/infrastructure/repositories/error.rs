use crate::domain::errors::DomainError;
use std::io;
use std::path::Path;

pub fn map_io(path: &Path, action: &str, err: io::Error) -> DomainError {
    DomainError::DataAccess(format!("failed to {action} {}: {err}", path.display()))
}

pub fn map_json(path: &Path, err: serde_json::Error) -> DomainError {
    match err.classify() {
        serde_json::error::Category::Io => {
            DomainError::DataAccess(format!("failed to read {}: {err}", path.display()))
        }
        serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
            DomainError::DataAccess(format!("{} is not valid JSON: {err}", path.display()))
        }
        serde_json::error::Category::Data => DomainError::DataAccess(format!(
            "{} is not a list of listing records: {err}",
            path.display()
        )),
    }
}
