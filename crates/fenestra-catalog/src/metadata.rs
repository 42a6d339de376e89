use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog metadata stored alongside the templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Human-readable catalog name.
    pub name: String,
    /// When the catalog was first created.
    pub created: DateTime<Utc>,
    /// When the catalog was last modified.
    pub modified: DateTime<Utc>,
}

impl CatalogMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    /// Bump the modification time to now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
