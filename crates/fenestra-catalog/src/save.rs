use fenestra_layout::EngineConfig;
use fenestra_types::ProductTemplate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::SaveError;
use crate::metadata::CatalogMetadata;

/// Format identifier written to every catalog file.
pub const FORMAT_ID: &str = "fenestra-catalog";

/// Current catalog file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogFile<'a> {
    /// Format identifier.
    pub format: &'a str,
    /// Format version number.
    pub version: u32,
    pub catalog: &'a CatalogMetadata,
    /// Engine constant overrides.
    pub engine: &'a EngineConfig,
    pub templates: &'a [ProductTemplate],
}

/// Serialize a catalog to a pretty-printed JSON string.
pub fn save_catalog(catalog: &Catalog) -> Result<String, SaveError> {
    let file = CatalogFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        catalog: catalog.metadata(),
        engine: catalog.engine(),
        templates: catalog.templates(),
    };
    serde_json::to_string_pretty(&file).map_err(|e| SaveError::SerializeError(e.to_string()))
}
