use fenestra_layout::EngineConfig;
use fenestra_types::ProductTemplate;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::errors::LoadError;
use crate::metadata::CatalogMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFileRaw {
    pub format: String,
    pub version: u32,
    pub catalog: CatalogMetadata,
    /// Missing section means default engine constants.
    #[serde(default)]
    pub engine: EngineConfig,
    pub templates: Vec<ProductTemplate>,
}

/// Deserialize a catalog from a JSON string.
///
/// Validates the format identifier and version, then the templates
/// themselves (see [`Catalog::new`]).
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_catalog(json: &str) -> Result<Catalog, LoadError> {
    let raw: CatalogFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let catalog = Catalog::new(raw.catalog, raw.engine, raw.templates)?;
    info!(
        name = %catalog.metadata().name,
        templates = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
