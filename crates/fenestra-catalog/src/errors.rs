use fenestra_layout::Field;

/// Errors while reading or assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse catalog: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("catalog version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("template '{template_id}' has {field} minimum above its maximum")]
    InvertedRule { template_id: String, field: Field },

    #[error("template id '{0}' appears more than once")]
    DuplicateId(String),
}

/// Errors while writing a catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize catalog: {0}")]
    SerializeError(String),
}
