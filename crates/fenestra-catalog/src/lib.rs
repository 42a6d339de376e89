//! Product rule catalog: the built-in template set and its JSON file form.

pub mod builtin;
pub mod catalog;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;

pub use builtin::builtin_templates;
pub use catalog::Catalog;
pub use errors::{LoadError, SaveError};
pub use load::load_catalog;
pub use metadata::CatalogMetadata;
pub use save::{save_catalog, FORMAT_ID, FORMAT_VERSION};
