use std::collections::HashSet;

use fenestra_layout::{EngineConfig, Field};
use fenestra_types::{ProductTemplate, ProductType};
use tracing::warn;

use crate::builtin::builtin_templates;
use crate::errors::LoadError;
use crate::metadata::CatalogMetadata;

/// An immutable set of product templates plus the engine constants they
/// are meant to be laid out with.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    metadata: CatalogMetadata,
    engine: EngineConfig,
    templates: Vec<ProductTemplate>,
}

impl Catalog {
    /// Assemble a catalog, rejecting inverted rules and duplicate ids.
    ///
    /// Defaults that fall outside their own rules are accepted with a
    /// warning; the validator will flag the resulting models.
    pub fn new(
        metadata: CatalogMetadata,
        engine: EngineConfig,
        templates: Vec<ProductTemplate>,
    ) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(LoadError::DuplicateId(template.id.clone()));
            }
            check_rules(template)?;
            warn_on_defaults(template);
        }
        Ok(Self {
            metadata,
            engine,
            templates,
        })
    }

    /// The built-in series with default engine constants.
    pub fn builtin() -> Self {
        Self {
            metadata: CatalogMetadata::new("Built-in"),
            engine: EngineConfig::default(),
            templates: builtin_templates(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProductTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn by_type(&self, product_type: ProductType) -> impl Iterator<Item = &ProductTemplate> {
        self.templates
            .iter()
            .filter(move |t| t.product_type == product_type)
    }

    pub fn templates(&self) -> &[ProductTemplate] {
        &self.templates
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn check_rules(template: &ProductTemplate) -> Result<(), LoadError> {
    let rules = &template.rules;
    for (field, bounds) in [
        (Field::Width, &rules.width),
        (Field::Height, &rules.height),
        (Field::Panels, &rules.panels),
    ] {
        if bounds.is_inverted() {
            return Err(LoadError::InvertedRule {
                template_id: template.id.clone(),
                field,
            });
        }
    }
    Ok(())
}

fn warn_on_defaults(template: &ProductTemplate) {
    let rules = &template.rules;
    if !rules.width.contains(template.default_size.width)
        || !rules.height.contains(template.default_size.height)
    {
        warn!(
            template = %template.id,
            width = template.default_size.width,
            height = template.default_size.height,
            "default size outside template rules"
        );
    }
    if !rules.panels.contains(template.default_panels) {
        warn!(
            template = %template.id,
            panels = template.default_panels,
            "default panel count outside template rules"
        );
    }
}
