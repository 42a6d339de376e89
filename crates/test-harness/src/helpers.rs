//! Helper functions: error type and model fixtures.

use fenestra_catalog::Catalog;
use fenestra_designer::model_from_template;
use fenestra_types::*;
use uuid::Uuid;

use crate::oracle::OracleVerdict;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("template not found: {id}")]
    TemplateNotFound { id: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("design error: {0}")]
    Design(#[from] fenestra_designer::DesignError),
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// A built-in template by id.
pub fn builtin_template(id: &str) -> Result<ProductTemplate, HarnessError> {
    Catalog::builtin()
        .get(id)
        .cloned()
        .ok_or_else(|| HarnessError::TemplateNotFound { id: id.to_string() })
}

/// The default model of a built-in template, together with the template.
pub fn default_model(id: &str) -> Result<(CadModel, ProductTemplate), HarnessError> {
    let template = builtin_template(id)?;
    Ok((model_from_template(&template), template))
}

/// A model of `template` with the given size and one panel per opening.
/// Mullions follow the template rules; no transom.
pub fn model_with(
    template: &ProductTemplate,
    width: u32,
    height: u32,
    openings: &[Opening],
) -> CadModel {
    CadModel {
        id: Uuid::new_v4(),
        template_id: template.id.clone(),
        width,
        height,
        panel_count: openings.len() as u32,
        panel_configs: openings
            .iter()
            .enumerate()
            .map(|(i, o)| PanelConfig::new(i as u32, *o))
            .collect(),
        transom_height: 0,
        enable_mullions: template.rules.allow_mullions,
        threshold_height: None,
        appearance: Appearance::default(),
    }
}

pub fn casement(direction: Lateral) -> Opening {
    Opening::Casement { direction }
}

pub fn sliding(direction: Lateral) -> Opening {
    Opening::Sliding { direction }
}

/// Turn the first failed verdict into an error.
pub fn require_all(verdicts: &[OracleVerdict]) -> Result<(), HarnessError> {
    match verdicts.iter().find(|v| !v.passed) {
        Some(v) => Err(HarnessError::OracleFailure {
            oracle: v.oracle_name.clone(),
            detail: v.detail.clone(),
        }),
        None => Ok(()),
    }
}
