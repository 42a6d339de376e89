use fenestra_layout::{
    compute_layout, price, validate, EngineConfig, LayoutTree, Quote, ValidationResult,
};
use fenestra_types::{CadModel, ProductTemplate};
use serde::Serialize;
use tracing::{info, instrument};

/// Everything derived from a model: geometry, rule check and price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub layout: LayoutTree,
    pub validation: ValidationResult,
    pub quote: Quote,
}

/// Validate, lay out and price `model`.
///
/// Layout and price are produced for invalid models too; callers decide
/// what to do with them based on `validation`.
#[instrument(skip_all, fields(template = %template.id, model = %model.id))]
pub fn evaluate(model: &CadModel, template: &ProductTemplate, config: &EngineConfig) -> Evaluation {
    let validation = validate(model, &template.rules, config);
    let layout = compute_layout(model, template, config);
    let quote = price(
        model.width,
        model.height,
        model.panel_count,
        template.base_price_per_sqm,
    );
    info!(
        is_valid = validation.is_valid,
        errors = validation.error_count(),
        area = quote.area,
        unit_price = quote.unit_price,
        "model evaluated"
    );
    Evaluation {
        layout,
        validation,
        quote,
    }
}
