//! Constraint validation of a model against its template's rules.

use std::collections::BTreeMap;
use std::fmt;

use fenestra_types::{Bounds, CadModel, ProductRules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::EngineConfig;

/// Model field an error is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Width,
    Height,
    Panels,
    TransomHeight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Panels => "panels",
            Field::TransomHeight => "transom_height",
        };
        f.write_str(name)
    }
}

/// A single rule a model breaks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintViolation {
    #[error("value {actual} is below the minimum of {min}")]
    BelowMinimum { min: u32, actual: u32 },

    #[error("value {actual} is above the maximum of {max}")]
    AboveMaximum { max: u32, actual: u32 },

    #[error("this product series does not allow a transom")]
    TransomNotAllowed,

    #[error("transom height {actual}mm is below the minimum of {min}mm")]
    TransomTooShort { min: u32, actual: u32 },

    #[error("transom height {actual}mm must leave at least {min_lower}mm below it in a {height}mm unit")]
    TransomTooTall {
        actual: u32,
        height: u32,
        min_lower: u32,
    },
}

/// Outcome of [`validate`]: at most one violation per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<Field, ConstraintViolation>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&ConstraintViolation> {
        self.errors.get(&field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ValidationResult: valid={}, errors={}", self.is_valid, self.errors.len())?;
        for (field, violation) in &self.errors {
            writeln!(f, "  {field}: {violation}")?;
        }
        Ok(())
    }
}

/// Check a model against the template's rules.
///
/// Never fails: every problem lands in `errors`. The transom checks run in
/// order and each one overwrites the previous transom error, so only the
/// last failing transom check is reported.
#[instrument(
    skip_all,
    fields(width = model.width, height = model.height, panels = model.panel_count)
)]
pub fn validate(model: &CadModel, rules: &ProductRules, config: &EngineConfig) -> ValidationResult {
    let mut errors = BTreeMap::new();

    check_bounds(Field::Width, model.width, &rules.width, &mut errors);
    check_bounds(Field::Height, model.height, &rules.height, &mut errors);
    check_bounds(Field::Panels, model.panel_count, &rules.panels, &mut errors);

    let transom = model.transom_height;
    if transom > 0 && !rules.allow_transom {
        errors.insert(Field::TransomHeight, ConstraintViolation::TransomNotAllowed);
    }
    if transom > 0 && transom < config.min_transom_height {
        errors.insert(
            Field::TransomHeight,
            ConstraintViolation::TransomTooShort {
                min: config.min_transom_height,
                actual: transom,
            },
        );
    }
    // Signed: the limit goes negative for units shorter than the lower band.
    let limit = i64::from(model.height) - i64::from(config.min_lower_band_height);
    if i64::from(transom) >= limit {
        errors.insert(
            Field::TransomHeight,
            ConstraintViolation::TransomTooTall {
                actual: transom,
                height: model.height,
                min_lower: config.min_lower_band_height,
            },
        );
    }

    let is_valid = errors.is_empty();
    debug!(is_valid, error_count = errors.len(), "validation complete");

    ValidationResult { is_valid, errors }
}

fn check_bounds(
    field: Field,
    value: u32,
    bounds: &Bounds,
    errors: &mut BTreeMap<Field, ConstraintViolation>,
) {
    if value < bounds.min {
        errors.insert(
            field,
            ConstraintViolation::BelowMinimum {
                min: bounds.min,
                actual: value,
            },
        );
    } else if value > bounds.max {
        errors.insert(
            field,
            ConstraintViolation::AboveMaximum {
                max: bounds.max,
                actual: value,
            },
        );
    }
}
