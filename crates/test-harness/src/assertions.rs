//! Assertion helpers with diagnostic output.
//!
//! Every failure carries expected vs actual and the caller's context label.

use fenestra_layout::{Field, LayoutTree, ValidationResult};
use fenestra_types::Rect;

use crate::helpers::HarnessError;

/// Assert the model passed validation.
pub fn assert_valid(result: &ValidationResult, ctx: &str) -> Result<(), HarnessError> {
    if result.is_valid {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected a valid model, got {}", ctx, result),
        })
    }
}

/// Assert validation failed on `field`.
pub fn assert_invalid_field(
    result: &ValidationResult,
    field: Field,
    ctx: &str,
) -> Result<(), HarnessError> {
    if result.has_error(field) && !result.is_valid {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected an error on {}, got {}", ctx, field, result),
        })
    }
}

/// Assert the number of main and upper band regions.
pub fn assert_panel_counts(
    tree: &LayoutTree,
    expected_main: usize,
    expected_upper: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let main = tree.main_panels().count();
    let upper = tree.upper_panels().count();
    if main == expected_main && upper == expected_upper {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} main / {} upper regions, got {} / {}",
                ctx, expected_main, expected_upper, main, upper
            ),
        })
    }
}

/// Assert two rectangles match component-wise within `tol`.
pub fn assert_rect_approx(
    actual: &Rect,
    expected: &Rect,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if actual.approx_eq(expected, tol) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected {:?}, got {:?}", ctx, expected, actual),
        })
    }
}

/// Assert every main panel has the same width, within `tol`, equal to `expected`.
pub fn assert_panel_width(
    tree: &LayoutTree,
    expected: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let widths: Vec<f64> = tree.main_panels().map(|p| p.rect.w).collect();
    if widths.iter().all(|w| (w - expected).abs() <= tol) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected panel width {}, got {:?}", ctx, expected, widths),
        })
    }
}
