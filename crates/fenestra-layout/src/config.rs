//! Engine-wide constants, passed explicitly into every entry point.

use serde::{Deserialize, Serialize};

/// Fixed member sizes and validation thresholds.
///
/// All lengths are millimeters. Missing fields take their default when
/// deserialized, so a catalog file may override only what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Width of a vertical mullion bar between main panels.
    pub mullion_width: f64,
    /// Height of the horizontal transom bar.
    pub transom_bar_width: f64,
    /// Member thickness of an operable sash frame.
    pub sash_profile_width: f64,
    /// Smallest non-zero transom height accepted by the validator.
    pub min_transom_height: u32,
    /// Space a transom must leave below it, measured from the overall height.
    pub min_lower_band_height: u32,
    /// Length tolerance for geometric comparisons.
    pub tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mullion_width: 40.0,
            transom_bar_width: 40.0,
            sash_profile_width: 40.0,
            min_transom_height: 300,
            min_lower_band_height: 300,
            tolerance: 1e-6,
        }
    }
}

impl EngineConfig {
    /// Config with zero-width mullions, so enabled mullions leave the panels
    /// contiguous.
    pub fn contiguous() -> Self {
        Self {
            mullion_width: 0.0,
            ..Self::default()
        }
    }

    pub fn lengths_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance
    }
}
