use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::opening::Opening;
use crate::template::{GlassType, ProfileColor};

/// Opening configuration of one main panel slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Position of the slot, counted from the left starting at 0.
    pub index: u32,
    #[serde(flatten)]
    pub opening: Opening,
}

impl PanelConfig {
    pub fn new(index: u32, opening: Opening) -> Self {
        Self { index, opening }
    }

    pub fn fixed(index: u32) -> Self {
        Self {
            index,
            opening: Opening::Fixed,
        }
    }
}

/// Finish options. The engine copies these into its output as style hints
/// and never reads them for geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub profile_color: ProfileColor,
    pub glass_type: GlassType,
    pub glass_color: String,
    pub show_opening_indicators: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            profile_color: ProfileColor::default(),
            glass_type: GlassType::default(),
            glass_color: "blue".to_string(),
            show_opening_indicators: true,
        }
    }
}

/// The parametric description of one window or door unit.
///
/// Dimensions are millimeters. A model is replaced, never mutated, when
/// the user edits it; layouts are derived from it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadModel {
    pub id: Uuid,
    pub template_id: String,
    pub width: u32,
    pub height: u32,
    /// Number of main vertical slots.
    pub panel_count: u32,
    /// One entry per main slot, ordered by index.
    pub panel_configs: Vec<PanelConfig>,
    /// Height of the upper fixed band measured from the outer top edge.
    /// Zero means no transom.
    pub transom_height: u32,
    pub enable_mullions: bool,
    /// Door sill height, when the unit has a threshold.
    #[serde(default)]
    pub threshold_height: Option<u32>,
    #[serde(default)]
    pub appearance: Appearance,
}

impl CadModel {
    pub fn has_transom(&self) -> bool {
        self.transom_height > 0
    }

    pub fn panel_config(&self, index: usize) -> Option<&PanelConfig> {
        self.panel_configs.get(index)
    }

    /// Opening at `index`, falling back to fixed when the config list is
    /// shorter than the panel count.
    pub fn opening_at(&self, index: usize) -> Opening {
        self.panel_config(index)
            .map(|c| c.opening)
            .unwrap_or(Opening::Fixed)
    }
}
