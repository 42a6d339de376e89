use serde::{Deserialize, Serialize};

use crate::opening::OpeningType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Window,
    Door,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameMaterial {
    Aluminum,
    /// Thermally broken aluminum.
    BrokenBridge,
    Upvc,
    WoodClad,
    Steel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileColor {
    #[default]
    DarkGrey,
    White,
    Champagne,
    Black,
    Wood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    Single,
    #[default]
    Double,
    Triple,
    Laminated,
}

impl GlassType {
    /// Build-up label printed on drawings (pane thicknesses and air gaps).
    pub fn spec_label(self) -> &'static str {
        match self {
            GlassType::Single => "5mm",
            GlassType::Double => "5+12A+5",
            GlassType::Triple => "5+9A+5+9A+5",
            GlassType::Laminated => "5+0.76+5",
        }
    }
}

/// Inclusive range for one dimension of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Per-template dimensional limits and structural options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRules {
    pub width: Bounds,
    pub height: Bounds,
    pub panels: Bounds,
    pub allow_transom: bool,
    pub allow_mullions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A product series from the rule catalog. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub id: String,
    pub name: String,
    pub product_type: ProductType,
    pub material: FrameMaterial,
    /// Outer frame member thickness in millimeters.
    pub profile_width: u32,
    pub default_size: Size,
    pub default_panels: u32,
    /// Opening assigned to every panel of a freshly created model.
    #[serde(default = "default_opening")]
    pub default_opening: OpeningType,
    pub rules: ProductRules,
    pub base_price_per_sqm: f64,
}

fn default_opening() -> OpeningType {
    OpeningType::Casement
}
