//! Assembly of the full layout tree for one unit.

use fenestra_types::{CadModel, GlassType, Opening, ProductTemplate, ProfileColor, Rect};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::distribute::distribute;
use crate::frame::{mitred_frame, MitredFrame};
use crate::indicator::{opening_glyph, Glyph};

/// Which frame a set of mitred members belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameRole {
    Outer,
    Sash { config_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMember {
    pub role: FrameRole,
    pub frame: MitredFrame,
}

/// One glazed region of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRegion {
    pub rect: Rect,
    /// Visible glass. Equal to `rect` unless the panel has a sash frame.
    pub glass_rect: Rect,
    /// Index of the main panel this region belongs to. Upper band regions
    /// share the index of the main panel below them.
    pub config_index: usize,
    pub is_upper_fixed_band: bool,
    pub has_sash_frame: bool,
    /// Always [`Opening::Fixed`] for upper band regions.
    pub opening: Opening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningGlyph {
    pub panel_config_index: usize,
    pub glyph: Option<Glyph>,
}

/// Finish options passed through untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleHints {
    pub profile_color: ProfileColor,
    pub glass_type: GlassType,
    pub glass_label: String,
    pub show_opening_indicators: bool,
}

/// Complete 2-D decomposition of a unit. Rebuilt from scratch on every
/// model change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTree {
    pub outer_frame: FrameMember,
    /// One per operable main panel, in panel order.
    pub sash_frames: Vec<FrameMember>,
    pub mullions: Vec<Rect>,
    pub transom: Option<Rect>,
    /// Main regions interleaved with their upper band region, if any.
    pub panels: Vec<PanelRegion>,
    /// One per main panel.
    pub glyphs: Vec<OpeningGlyph>,
    pub style: StyleHints,
}

impl LayoutTree {
    /// Outer frame followed by every sash frame.
    pub fn frames(&self) -> impl Iterator<Item = &FrameMember> {
        std::iter::once(&self.outer_frame).chain(self.sash_frames.iter())
    }

    pub fn main_panels(&self) -> impl Iterator<Item = &PanelRegion> {
        self.panels.iter().filter(|p| !p.is_upper_fixed_band)
    }

    pub fn upper_panels(&self) -> impl Iterator<Item = &PanelRegion> {
        self.panels.iter().filter(|p| p.is_upper_fixed_band)
    }

    /// Main panel for a config index.
    pub fn panel(&self, config_index: usize) -> Option<&PanelRegion> {
        self.main_panels().find(|p| p.config_index == config_index)
    }

    pub fn glyph(&self, config_index: usize) -> Option<&Glyph> {
        self.glyphs
            .iter()
            .find(|g| g.panel_config_index == config_index)
            .and_then(|g| g.glyph.as_ref())
    }
}

/// Derive the full layout of `model` built from `template`.
///
/// Runs for invalid models too; out-of-range inputs give degenerate but
/// well-formed geometry.
#[instrument(
    skip_all,
    fields(
        template = %template.id,
        width = model.width,
        height = model.height,
        panels = model.panel_count
    )
)]
pub fn compute_layout(
    model: &CadModel,
    template: &ProductTemplate,
    config: &EngineConfig,
) -> LayoutTree {
    let profile = f64::from(template.profile_width);
    let outer_rect = Rect::from_size(f64::from(model.width), f64::from(model.height));
    let outer_frame = FrameMember {
        role: FrameRole::Outer,
        frame: mitred_frame(&outer_rect, profile),
    };

    let dist = distribute(model, profile, config);

    let mut panels = Vec::with_capacity(dist.panel_rects.len() + dist.upper_band_rects.len());
    let mut sash_frames = Vec::new();
    let mut glyphs = Vec::with_capacity(dist.panel_rects.len());

    for (i, rect) in dist.panel_rects.iter().enumerate() {
        let opening = model.opening_at(i);
        let has_sash_frame = opening.is_operable();

        let glass_rect = if has_sash_frame {
            let sash = mitred_frame(rect, config.sash_profile_width);
            sash_frames.push(FrameMember {
                role: FrameRole::Sash { config_index: i },
                frame: sash,
            });
            sash.face
        } else {
            *rect
        };

        panels.push(PanelRegion {
            rect: *rect,
            glass_rect,
            config_index: i,
            is_upper_fixed_band: false,
            has_sash_frame,
            opening,
        });
        glyphs.push(OpeningGlyph {
            panel_config_index: i,
            glyph: opening_glyph(rect, &opening),
        });

        if let Some(upper) = dist.upper_band_rects.get(i) {
            panels.push(PanelRegion {
                rect: *upper,
                glass_rect: *upper,
                config_index: i,
                is_upper_fixed_band: true,
                has_sash_frame: false,
                opening: Opening::Fixed,
            });
        }
    }

    let appearance = &model.appearance;
    let style = StyleHints {
        profile_color: appearance.profile_color,
        glass_type: appearance.glass_type,
        glass_label: appearance.glass_type.spec_label().to_string(),
        show_opening_indicators: appearance.show_opening_indicators,
    };

    info!(
        panels = panels.len(),
        sashes = sash_frames.len(),
        mullions = dist.mullion_rects.len(),
        has_transom = dist.transom_bar_rect.is_some(),
        "layout computed"
    );

    LayoutTree {
        outer_frame,
        sash_frames,
        mullions: dist.mullion_rects,
        transom: dist.transom_bar_rect,
        panels,
        glyphs,
        style,
    }
}
