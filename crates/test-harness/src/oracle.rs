//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a test collect every broken invariant of a layout in one pass.

use fenestra_layout::{compute_layout, safe_truncation, EngineConfig, LayoutTree};
use fenestra_types::{CadModel, ProductTemplate, Rect};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

/// Width and height inside the outer frame members.
fn inner_size(model: &CadModel, template: &ProductTemplate) -> (f64, f64) {
    let p = f64::from(template.profile_width);
    (
        f64::from(model.width) - 2.0 * p,
        f64::from(model.height) - 2.0 * p,
    )
}

// ── Distribution Oracles ────────────────────────────────────────────────────

/// Check that panels and mullions exactly fill the inner width.
///
/// Only meaningful with mullions enabled; without them panels overlap by
/// construction and the oracle passes vacuously.
pub fn check_mullion_partition(
    tree: &LayoutTree,
    model: &CadModel,
    template: &ProductTemplate,
    config: &EngineConfig,
) -> OracleVerdict {
    if !model.enable_mullions || model.panel_count == 0 {
        return OracleVerdict::pass(
            "mullion_partition",
            "mullions disabled; no partition required".to_string(),
        );
    }

    let (inner_w, _) = inner_size(model, template);
    let panels: f64 = tree.main_panels().map(|p| p.rect.w).sum();
    let bars: f64 = tree.mullions.iter().map(|m| m.w).sum();
    let diff = (panels + bars - inner_w).abs();

    if diff <= config.tolerance {
        OracleVerdict::pass_val(
            "mullion_partition",
            format!("panels {} + mullions {} = inner {}", panels, bars, inner_w),
            diff,
        )
    } else {
        OracleVerdict::fail_val(
            "mullion_partition",
            format!(
                "panels {} + mullions {} != inner {} (off by {})",
                panels, bars, inner_w, diff
            ),
            diff,
        )
    }
}

/// Check mullion count: one between each pair of panels when enabled,
/// none otherwise.
pub fn check_mullion_count(tree: &LayoutTree, model: &CadModel) -> OracleVerdict {
    let expected = if model.enable_mullions {
        model.panel_count.saturating_sub(1) as usize
    } else {
        0
    };
    let actual = tree.mullions.len();

    if actual == expected {
        OracleVerdict::pass("mullion_count", format!("{} mullions", actual))
    } else {
        OracleVerdict::fail(
            "mullion_count",
            format!("expected {} mullions, got {}", expected, actual),
        )
    }
}

/// Check the transom split: upper band, bar and lower band add up to the
/// inner height, or with no transom, that neither bar nor upper band exists.
pub fn check_transom_partition(
    tree: &LayoutTree,
    model: &CadModel,
    template: &ProductTemplate,
    config: &EngineConfig,
) -> OracleVerdict {
    let upper: Vec<&Rect> = tree.upper_panels().map(|p| &p.rect).collect();

    if !model.has_transom() {
        return if tree.transom.is_none() && upper.is_empty() {
            OracleVerdict::pass("transom_partition", "no transom, no upper band".to_string())
        } else {
            OracleVerdict::fail(
                "transom_partition",
                format!(
                    "transom height 0 but bar={} upper regions={}",
                    tree.transom.is_some(),
                    upper.len()
                ),
            )
        };
    }

    let Some(bar) = tree.transom else {
        return OracleVerdict::fail(
            "transom_partition",
            format!("transom height {} but no bar", model.transom_height),
        );
    };
    let (Some(upper_rect), Some(lower)) = (upper.first(), tree.main_panels().next()) else {
        return OracleVerdict::fail(
            "transom_partition",
            "transom present but band regions missing".to_string(),
        );
    };

    let (_, inner_h) = inner_size(model, template);
    let total = upper_rect.h + bar.h + lower.rect.h;
    let diff = (total - inner_h).abs();

    if diff <= config.tolerance {
        OracleVerdict::pass_val(
            "transom_partition",
            format!(
                "upper {} + bar {} + lower {} = inner {}",
                upper_rect.h, bar.h, lower.rect.h, inner_h
            ),
            diff,
        )
    } else {
        OracleVerdict::fail_val(
            "transom_partition",
            format!("bands sum to {} but inner height is {}", total, inner_h),
            diff,
        )
    }
}

// ── Frame Oracles ───────────────────────────────────────────────────────────

/// Check every frame's mitre truncation against half its rectangle, and
/// that members plus face tile the rectangle.
pub fn check_mitre_bounds(tree: &LayoutTree, config: &EngineConfig) -> OracleVerdict {
    let mut bad = Vec::new();
    let mut count = 0usize;

    for member in tree.frames() {
        count += 1;
        let frame = &member.frame;
        let t = frame.truncation;
        // The framed rectangle is the face grown back by the truncation.
        let rect = frame.face.inset(-t);

        let within = t <= rect.w / 2.0 + config.tolerance && t <= rect.h / 2.0 + config.tolerance;
        let tiled = (frame.member_area() + frame.face.area() - rect.area()).abs()
            <= config.tolerance * rect.area().abs().max(1.0);
        if !within || !tiled {
            bad.push(format!("{:?}: t={} rect={}x{}", member.role, t, rect.w, rect.h));
        }
    }

    if bad.is_empty() {
        OracleVerdict::pass("mitre_bounds", format!("all {} frames within bounds", count))
    } else {
        OracleVerdict::fail(
            "mitre_bounds",
            format!("{} bad frames: {:?}", bad.len(), &bad[..bad.len().min(5)]),
        )
    }
}

/// Check that sash frames exist exactly on operable main panels and that
/// glass is inset by the sash profile there, and flush elsewhere.
pub fn check_sash_insets(tree: &LayoutTree, config: &EngineConfig) -> OracleVerdict {
    let mut bad = Vec::new();

    for panel in &tree.panels {
        let should_have_sash = !panel.is_upper_fixed_band && panel.opening.is_operable();
        if panel.has_sash_frame != should_have_sash {
            bad.push(format!(
                "panel {} (upper={}): has_sash_frame={} for {:?}",
                panel.config_index, panel.is_upper_fixed_band, panel.has_sash_frame, panel.opening
            ));
            continue;
        }

        let expected = if panel.has_sash_frame {
            panel
                .rect
                .inset(safe_truncation(&panel.rect, config.sash_profile_width))
        } else {
            panel.rect
        };
        if !panel.glass_rect.approx_eq(&expected, config.tolerance) {
            bad.push(format!(
                "panel {}: glass {:?} expected {:?}",
                panel.config_index, panel.glass_rect, expected
            ));
        }
    }

    let sashes = tree.main_panels().filter(|p| p.has_sash_frame).count();
    if sashes != tree.sash_frames.len() {
        bad.push(format!(
            "{} sash panels but {} sash frames",
            sashes,
            tree.sash_frames.len()
        ));
    }

    if bad.is_empty() {
        OracleVerdict::pass("sash_insets", format!("{} sashes consistent", sashes))
    } else {
        OracleVerdict::fail(
            "sash_insets",
            format!("{} problems: {:?}", bad.len(), &bad[..bad.len().min(5)]),
        )
    }
}

// ── Indicator Oracles ───────────────────────────────────────────────────────

/// Check there is one glyph slot per main panel and every glyph point lies
/// inside its panel.
pub fn check_glyphs_inside_panels(tree: &LayoutTree, config: &EngineConfig) -> OracleVerdict {
    let mains = tree.main_panels().count();
    if tree.glyphs.len() != mains {
        return OracleVerdict::fail(
            "glyphs_inside_panels",
            format!("{} glyph slots for {} main panels", tree.glyphs.len(), mains),
        );
    }

    let tol = config.tolerance;
    let mut outside = Vec::new();
    for slot in &tree.glyphs {
        let (Some(glyph), Some(panel)) = (&slot.glyph, tree.panel(slot.panel_config_index)) else {
            continue;
        };
        let r = panel.rect;
        for p in glyph.path.points() {
            let inside = p.x >= r.x - tol
                && p.x <= r.right() + tol
                && p.y >= r.y - tol
                && p.y <= r.bottom() + tol;
            if !inside {
                outside.push((slot.panel_config_index, p.x, p.y));
            }
        }
    }

    if outside.is_empty() {
        OracleVerdict::pass(
            "glyphs_inside_panels",
            format!("{} glyph slots checked", tree.glyphs.len()),
        )
    } else {
        OracleVerdict::fail(
            "glyphs_inside_panels",
            format!(
                "{} points outside their panel: {:?}",
                outside.len(),
                &outside[..outside.len().min(5)]
            ),
        )
    }
}

// ── Aggregate ───────────────────────────────────────────────────────────────

/// Lay out `model` and run every layout oracle against the result.
pub fn verify_layout(
    model: &CadModel,
    template: &ProductTemplate,
    config: &EngineConfig,
) -> Vec<OracleVerdict> {
    let tree = compute_layout(model, template, config);
    vec![
        check_mullion_partition(&tree, model, template, config),
        check_mullion_count(&tree, model),
        check_transom_partition(&tree, model, template, config),
        check_mitre_bounds(&tree, config),
        check_sash_insets(&tree, config),
        check_glyphs_inside_panels(&tree, config),
    ]
}

/// Failed verdicts only.
pub fn failures(verdicts: &[OracleVerdict]) -> Vec<&OracleVerdict> {
    verdicts.iter().filter(|v| !v.passed).collect()
}
