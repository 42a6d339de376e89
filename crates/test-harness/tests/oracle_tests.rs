//! Tests for verification oracles.

use fenestra_layout::{compute_layout, EngineConfig};
use fenestra_types::*;
use test_harness::helpers::*;
use test_harness::oracle::*;

fn casement_pair() -> (CadModel, ProductTemplate) {
    let template = builtin_template("win-casement-65").unwrap();
    let model = model_with(
        &template,
        1200,
        1400,
        &[casement(Lateral::Left), casement(Lateral::Right)],
    );
    (model, template)
}

// ── Passing layouts ─────────────────────────────────────────────────────────

#[test]
fn all_oracles_pass_for_casement_pair() {
    let (model, template) = casement_pair();
    let verdicts = verify_layout(&model, &template, &EngineConfig::default());
    assert_eq!(verdicts.len(), 6);
    assert!(failures(&verdicts).is_empty(), "{:?}", failures(&verdicts));
    require_all(&verdicts).unwrap();
}

#[test]
fn mullion_partition_reports_residual() {
    let (model, template) = casement_pair();
    let config = EngineConfig::default();
    let tree = compute_layout(&model, &template, &config);
    let verdict = check_mullion_partition(&tree, &model, &template, &config);
    assert!(verdict.passed, "{}", verdict.detail);
    assert!(verdict.value.unwrap() <= config.tolerance);
}

#[test]
fn transom_oracle_passes_with_transom() {
    let (mut model, template) = casement_pair();
    model.height = 1800;
    model.transom_height = 500;
    let config = EngineConfig::default();
    let tree = compute_layout(&model, &template, &config);
    let verdict = check_transom_partition(&tree, &model, &template, &config);
    assert!(verdict.passed, "{}", verdict.detail);
}

// ── Tampered layouts fail ───────────────────────────────────────────────────

#[test]
fn widened_panel_breaks_partition() {
    let (model, template) = casement_pair();
    let config = EngineConfig::default();
    let mut tree = compute_layout(&model, &template, &config);
    tree.panels[0].rect.w += 1.0;

    let verdict = check_mullion_partition(&tree, &model, &template, &config);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("off by"));
}

#[test]
fn missing_mullion_detected() {
    let (model, template) = casement_pair();
    let mut tree = compute_layout(&model, &template, &EngineConfig::default());
    tree.mullions.clear();
    assert!(!check_mullion_count(&tree, &model).passed);
}

#[test]
fn flush_glass_on_sash_detected() {
    let (model, template) = casement_pair();
    let config = EngineConfig::default();
    let mut tree = compute_layout(&model, &template, &config);
    tree.panels[0].glass_rect = tree.panels[0].rect;

    let verdict = check_sash_insets(&tree, &config);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("panel 0"));
}

#[test]
fn stray_transom_bar_detected() {
    let (model, template) = casement_pair();
    let config = EngineConfig::default();
    let mut tree = compute_layout(&model, &template, &config);
    tree.transom = Some(Rect::new(0.0, 500.0, 1200.0, 40.0));
    assert!(!check_transom_partition(&tree, &model, &template, &config).passed);
}

#[test]
fn dropped_glyph_slot_detected() {
    let (model, template) = casement_pair();
    let config = EngineConfig::default();
    let mut tree = compute_layout(&model, &template, &config);
    tree.glyphs.pop();
    assert!(!check_glyphs_inside_panels(&tree, &config).passed);
}

#[test]
fn require_all_names_first_failure() {
    let (model, template) = casement_pair();
    let mut tree = compute_layout(&model, &template, &EngineConfig::default());
    tree.mullions.clear();
    let verdicts = vec![check_mullion_count(&tree, &model)];

    let err = require_all(&verdicts).unwrap_err();
    match err {
        test_harness::HarnessError::OracleFailure { oracle, .. } => {
            assert_eq!(oracle, "mullion_count")
        }
        other => panic!("unexpected error: {other}"),
    }
}
