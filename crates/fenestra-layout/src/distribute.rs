//! Horizontal distribution of panel slots inside the outer frame.

use fenestra_types::{CadModel, Rect};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::EngineConfig;

/// Slots and bars produced by [`distribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Opening inside the outer frame members.
    pub inner: Rect,
    /// Width shared by every main panel.
    pub panel_width: f64,
    /// Main panels, left to right, in the lower band.
    pub panel_rects: Vec<Rect>,
    /// Vertical bars, one before every panel except the first.
    pub mullion_rects: Vec<Rect>,
    pub transom_bar_rect: Option<Rect>,
    /// Upper fixed panels, aligned with the main panels. Empty without a transom.
    pub upper_band_rects: Vec<Rect>,
}

impl Distribution {
    /// Height of the band the main panels live in.
    pub fn lower_band_height(&self) -> f64 {
        self.panel_rects.first().map(|r| r.h).unwrap_or(self.inner.h)
    }

    pub fn upper_band_height(&self) -> f64 {
        self.upper_band_rects.first().map(|r| r.h).unwrap_or(0.0)
    }
}

/// Split the inner opening into main panel slots, mullions, and (with a
/// transom) an upper band.
///
/// With mullions the bars take dedicated space and the panels share the
/// rest equally. Without mullions each gap adds half an outer profile to
/// the panel width; neighbouring panels then overlap as sliding sashes do.
/// The overlap is an approximation and does not guarantee a partition.
#[instrument(
    skip_all,
    fields(width = model.width, height = model.height, panels = model.panel_count)
)]
pub fn distribute(
    model: &CadModel,
    outer_profile_width: f64,
    config: &EngineConfig,
) -> Distribution {
    let p = outer_profile_width;
    let inner = Rect::new(
        p,
        p,
        f64::from(model.width) - 2.0 * p,
        f64::from(model.height) - 2.0 * p,
    );

    let mullion = if model.enable_mullions {
        config.mullion_width
    } else {
        0.0
    };

    let (band_y, band_h, upper_h, transom_bar_rect) = if model.has_transom() {
        let upper_h = f64::from(model.transom_height) - p;
        let transom_y = p + upper_h;
        let bar = config.transom_bar_width;
        let lower_h = inner.h - upper_h - bar;
        let bar_rect = Rect::new(0.0, transom_y, f64::from(model.width), bar);
        (transom_y + bar, lower_h, upper_h, Some(bar_rect))
    } else {
        (inner.y, inner.h, 0.0, None)
    };

    let count = model.panel_count;
    let panel_width = if count == 0 {
        0.0
    } else {
        let n = f64::from(count);
        let gaps = n - 1.0;
        if model.enable_mullions {
            (inner.w - gaps * mullion) / n
        } else {
            (inner.w + gaps * (p / 2.0)) / n
        }
    };

    let mut panel_rects = Vec::with_capacity(count as usize);
    let mut mullion_rects = Vec::with_capacity(count.saturating_sub(1) as usize);
    let mut upper_band_rects = Vec::new();

    for i in 0..count {
        let x = inner.x + f64::from(i) * (panel_width + mullion);

        if i > 0 && model.enable_mullions {
            mullion_rects.push(Rect::new(x - mullion, inner.y, mullion, inner.h));
        }

        panel_rects.push(Rect::new(x, band_y, panel_width, band_h));

        if transom_bar_rect.is_some() {
            upper_band_rects.push(Rect::new(x, inner.y, panel_width, upper_h));
        }
    }

    debug!(
        panel_width,
        mullions = mullion_rects.len(),
        has_transom = transom_bar_rect.is_some(),
        "panels distributed"
    );

    Distribution {
        inner,
        panel_width,
        panel_rects,
        mullion_rects,
        transom_bar_rect,
        upper_band_rects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fenestra_types::{Appearance, PanelConfig};
    use uuid::Uuid;

    fn model(width: u32, height: u32, panels: u32, mullions: bool, transom: u32) -> CadModel {
        CadModel {
            id: Uuid::nil(),
            template_id: "test".to_string(),
            width,
            height,
            panel_count: panels,
            panel_configs: (0..panels).map(PanelConfig::fixed).collect(),
            transom_height: transom,
            enable_mullions: mullions,
            threshold_height: None,
            appearance: Appearance::default(),
        }
    }

    #[test]
    fn test_two_panels_with_mullion() {
        let d = distribute(&model(1200, 1400, 2, true, 0), 65.0, &EngineConfig::default());
        // (1200 - 2 * 65 - 40) / 2
        assert_abs_diff_eq!(d.panel_width, 515.0, epsilon = 1e-9);
        assert_eq!(d.panel_rects.len(), 2);
        assert_eq!(d.mullion_rects, vec![Rect::new(580.0, 65.0, 40.0, 1270.0)]);
        assert_eq!(d.panel_rects[0], Rect::new(65.0, 65.0, 515.0, 1270.0));
        assert_eq!(d.panel_rects[1], Rect::new(620.0, 65.0, 515.0, 1270.0));
        assert!(d.transom_bar_rect.is_none());
        assert!(d.upper_band_rects.is_empty());
    }

    #[test]
    fn test_mullion_partition_fills_inner_width() {
        let d = distribute(&model(2400, 1400, 3, true, 0), 65.0, &EngineConfig::default());
        let total: f64 = d.panel_rects.iter().map(|r| r.w).sum::<f64>()
            + d.mullion_rects.iter().map(|r| r.w).sum::<f64>();
        assert_abs_diff_eq!(total, d.inner.w, epsilon = 1e-6);
        let last = d.panel_rects.last().unwrap();
        assert_abs_diff_eq!(last.right(), d.inner.right(), epsilon = 1e-6);
    }

    #[test]
    fn test_single_panel_has_no_mullions() {
        let d = distribute(&model(900, 1500, 1, true, 0), 75.0, &EngineConfig::default());
        assert!(d.mullion_rects.is_empty());
        assert_abs_diff_eq!(d.panel_width, 750.0, epsilon = 1e-9);
    }

    #[test]
    fn test_without_mullions_panels_overlap() {
        // Sliding window: (1500 - 160 + 1 * 40) / 2 = 690.
        let d = distribute(&model(1500, 1200, 2, false, 0), 80.0, &EngineConfig::default());
        assert!(d.mullion_rects.is_empty());
        assert_abs_diff_eq!(d.panel_width, 690.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d.panel_rects[1].x, 80.0 + 690.0, epsilon = 1e-9);
        assert!(d.panel_rects[0].right() <= d.panel_rects[1].right());
    }

    #[test]
    fn test_transom_splits_inner_height() {
        let config = EngineConfig::default();
        let d = distribute(&model(1200, 1800, 2, true, 500), 65.0, &config);

        let bar = d.transom_bar_rect.unwrap();
        assert_abs_diff_eq!(d.upper_band_height(), 435.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.y, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bar.h, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            d.upper_band_height() + bar.h + d.lower_band_height(),
            d.inner.h,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(d.panel_rects[0].y, 540.0, epsilon = 1e-9);

        assert_eq!(d.upper_band_rects.len(), 2);
        for (upper, main) in d.upper_band_rects.iter().zip(&d.panel_rects) {
            assert_eq!(upper.x, main.x);
            assert_eq!(upper.w, main.w);
            assert_eq!(upper.y, 65.0);
        }
    }

    #[test]
    fn test_mullions_run_full_inner_height_with_transom() {
        let d = distribute(&model(1200, 1800, 2, true, 500), 65.0, &EngineConfig::default());
        let m = d.mullion_rects[0];
        assert_eq!(m.y, d.inner.y);
        assert_eq!(m.h, d.inner.h);
    }

    #[test]
    fn test_zero_mullion_width_is_contiguous() {
        let d = distribute(&model(1200, 1400, 3, true, 0), 65.0, &EngineConfig::contiguous());
        for pair in d.panel_rects.windows(2) {
            assert_abs_diff_eq!(pair[0].right(), pair[1].x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_panels_do_not_panic() {
        let d = distribute(&model(1200, 1400, 0, true, 0), 65.0, &EngineConfig::default());
        assert!(d.panel_rects.is_empty());
        assert!(d.mullion_rects.is_empty());
        assert_eq!(d.panel_width, 0.0);
    }

    #[test]
    fn test_distribution_is_deterministic() {
        let m = model(2000, 2100, 3, true, 600);
        let config = EngineConfig::default();
        assert_eq!(distribute(&m, 70.0, &config), distribute(&m, 70.0, &config));
    }
}
