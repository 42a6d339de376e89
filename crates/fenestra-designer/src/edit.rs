//! Model edits. Each takes the current model and returns a new one.

use fenestra_types::{Appearance, CadModel, OpeningDirection, OpeningType, PanelConfig};

/// Errors from designer edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    #[error("panel {index} out of range (model has {count} panels)")]
    PanelOutOfRange { index: usize, count: usize },

    #[error("template '{template_id}' does not allow mullions")]
    MullionsNotAllowed { template_id: String },

    #[error("template not found: {0}")]
    TemplateNotFound(String),
}

/// Resize the panel list to `count` slots.
///
/// Existing openings are kept by position; added slots are fixed. The list
/// is rebuilt, so indices always run `0..count`.
pub fn with_panel_count(model: &CadModel, count: u32) -> CadModel {
    let panel_configs = (0..count)
        .map(|i| PanelConfig::new(i, model.opening_at(i as usize)))
        .collect();
    CadModel {
        panel_count: count,
        panel_configs,
        ..model.clone()
    }
}

/// Change one panel's opening type, coercing its direction to one the new
/// type supports.
pub fn with_panel_type(
    model: &CadModel,
    index: usize,
    kind: OpeningType,
) -> Result<CadModel, DesignError> {
    update_panel(model, index, |config| {
        config.opening = config.opening.with_kind(kind);
    })
}

/// Change one panel's opening direction. Directions the current type
/// cannot carry are coerced, and ignored for fixed, awning and hopper panels.
pub fn with_panel_direction(
    model: &CadModel,
    index: usize,
    direction: OpeningDirection,
) -> Result<CadModel, DesignError> {
    update_panel(model, index, |config| {
        config.opening = config.opening.with_direction(direction);
    })
}

pub fn with_dimensions(model: &CadModel, width: u32, height: u32) -> CadModel {
    CadModel {
        width,
        height,
        ..model.clone()
    }
}

pub fn with_transom_height(model: &CadModel, transom_height: u32) -> CadModel {
    CadModel {
        transom_height,
        ..model.clone()
    }
}

pub fn with_mullions(model: &CadModel, enable_mullions: bool) -> CadModel {
    CadModel {
        enable_mullions,
        ..model.clone()
    }
}

pub fn with_appearance(model: &CadModel, appearance: Appearance) -> CadModel {
    CadModel {
        appearance,
        ..model.clone()
    }
}

fn update_panel(
    model: &CadModel,
    index: usize,
    edit: impl FnOnce(&mut PanelConfig),
) -> Result<CadModel, DesignError> {
    let mut next = model.clone();
    let count = next.panel_configs.len();
    let config = next
        .panel_configs
        .get_mut(index)
        .ok_or(DesignError::PanelOutOfRange { index, count })?;
    edit(config);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenestra_types::{Lateral, Opening};
    use uuid::Uuid;

    fn model() -> CadModel {
        CadModel {
            id: Uuid::nil(),
            template_id: "win-casement-65".to_string(),
            width: 1200,
            height: 1400,
            panel_count: 2,
            panel_configs: vec![
                PanelConfig::new(0, Opening::Casement { direction: Lateral::Left }),
                PanelConfig::new(1, Opening::Casement { direction: Lateral::Right }),
            ],
            transom_height: 0,
            enable_mullions: true,
            threshold_height: None,
            appearance: Appearance::default(),
        }
    }

    #[test]
    fn test_grow_panels_adds_fixed() {
        let m = with_panel_count(&model(), 4);
        assert_eq!(m.panel_count, 4);
        assert_eq!(m.panel_configs.len(), 4);
        assert_eq!(m.opening_at(1), Opening::Casement { direction: Lateral::Right });
        assert_eq!(m.panel_configs[2], PanelConfig::fixed(2));
        assert_eq!(m.panel_configs[3], PanelConfig::fixed(3));
    }

    #[test]
    fn test_shrink_panels_keeps_prefix() {
        let m = with_panel_count(&model(), 1);
        assert_eq!(
            m.panel_configs,
            vec![PanelConfig::new(0, Opening::Casement { direction: Lateral::Left })]
        );
    }

    #[test]
    fn test_panel_count_renumbers_indices() {
        let mut m = model();
        m.panel_configs[1].index = 7;
        let m = with_panel_count(&m, 3);
        let indices: Vec<u32> = m.panel_configs.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_edits_leave_input_untouched() {
        let original = model();
        let _ = with_panel_count(&original, 3);
        let _ = with_panel_type(&original, 0, OpeningType::Fixed).unwrap();
        assert_eq!(original, model());
    }

    #[test]
    fn test_type_change_coerces_direction() {
        let m = with_panel_type(&model(), 0, OpeningType::Awning).unwrap();
        assert_eq!(m.opening_at(0), Opening::Awning);
        assert_eq!(m.opening_at(0).direction(), Some(OpeningDirection::Top));

        let m = with_panel_type(&m, 0, OpeningType::Sliding).unwrap();
        assert_eq!(m.opening_at(0), Opening::Sliding { direction: Lateral::Left });

        let m = with_panel_type(&model(), 1, OpeningType::Hopper).unwrap();
        assert_eq!(m.opening_at(1).direction(), Some(OpeningDirection::Bottom));

        // Lateral direction survives a lateral-to-lateral change.
        let m = with_panel_type(&model(), 1, OpeningType::TiltTurn).unwrap();
        assert_eq!(m.opening_at(1), Opening::TiltTurn { direction: Lateral::Right });
    }

    #[test]
    fn test_direction_change() {
        let m = with_panel_direction(&model(), 0, OpeningDirection::BiRight).unwrap();
        assert_eq!(m.opening_at(0), Opening::Casement { direction: Lateral::BiRight });

        let m = with_panel_direction(&model(), 0, OpeningDirection::Top).unwrap();
        assert_eq!(m.opening_at(0), Opening::Casement { direction: Lateral::Left });
    }

    #[test]
    fn test_out_of_range_panel() {
        let err = with_panel_type(&model(), 5, OpeningType::Fixed).unwrap_err();
        assert_eq!(err, DesignError::PanelOutOfRange { index: 5, count: 2 });
        assert_eq!(err.to_string(), "panel 5 out of range (model has 2 panels)");
    }

    #[test]
    fn test_scalar_edits() {
        let m = with_dimensions(&model(), 900, 1500);
        assert_eq!((m.width, m.height), (900, 1500));
        assert_eq!(with_transom_height(&m, 450).transom_height, 450);
        assert!(!with_mullions(&m, false).enable_mullions);

        let look = Appearance {
            glass_color: "clear".to_string(),
            ..Appearance::default()
        };
        assert_eq!(with_appearance(&m, look.clone()).appearance, look);
    }
}
