//! Fresh models built from a template's defaults.

use fenestra_types::{
    Appearance, CadModel, FrameMaterial, Opening, OpeningDirection, OpeningType, PanelConfig,
    ProductTemplate, ProductType, ProfileColor,
};
use uuid::Uuid;

/// Sill height given to every new door.
pub const DOOR_THRESHOLD_HEIGHT: u32 = 30;

/// Build the starting model for `template`.
///
/// Every panel gets the template's default opening. Casement panels
/// alternate their hinge side, starting on the left. Mullions start on
/// only where the rules allow them, so multi-panel sliding and folding
/// series open on the overlapping-panel widths rather than a mullion split.
pub fn model_from_template(template: &ProductTemplate) -> CadModel {
    let panel_configs = (0..template.default_panels)
        .map(|i| PanelConfig::new(i, default_opening(template.default_opening, i)))
        .collect();

    let threshold_height = match template.product_type {
        ProductType::Door => Some(DOOR_THRESHOLD_HEIGHT),
        ProductType::Window => None,
    };

    CadModel {
        id: Uuid::new_v4(),
        template_id: template.id.clone(),
        width: template.default_size.width,
        height: template.default_size.height,
        panel_count: template.default_panels,
        panel_configs,
        transom_height: 0,
        enable_mullions: template.rules.allow_mullions,
        threshold_height,
        appearance: Appearance {
            profile_color: default_profile_color(template.material),
            ..Appearance::default()
        },
    }
}

/// Opening for the panel at `index` of a fresh model.
pub fn default_opening(kind: OpeningType, index: u32) -> Opening {
    let direction = if kind == OpeningType::Casement && index % 2 == 1 {
        OpeningDirection::Right
    } else {
        OpeningDirection::Left
    };
    Opening::from_parts(kind, direction)
}

pub fn default_profile_color(material: FrameMaterial) -> ProfileColor {
    match material {
        FrameMaterial::Upvc => ProfileColor::White,
        FrameMaterial::WoodClad => ProfileColor::Wood,
        FrameMaterial::Aluminum | FrameMaterial::BrokenBridge | FrameMaterial::Steel => {
            ProfileColor::DarkGrey
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenestra_catalog::Catalog;
    use fenestra_types::{GlassType, Lateral};

    fn model(id: &str) -> CadModel {
        let catalog = Catalog::builtin();
        model_from_template(catalog.get(id).unwrap())
    }

    #[test]
    fn test_casement_hinges_alternate() {
        let m = model("win-casement-65");
        assert_eq!(m.panel_count, 2);
        assert_eq!(
            m.panel_configs,
            vec![
                PanelConfig::new(0, Opening::Casement { direction: Lateral::Left }),
                PanelConfig::new(1, Opening::Casement { direction: Lateral::Right }),
            ]
        );
        assert_eq!((m.width, m.height), (1200, 1400));
        assert!(m.enable_mullions);
        assert_eq!(m.threshold_height, None);
    }

    #[test]
    fn test_family_openings() {
        let sliding = model("win-sliding-80");
        assert!(sliding
            .panel_configs
            .iter()
            .all(|c| c.opening == Opening::Sliding { direction: Lateral::Left }));
        assert!(!sliding.enable_mullions);

        assert_eq!(model("win-awning").opening_at(0), Opening::Awning);
        assert_eq!(
            model("win-folding").opening_at(2),
            Opening::Folding { direction: Lateral::Left }
        );
        assert_eq!(model("door-entry").opening_at(0), Opening::Fixed);
    }

    #[test]
    fn test_profile_color_follows_material() {
        assert_eq!(model("win-upvc-60").appearance.profile_color, ProfileColor::White);
        assert_eq!(model("door-entry").appearance.profile_color, ProfileColor::Wood);
        assert_eq!(model("win-casement-65").appearance.profile_color, ProfileColor::DarkGrey);
    }

    #[test]
    fn test_doors_get_threshold() {
        let door = model("door-casement-45");
        assert_eq!(door.threshold_height, Some(DOOR_THRESHOLD_HEIGHT));
        assert_eq!(door.transom_height, 0);
        assert_eq!(door.appearance.glass_type, GlassType::Double);
        assert_eq!(door.appearance.glass_color, "blue");
        assert!(door.appearance.show_opening_indicators);
    }

    #[test]
    fn test_fresh_ids() {
        let catalog = Catalog::builtin();
        let t = catalog.get("win-upvc-60").unwrap();
        assert_ne!(model_from_template(t).id, model_from_template(t).id);
    }
}
