//! The product series shipped with the configurator.

use fenestra_types::{
    Bounds, FrameMaterial, OpeningType, ProductRules, ProductTemplate, ProductType, Size,
};

struct Series {
    id: &'static str,
    name: &'static str,
    product_type: ProductType,
    material: FrameMaterial,
    profile_width: u32,
    default_size: (u32, u32),
    default_panels: u32,
    default_opening: OpeningType,
    width: (u32, u32),
    height: (u32, u32),
    panels: (u32, u32),
    allow_transom: bool,
    allow_mullions: bool,
    base_price_per_sqm: f64,
}

impl Series {
    fn template(&self) -> ProductTemplate {
        ProductTemplate {
            id: self.id.to_string(),
            name: self.name.to_string(),
            product_type: self.product_type,
            material: self.material,
            profile_width: self.profile_width,
            default_size: Size {
                width: self.default_size.0,
                height: self.default_size.1,
            },
            default_panels: self.default_panels,
            default_opening: self.default_opening,
            rules: ProductRules {
                width: Bounds::new(self.width.0, self.width.1),
                height: Bounds::new(self.height.0, self.height.1),
                panels: Bounds::new(self.panels.0, self.panels.1),
                allow_transom: self.allow_transom,
                allow_mullions: self.allow_mullions,
            },
            base_price_per_sqm: self.base_price_per_sqm,
        }
    }
}

const SERIES: [Series; 11] = [
    // Windows
    Series {
        id: "win-system-75",
        name: "75 Series System Window (Tilt & Turn)",
        product_type: ProductType::Window,
        material: FrameMaterial::BrokenBridge,
        profile_width: 75,
        default_size: (900, 1500),
        default_panels: 1,
        default_opening: OpeningType::Casement,
        width: (600, 1800),
        height: (800, 2400),
        panels: (1, 2),
        allow_transom: true,
        allow_mullions: true,
        base_price_per_sqm: 1200.0,
    },
    Series {
        id: "win-casement-65",
        name: "65 Series Thermal-Break Casement Window",
        product_type: ProductType::Window,
        material: FrameMaterial::BrokenBridge,
        profile_width: 65,
        default_size: (1200, 1400),
        default_panels: 2,
        default_opening: OpeningType::Casement,
        width: (600, 2400),
        height: (600, 2000),
        panels: (1, 3),
        allow_transom: true,
        allow_mullions: true,
        base_price_per_sqm: 980.0,
    },
    Series {
        id: "win-upvc-60",
        name: "60 Series uPVC Casement Window (White)",
        product_type: ProductType::Window,
        material: FrameMaterial::Upvc,
        profile_width: 60,
        default_size: (1200, 1400),
        default_panels: 2,
        default_opening: OpeningType::Casement,
        width: (600, 2400),
        height: (600, 2000),
        panels: (1, 3),
        allow_transom: true,
        allow_mullions: true,
        base_price_per_sqm: 680.0,
    },
    Series {
        id: "win-sliding-80",
        name: "80 Series Aluminum Sliding Window",
        product_type: ProductType::Window,
        material: FrameMaterial::Aluminum,
        profile_width: 80,
        default_size: (1500, 1200),
        default_panels: 2,
        default_opening: OpeningType::Sliding,
        width: (1000, 3000),
        height: (800, 1800),
        panels: (2, 4),
        allow_transom: true,
        allow_mullions: false,
        base_price_per_sqm: 800.0,
    },
    Series {
        id: "win-awning",
        name: "50 Series Top-Hung Window",
        product_type: ProductType::Window,
        material: FrameMaterial::Aluminum,
        profile_width: 50,
        default_size: (800, 800),
        default_panels: 1,
        default_opening: OpeningType::Awning,
        width: (500, 1500),
        height: (500, 1200),
        panels: (1, 1),
        allow_transom: false,
        allow_mullions: false,
        base_price_per_sqm: 950.0,
    },
    Series {
        id: "win-folding",
        name: "85 Series Folding Window",
        product_type: ProductType::Window,
        material: FrameMaterial::BrokenBridge,
        profile_width: 85,
        default_size: (2400, 1500),
        default_panels: 3,
        default_opening: OpeningType::Folding,
        width: (1500, 4000),
        height: (1000, 1800),
        panels: (3, 6),
        allow_transom: false,
        allow_mullions: false,
        base_price_per_sqm: 1800.0,
    },
    // Doors
    Series {
        id: "door-sliding-120",
        name: "120 Series Heavy Sliding Door",
        product_type: ProductType::Door,
        material: FrameMaterial::Aluminum,
        profile_width: 120,
        default_size: (2400, 2200),
        default_panels: 2,
        default_opening: OpeningType::Sliding,
        width: (1600, 6000),
        height: (1900, 3000),
        panels: (2, 4),
        allow_transom: true,
        allow_mullions: false,
        base_price_per_sqm: 1500.0,
    },
    Series {
        id: "door-lift-sliding",
        name: "150 Series Lift-Slide Door",
        product_type: ProductType::Door,
        material: FrameMaterial::BrokenBridge,
        profile_width: 150,
        default_size: (3000, 2400),
        default_panels: 2,
        default_opening: OpeningType::Sliding,
        width: (2000, 6000),
        height: (2000, 3000),
        panels: (2, 2),
        allow_transom: false,
        allow_mullions: false,
        base_price_per_sqm: 2800.0,
    },
    Series {
        id: "door-casement-45",
        name: "45 Series Slim Casement Door",
        product_type: ProductType::Door,
        material: FrameMaterial::Aluminum,
        profile_width: 45,
        default_size: (800, 2100),
        default_panels: 1,
        default_opening: OpeningType::Casement,
        width: (600, 1000),
        height: (1900, 2400),
        panels: (1, 1),
        allow_transom: true,
        allow_mullions: false,
        base_price_per_sqm: 1100.0,
    },
    Series {
        id: "door-folding-75",
        name: "75 Series Folding Door",
        product_type: ProductType::Door,
        material: FrameMaterial::BrokenBridge,
        profile_width: 75,
        default_size: (3000, 2400),
        default_panels: 3,
        default_opening: OpeningType::Folding,
        width: (1800, 8000),
        height: (2000, 3000),
        panels: (3, 8),
        allow_transom: true,
        allow_mullions: false,
        base_price_per_sqm: 2200.0,
    },
    Series {
        id: "door-entry",
        name: "100 Series Wood-Clad Entry Door",
        product_type: ProductType::Door,
        material: FrameMaterial::WoodClad,
        profile_width: 100,
        default_size: (1000, 2200),
        default_panels: 1,
        default_opening: OpeningType::Fixed,
        width: (900, 1200),
        height: (2000, 2600),
        panels: (1, 1),
        allow_transom: true,
        allow_mullions: false,
        base_price_per_sqm: 3500.0,
    },
];

/// Every built-in template, windows first.
pub fn builtin_templates() -> Vec<ProductTemplate> {
    SERIES.iter().map(Series::template).collect()
}
