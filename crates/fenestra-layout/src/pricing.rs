use serde::{Deserialize, Serialize};

/// Surcharge per panel on top of the area price.
pub const COMPLEXITY_PER_PANEL: f64 = 0.05;

const MM2_PER_M2: f64 = 1_000_000.0;

/// Area and price of a single unit, both rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Square meters.
    pub area: f64,
    pub unit_price: f64,
}

/// Price one unit from its overall size.
///
/// Inputs are taken as given: zero sizes or counts produce a zero or
/// base-rate quote, not an error.
pub fn price(width: u32, height: u32, panel_count: u32, base_price_per_sqm: f64) -> Quote {
    let area = round2(f64::from(width) * f64::from(height) / MM2_PER_M2);
    let unit_price = round2(area * base_price_per_sqm * complexity_factor(panel_count));
    Quote { area, unit_price }
}

pub fn complexity_factor(panel_count: u32) -> f64 {
    1.0 + COMPLEXITY_PER_PANEL * f64::from(panel_count)
}

/// Round to two decimal places the way a fixed-point display does.
///
/// Rounding works on the exact binary value, not on `value * 100`, so
/// 1.115 (stored as 1.11499...) becomes 1.11. A value exactly halfway
/// between two cents can only be a multiple of 1/8 and rounds away from
/// zero.
pub fn round2(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0).round() / 100.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}
