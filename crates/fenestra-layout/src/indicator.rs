//! Opening-direction glyphs drawn over a panel.
//!
//! Glyphs are bare geometry. Stroke width, dash pattern and color are up
//! to the renderer.

use std::fmt;

use fenestra_types::{Lateral, Opening, Point2d, Rect};
use serde::{Deserialize, Serialize};

/// Fraction of the panel's shorter side used for a sliding arrow.
pub const ARROW_SCALE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphKind {
    /// Open triangle; the apex marks the handle side.
    Triangle,
    /// Shaft plus one arrowhead in the sliding direction.
    Arrow,
}

/// A set of open polylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPath {
    pub subpaths: Vec<Vec<Point2d>>,
}

impl GlyphPath {
    pub fn points(&self) -> impl Iterator<Item = &Point2d> {
        self.subpaths.iter().flatten()
    }
}

/// Path commands in the `M x y L x y` form used by vector formats.
impl fmt::Display for GlyphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for subpath in &self.subpaths {
            for (i, p) in subpath.iter().enumerate() {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                let cmd = if i == 0 { 'M' } else { 'L' };
                write!(f, "{} {} {}", cmd, p.x, p.y)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub kind: GlyphKind,
    pub path: GlyphPath,
}

/// Glyph for a panel of the given opening, or `None` when no indicator is
/// defined.
///
/// Fixed panels get nothing. Hopper, folding and tilt-turn sashes, and
/// bidirectional casement or sliding sashes, have no glyph yet.
pub fn opening_glyph(rect: &Rect, opening: &Opening) -> Option<Glyph> {
    match opening {
        Opening::Fixed => None,
        Opening::Casement { direction } => casement_triangle(rect, *direction),
        Opening::Awning => Some(awning_triangle(rect)),
        Opening::Sliding { direction } => sliding_arrow(rect, *direction),
        Opening::Hopper | Opening::Folding { .. } | Opening::TiltTurn { .. } => None,
    }
}

/// Hinge on the `hinge` side; the apex sits mid-height on the opposite side.
fn casement_triangle(rect: &Rect, hinge: Lateral) -> Option<Glyph> {
    let Rect { x, y, w, h } = *rect;
    let points = match hinge {
        Lateral::Left => vec![
            Point2d::new(x, y),
            Point2d::new(x + w, y + h / 2.0),
            Point2d::new(x, y + h),
        ],
        Lateral::Right => vec![
            Point2d::new(x + w, y),
            Point2d::new(x, y + h / 2.0),
            Point2d::new(x + w, y + h),
        ],
        Lateral::BiLeft | Lateral::BiRight => return None,
    };
    Some(Glyph {
        kind: GlyphKind::Triangle,
        path: GlyphPath {
            subpaths: vec![points],
        },
    })
}

/// Top-hung: apex at top-mid, base on the bottom corners.
fn awning_triangle(rect: &Rect) -> Glyph {
    let Rect { x, y, w, h } = *rect;
    Glyph {
        kind: GlyphKind::Triangle,
        path: GlyphPath {
            subpaths: vec![vec![
                Point2d::new(x, y + h),
                Point2d::new(x + w / 2.0, y),
                Point2d::new(x + w, y + h),
            ]],
        },
    }
}

fn sliding_arrow(rect: &Rect, direction: Lateral) -> Option<Glyph> {
    let sign = match direction {
        Lateral::Left => -1.0,
        Lateral::Right => 1.0,
        Lateral::BiLeft | Lateral::BiRight => return None,
    };
    let cx = rect.x + rect.w / 2.0;
    let cy = rect.y + rect.h / 2.0;
    let s = rect.w.min(rect.h) * ARROW_SCALE;

    let tip = Point2d::new(cx + sign * s, cy);
    let tail = Point2d::new(cx - sign * s, cy);
    let barb_x = tip.x - sign * s / 2.0;

    Some(Glyph {
        kind: GlyphKind::Arrow,
        path: GlyphPath {
            subpaths: vec![
                vec![tail, tip],
                vec![
                    Point2d::new(barb_x, cy - s / 2.0),
                    tip,
                    Point2d::new(barb_x, cy + s / 2.0),
                ],
            ],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 1000.0)
    }

    #[test]
    fn test_casement_left_points_right() {
        let glyph =
            opening_glyph(&tall(), &Opening::Casement { direction: Lateral::Left }).unwrap();
        assert_eq!(glyph.kind, GlyphKind::Triangle);
        assert_eq!(
            glyph.path.subpaths,
            vec![vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(400.0, 500.0),
                Point2d::new(0.0, 1000.0),
            ]]
        );
    }

    #[test]
    fn test_casement_right_is_mirrored() {
        let glyph =
            opening_glyph(&tall(), &Opening::Casement { direction: Lateral::Right }).unwrap();
        assert_eq!(glyph.path.subpaths[0][1], Point2d::new(0.0, 500.0));
        assert_eq!(glyph.path.subpaths[0][0], Point2d::new(400.0, 0.0));
    }

    #[test]
    fn test_awning_apex_at_top() {
        let glyph = opening_glyph(&Rect::new(50.0, 50.0, 700.0, 700.0), &Opening::Awning).unwrap();
        assert_eq!(glyph.path.subpaths[0][1], Point2d::new(400.0, 50.0));
        assert_eq!(glyph.path.subpaths[0][0], Point2d::new(50.0, 750.0));
        assert_eq!(glyph.path.subpaths[0][2], Point2d::new(750.0, 750.0));
    }

    #[test]
    fn test_sliding_arrow_scales_with_short_side() {
        let glyph =
            opening_glyph(&tall(), &Opening::Sliding { direction: Lateral::Right }).unwrap();
        assert_eq!(glyph.kind, GlyphKind::Arrow);
        // s = 40, centered at (200, 500).
        assert_eq!(
            glyph.path.subpaths[0],
            vec![Point2d::new(160.0, 500.0), Point2d::new(240.0, 500.0)]
        );
        assert_eq!(
            glyph.path.subpaths[1],
            vec![
                Point2d::new(220.0, 480.0),
                Point2d::new(240.0, 500.0),
                Point2d::new(220.0, 520.0),
            ]
        );
    }

    #[test]
    fn test_sliding_left_points_left() {
        let glyph = opening_glyph(&tall(), &Opening::Sliding { direction: Lateral::Left }).unwrap();
        assert_eq!(glyph.path.subpaths[0][1], Point2d::new(160.0, 500.0));
        assert_eq!(glyph.path.subpaths[1][0], Point2d::new(180.0, 480.0));
    }

    #[test]
    fn test_types_without_glyph() {
        let none = [
            Opening::Fixed,
            Opening::Hopper,
            Opening::Folding { direction: Lateral::Left },
            Opening::TiltTurn { direction: Lateral::Right },
            Opening::Casement { direction: Lateral::BiLeft },
            Opening::Sliding { direction: Lateral::BiRight },
        ];
        for opening in none {
            assert!(opening_glyph(&tall(), &opening).is_none(), "{opening:?}");
        }
    }

    #[test]
    fn test_path_display() {
        let glyph =
            opening_glyph(&tall(), &Opening::Casement { direction: Lateral::Left }).unwrap();
        assert_eq!(glyph.path.to_string(), "M 0 0 L 400 500 L 0 1000");

        let arrow =
            opening_glyph(&tall(), &Opening::Sliding { direction: Lateral::Right }).unwrap();
        assert_eq!(
            arrow.path.to_string(),
            "M 160 500 L 240 500 M 220 480 L 240 500 L 220 520"
        );
    }
}
