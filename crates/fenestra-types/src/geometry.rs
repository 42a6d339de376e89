use serde::{Deserialize, Serialize};

/// A point in the elevation plane, in millimeters. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Widths and heights are not clamped: a rectangle computed for an
/// out-of-range model may be empty or inverted, and callers decide what
/// to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size at the origin.
    pub fn from_size(w: f64, h: f64) -> Self {
        Self { x: 0.0, y: 0.0, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point2d {
        Point2d::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Shrink the rectangle by `d` on all four sides.
    pub fn inset(&self, d: f64) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            w: self.w - 2.0 * d,
            h: self.h - 2.0 * d,
        }
    }

    /// Corners in clockwise drawing order starting at the top-left.
    pub fn corners(&self) -> [Point2d; 4] {
        [
            Point2d::new(self.x, self.y),
            Point2d::new(self.right(), self.y),
            Point2d::new(self.right(), self.bottom()),
            Point2d::new(self.x, self.bottom()),
        ]
    }

    /// True when the rectangle has no positive area.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Component-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.w - other.w).abs() <= tol
            && (self.h - other.h).abs() <= tol
    }
}

/// A four-sided polygon with vertices in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub points: [Point2d; 4],
}

impl Quad {
    pub fn new(a: Point2d, b: Point2d, c: Point2d, d: Point2d) -> Self {
        Self {
            points: [a, b, c, d],
        }
    }

    /// Unsigned area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let p = &self.points;
        let mut twice = 0.0;
        for i in 0..4 {
            let a = p[i];
            let b = p[(i + 1) % 4];
            twice += a.x * b.y - b.x * a.y;
        }
        (twice / 2.0).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inset() {
        let r = Rect::new(10.0, 20.0, 100.0, 200.0);
        let i = r.inset(5.0);
        assert_eq!(i, Rect::new(15.0, 25.0, 90.0, 190.0));
        assert!(!i.is_degenerate());
    }

    #[test]
    fn test_rect_inset_past_half_is_degenerate() {
        let r = Rect::from_size(50.0, 50.0);
        assert!(r.inset(30.0).is_degenerate());
    }

    #[test]
    fn test_rect_edges_and_center() {
        let r = Rect::new(0.0, 0.0, 400.0, 1000.0);
        assert_eq!(r.right(), 400.0);
        assert_eq!(r.bottom(), 1000.0);
        assert_eq!(r.center(), Point2d::new(200.0, 500.0));
        assert_eq!(r.corners()[2], Point2d::new(400.0, 1000.0));
    }

    #[test]
    fn test_quad_area_of_trapezoid() {
        // Top face of a 100x100 frame with 10mm members.
        let q = Quad::new(
            Point2d::new(0.0, 0.0),
            Point2d::new(100.0, 0.0),
            Point2d::new(90.0, 10.0),
            Point2d::new(10.0, 10.0),
        );
        assert!((q.area() - 900.0).abs() < 1e-9, "area = {}", q.area());
    }

    #[test]
    fn test_point_midpoint() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(4.0, 6.0);
        assert_eq!(a.midpoint(&b), Point2d::new(2.0, 3.0));
        assert!((a.distance_to(&b) - 52.0f64.sqrt()).abs() < 1e-12);
    }
}
