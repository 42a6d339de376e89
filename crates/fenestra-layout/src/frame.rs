//! Mitred frame geometry, shared by outer frames and sashes.

use fenestra_types::{Point2d, Quad, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Four mitred members around a rectangle plus the face they enclose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MitredFrame {
    pub top: Quad,
    pub bottom: Quad,
    pub left: Quad,
    pub right: Quad,
    /// Opening left inside the members.
    pub face: Rect,
    /// Member width actually used, after clamping to half the rectangle.
    pub truncation: f64,
}

impl MitredFrame {
    pub fn members(&self) -> [&Quad; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }

    /// Total area covered by the four members.
    pub fn member_area(&self) -> f64 {
        self.members().iter().map(|q| q.area()).sum()
    }
}

/// Member width clamped so opposite members never cross:
/// `min(member_width, w / 2, h / 2)`.
pub fn safe_truncation(rect: &Rect, member_width: f64) -> f64 {
    member_width.min(rect.w / 2.0).min(rect.h / 2.0)
}

/// Build the four 45° mitred members of a frame around `rect`.
///
/// Each member joins one outer edge to the truncated inner corners. On a
/// rectangle narrower than two members the inner corners meet in the
/// middle instead of crossing over.
pub fn mitred_frame(rect: &Rect, member_width: f64) -> MitredFrame {
    let t = safe_truncation(rect, member_width);
    if t < member_width {
        debug!(member_width, truncation = t, w = rect.w, h = rect.h, "mitre truncation clamped");
    }

    let Rect { x, y, w, h } = *rect;
    let outer_tl = Point2d::new(x, y);
    let outer_tr = Point2d::new(x + w, y);
    let outer_br = Point2d::new(x + w, y + h);
    let outer_bl = Point2d::new(x, y + h);
    let inner_tl = Point2d::new(x + t, y + t);
    let inner_tr = Point2d::new(x + w - t, y + t);
    let inner_br = Point2d::new(x + w - t, y + h - t);
    let inner_bl = Point2d::new(x + t, y + h - t);

    MitredFrame {
        top: Quad::new(outer_tl, outer_tr, inner_tr, inner_tl),
        bottom: Quad::new(outer_bl, outer_br, inner_br, inner_bl),
        left: Quad::new(outer_tl, outer_bl, inner_bl, inner_tl),
        right: Quad::new(outer_tr, outer_br, inner_br, inner_tr),
        face: rect.inset(t),
        truncation: t,
    }
}
