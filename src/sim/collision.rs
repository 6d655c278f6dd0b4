//! Collision detection for a circular ball against axis-aligned rectangles
//!
//! Everything here is a pure function. Response (reflection, scoring) lives
//! in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Point of this rectangle closest to `p` (p itself when inside)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.right()),
            clamp(p.y, self.y, self.bottom()),
        )
    }
}

/// Restrict `v` to `[lo, hi]`
///
/// Unlike `f32::clamp` this never panics; callers guarantee `lo <= hi` and
/// debug builds check it.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo <= hi, "clamp bounds inverted: {lo} > {hi}");
    lo.max(hi.min(v))
}

/// True if the circle overlaps the rectangle (touching counts)
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.0, 4.0, 4.0), 4.0);
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(90.0, 95.0, 48.0, 18.0);
        assert!(circle_intersects_rect(Vec2::new(103.0, 104.0), 7.0, &rect));
    }

    #[test]
    fn test_circle_near_edge() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Touching the right edge exactly
        assert!(circle_intersects_rect(Vec2::new(15.0, 5.0), 5.0, &rect));
        // Just beyond it
        assert!(!circle_intersects_rect(Vec2::new(15.1, 5.0), 5.0, &rect));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Diagonal from the corner: distance sqrt(18) ~ 4.24
        assert!(circle_intersects_rect(Vec2::new(13.0, 13.0), 4.5, &rect));
        // Inside the axis-aligned bounding box but outside the rounded corner
        assert!(!circle_intersects_rect(Vec2::new(13.5, 13.5), 4.5, &rect));
    }

    #[test]
    fn test_closest_point() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.closest_point(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(rect.closest_point(Vec2::new(25.0, 30.0)), Vec2::new(25.0, 30.0));
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }
}
