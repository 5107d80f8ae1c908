//! Collision primitives shared by the games
//!
//! Everything here is axis-aligned boxes and circles; the tests are the
//! usual separating-axis and closest-point checks, nothing iterative.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both positive)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center of the box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }
}

/// Axis-aligned overlap test between two boxes
///
/// Touching edges do not count as overlap, matching the strict
/// inequality of the per-axis interval test.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Circle-circle overlap test (compared on squared distance)
#[inline]
pub fn circle_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let r = radius_a + radius_b;
    center_a.distance_squared(center_b) < r * r
}

/// Circle against axis-aligned box via closest point on the box
pub fn circle_aabb_overlap(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.pos.x, rect.right()),
        center.y.clamp(rect.pos.y, rect.bottom()),
    );
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(aabb_overlap(&a, &b));

        let far = Aabb::new(100.0, 0.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &far));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &b));

        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &below));
    }

    #[test]
    fn test_aabb_containment_counts_as_overlap() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 10.0, 10.0);
        assert!(aabb_overlap(&outer, &inner));
        assert!(aabb_overlap(&inner, &outer));
    }

    #[test]
    fn test_circle_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(15.0, 0.0);
        assert!(circle_overlap(a, 10.0, b, 10.0));
        assert!(!circle_overlap(a, 5.0, b, 5.0));
        // Exactly touching is not overlap
        assert!(!circle_overlap(a, 7.5, b, 7.5));
    }

    #[test]
    fn test_circle_aabb_face_hit() {
        let rect = Aabb::new(100.0, 100.0, 50.0, 50.0);
        // Circle just left of the box
        assert!(circle_aabb_overlap(Vec2::new(95.0, 125.0), 8.0, &rect));
        assert!(!circle_aabb_overlap(Vec2::new(80.0, 125.0), 8.0, &rect));
    }

    #[test]
    fn test_circle_aabb_corner_hit() {
        let rect = Aabb::new(100.0, 100.0, 50.0, 50.0);
        // Diagonal distance to the (100,100) corner is ~7.07
        assert!(circle_aabb_overlap(Vec2::new(95.0, 95.0), 8.0, &rect));
        assert!(!circle_aabb_overlap(Vec2::new(95.0, 95.0), 7.0, &rect));
    }

    #[test]
    fn test_contains_point() {
        let rect = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }
}
