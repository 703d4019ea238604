//! Axis-aligned rectangles, segments and circles
//!
//! Screen space: origin at the top-left corner, +y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle (ball shape)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Closest point on the segment to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let line_vec = self.b - self.a;
        let line_len_sq = line_vec.length_squared();
        if line_len_sq < 1e-8 {
            return self.a; // Degenerate segment
        }
        let t = ((p - self.a).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
        self.a + line_vec * t
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        self.closest_point(circle.center).distance_squared(circle.center)
            <= circle.radius * circle.radius
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Upper edge, left to right
    pub fn top_edge(&self) -> Segment {
        Segment::new(
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
        )
    }

    /// Lower edge, right to left
    pub fn bottom_edge(&self) -> Segment {
        Segment::new(
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        )
    }

    /// Shrink by `amount` on every side (negative grows)
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(amount),
            size: (self.size - Vec2::splat(2.0 * amount)).max(Vec2::ZERO),
        }
    }

    /// Circle overlap via the clamped closest point; touching counts
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let closest = circle
            .center
            .clamp(self.pos, self.pos + self.size);
        closest.distance_squared(circle.center) <= circle.radius * circle.radius
    }
}
