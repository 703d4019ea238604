//! Helpers shared by the integration tests

use glam::Vec2;

/// Length of `v` within `tolerance` of `expected`
pub fn has_length(v: Vec2, expected: f32, tolerance: f32) -> bool {
    (v.length() - expected).abs() <= tolerance
}
