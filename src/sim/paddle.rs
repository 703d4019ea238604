//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geom::Rect;
use crate::settings::PaddleSettings;

/// Paddle rectangle; x follows the pointer, y is fixed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Rect,
    /// Horizontal deflection per unit of offset from center
    pub steering: f32,
}

impl Paddle {
    /// Paddle centered at `center_x` on its fixed row
    pub fn new(params: PaddleSettings, center_x: f32) -> Self {
        Self {
            bounds: Rect::from_center(
                Vec2::new(center_x, params.center_y),
                Vec2::new(params.width, params.height),
            ),
            steering: params.steering,
        }
    }

    /// Center the paddle under the pointer
    pub fn update(&mut self, pointer_x: f32) {
        self.bounds.pos.x = pointer_x - self.bounds.size.x / 2.0;
    }

    /// Bounce a falling ball that overlaps the paddle.
    ///
    /// The new heading is `((ball.x - center.x) * steering, -vel.y)` at the
    /// ball's constant speed, so the ball always leaves upward and the
    /// offset from center steers it sideways.
    pub fn intersects(&self, ball: &mut Ball) -> bool {
        if ball.vel.y <= 0.0 || !self.bounds.intersects_circle(&ball.circle()) {
            return false;
        }
        let offset = ball.pos.x - self.bounds.center().x;
        ball.set_velocity(Vec2::new(offset * self.steering, -ball.vel.y));
        log::trace!("Paddle bounce, offset {:.1}", offset);
        true
    }
}
