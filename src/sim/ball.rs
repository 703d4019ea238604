//! The ball: a circle moving at constant speed that shrinks on brick hits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Circle;
use crate::settings::BallSettings;

/// A ball entity
///
/// `vel` always has length `speed`: reflections only flip component signs
/// and `set_velocity` rescales. `radius` stays within
/// `[min_radius, initial_radius]` and only grows back on `reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    params: BallSettings,
}

impl Ball {
    pub fn new(params: BallSettings) -> Self {
        Self {
            pos: params.spawn,
            vel: Vec2::new(0.0, -params.speed),
            radius: params.radius,
            params,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Advance position by `vel * dt`
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Multiply velocity component-wise by a ±1 mask
    pub fn reflect(&mut self, mask: Vec2) {
        self.vel *= mask;
    }

    /// Point the ball along `direction` at its constant speed.
    /// A zero direction carries no heading and leaves velocity unchanged.
    pub fn set_velocity(&mut self, direction: Vec2) {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO {
            log::trace!("set_velocity ignored zero direction");
            return;
        }
        self.vel = dir * self.params.speed;
    }

    /// Scale radius by `factor`, floored at the minimum radius
    pub fn shrink(&mut self, factor: f32) {
        if self.radius <= self.params.min_radius {
            return;
        }
        self.radius = (self.radius * factor).max(self.params.min_radius);
    }

    /// Fell below the bottom of the playfield
    pub fn is_out_of_view(&self, scene_height: f32) -> bool {
        self.pos.y > scene_height
    }

    /// Back to spawn, heading straight up, full size
    pub fn reset(&mut self) {
        self.pos = self.params.spawn;
        self.vel = Vec2::new(0.0, -self.params.speed);
        self.radius = self.params.radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::test_util::has_length;

    fn ball() -> Ball {
        Ball::new(BallSettings::default())
    }

    #[test]
    fn test_new_ball_heads_up_at_speed() {
        let ball = ball();
        assert_eq!(ball.pos, BALL_SPAWN);
        assert_eq!(ball.vel, Vec2::new(0.0, -BALL_SPEED));
        assert_eq!(ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut ball = ball();
        ball.update(0.5);
        assert_eq!(ball.pos, BALL_SPAWN + Vec2::new(0.0, -BALL_SPEED * 0.5));

        // Zero dt is a no-op
        let before = ball.pos;
        ball.update(0.0);
        assert_eq!(ball.pos, before);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let mut ball = ball();
        ball.set_velocity(Vec2::new(3.0, -4.0));

        ball.reflect(REFLECT_VERTICAL);
        assert!(ball.vel.y > 0.0);
        assert!(ball.vel.x > 0.0);
        assert!(has_length(ball.vel, BALL_SPEED, 1e-3));

        ball.reflect(REFLECT_HORIZONTAL);
        assert!(ball.vel.x < 0.0);
        assert!(has_length(ball.vel, BALL_SPEED, 1e-3));
    }

    #[test]
    fn test_set_velocity_rescales() {
        let mut ball = ball();
        ball.set_velocity(Vec2::new(1.0, 1.0));
        assert!(has_length(ball.vel, BALL_SPEED, 1e-3));
        assert!((ball.vel.x - ball.vel.y).abs() < 1e-3);

        let before = ball.vel;
        ball.set_velocity(Vec2::ZERO);
        assert_eq!(ball.vel, before);
    }

    #[test]
    fn test_shrink_floors_at_min_radius() {
        let mut ball = ball();
        ball.shrink(0.95);
        assert!((ball.radius - BALL_RADIUS * 0.95).abs() < 1e-5);

        for _ in 0..200 {
            ball.shrink(0.5);
        }
        assert_eq!(ball.radius, BALL_MIN_RADIUS);

        ball.shrink(0.5);
        assert_eq!(ball.radius, BALL_MIN_RADIUS);
    }

    #[test]
    fn test_out_of_view() {
        let mut ball = ball();
        assert!(!ball.is_out_of_view(SCENE_HEIGHT));
        ball.pos.y = SCENE_HEIGHT + 0.1;
        assert!(ball.is_out_of_view(SCENE_HEIGHT));
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut ball = ball();
        ball.pos = Vec2::new(12.0, 700.0);
        ball.set_velocity(Vec2::new(1.0, 2.0));
        ball.shrink(0.5);

        ball.reset();
        assert_eq!(ball.pos, BALL_SPAWN);
        assert_eq!(ball.vel, Vec2::new(0.0, -BALL_SPEED));
        assert_eq!(ball.radius, BALL_RADIUS);
    }
}
