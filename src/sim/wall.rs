//! Playfield walls (ceiling, left, right). The floor is open.

use super::ball::Ball;
use crate::consts::{REFLECT_HORIZONTAL, REFLECT_VERTICAL};

/// Which walls a ball bounced off this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub ceiling: bool,
    pub side: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.ceiling || self.side
    }
}

pub struct Wall;

impl Wall {
    /// Reflect a ball that has crossed the ceiling or a side wall while
    /// still heading outward. Only the ball center is tested.
    pub fn intersects(ball: &mut Ball, scene_width: f32) -> WallBounce {
        let mut bounce = WallBounce::default();

        if ball.pos.y < 0.0 && ball.vel.y < 0.0 {
            ball.reflect(REFLECT_VERTICAL);
            bounce.ceiling = true;
        }

        if (ball.pos.x < 0.0 && ball.vel.x < 0.0) || (ball.pos.x > scene_width && ball.vel.x > 0.0)
        {
            ball.reflect(REFLECT_HORIZONTAL);
            bounce.side = true;
        }

        if bounce.any() {
            log::trace!("Wall bounce {:?} at {:?}", bounce, ball.pos);
        }
        bounce
    }
}
