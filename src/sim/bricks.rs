//! The brick field: a fixed row-major grid of bricks with alive flags

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geom::Rect;
use crate::consts::{BRICK_COLS, BRICK_COUNT, REFLECT_HORIZONTAL, REFLECT_VERTICAL};
use crate::settings::BrickSettings;

/// A brick slot. Destroyed bricks keep their bounds and drop `alive`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Rect,
    pub alive: bool,
}

impl Brick {
    /// Grid row (0 = top)
    pub fn row(index: usize) -> usize {
        index / BRICK_COLS
    }

    /// Grid column (0 = left)
    pub fn col(index: usize) -> usize {
        index % BRICK_COLS
    }
}

/// Which face of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFace {
    /// Top or bottom edge - vertical velocity flips
    TopBottom,
    /// Left or right edge - horizontal velocity flips
    Side,
}

/// Result of a brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub index: usize,
    pub face: HitFace,
}

/// Fixed collection of `BRICK_COUNT` bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    destroyed: usize,
    layout: BrickSettings,
    shrink_factor: f32,
}

impl BrickField {
    pub fn new(layout: BrickSettings, shrink_factor: f32) -> Self {
        let mut field = Self {
            bricks: Vec::with_capacity(BRICK_COUNT),
            destroyed: 0,
            layout,
            shrink_factor,
        };
        field.reset();
        field
    }

    /// Lay every brick back into its grid slot
    pub fn reset(&mut self) {
        let size = Vec2::new(self.layout.width, self.layout.height);
        self.bricks.clear();
        self.bricks.extend((0..BRICK_COUNT).map(|i| Brick {
            bounds: Rect {
                pos: Vec2::new(
                    Brick::col(i) as f32 * size.x,
                    self.layout.top_margin + Brick::row(i) as f32 * size.y,
                ),
                size,
            },
            alive: true,
        }));
        self.destroyed = 0;
    }

    /// Resolve at most one brick hit against `ball`.
    ///
    /// Bricks are scanned in ascending index order (row-major, top-left
    /// first) and only the first live brick overlapping the ball is
    /// processed. If the ball touches the brick's top or bottom edge the hit
    /// counts as a top/bottom hit and the vertical velocity flips;
    /// otherwise the horizontal velocity flips. The ball then shrinks and the
    /// brick is knocked out.
    pub fn intersects(&mut self, ball: &mut Ball) -> Option<BrickHit> {
        let circle = ball.circle();
        let (index, brick) = self
            .bricks
            .iter_mut()
            .enumerate()
            .find(|(_, b)| b.alive && b.bounds.intersects_circle(&circle))?;

        // Corner contacts resolve as top/bottom hits
        let face = if brick.bounds.bottom_edge().intersects_circle(&circle)
            || brick.bounds.top_edge().intersects_circle(&circle)
        {
            ball.reflect(REFLECT_VERTICAL);
            HitFace::TopBottom
        } else {
            ball.reflect(REFLECT_HORIZONTAL);
            HitFace::Side
        };
        ball.shrink(self.shrink_factor);

        brick.alive = false;
        self.destroyed += 1;

        log::debug!(
            "Brick {} (row {}, col {}) destroyed, {} left",
            index,
            Brick::row(index),
            Brick::col(index),
            self.remaining()
        );

        Some(BrickHit { index, face })
    }

    /// True while any brick is still alive
    pub fn any_remaining(&self) -> bool {
        self.destroyed < BRICK_COUNT
    }

    pub fn remaining(&self) -> usize {
        BRICK_COUNT - self.destroyed
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Live bricks with their indices, in scan order
    pub fn alive(&self) -> impl Iterator<Item = (usize, &Brick)> {
        self.bricks.iter().enumerate().filter(|(_, b)| b.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::BallSettings;

    fn field() -> BrickField {
        BrickField::new(BrickSettings::default(), BALL_SHRINK_FACTOR)
    }

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(BallSettings::default());
        ball.pos = pos;
        ball.set_velocity(vel);
        ball
    }

    #[test]
    fn test_layout() {
        let field = field();
        assert_eq!(field.bricks().len(), BRICK_COUNT);
        assert_eq!(field.remaining(), BRICK_COUNT);

        let first = field.bricks()[0].bounds;
        assert_eq!(first, Rect::new(0.0, BRICK_TOP_MARGIN, BRICK_WIDTH, BRICK_HEIGHT));

        // Row-major: index 21 is row 1, column 1
        let b = field.bricks()[21].bounds;
        assert_eq!(b.pos, Vec2::new(BRICK_WIDTH, BRICK_TOP_MARGIN + BRICK_HEIGHT));

        let last = field.bricks()[BRICK_COUNT - 1].bounds;
        assert_eq!(last.right(), BRICK_COLS as f32 * BRICK_WIDTH);
        assert_eq!(last.bottom(), BRICK_TOP_MARGIN + BRICK_ROWS as f32 * BRICK_HEIGHT);
    }

    #[test]
    fn test_miss_leaves_everything_alone() {
        let mut field = field();
        let mut ball = ball_at(BALL_SPAWN, Vec2::new(0.0, -1.0));
        let vel = ball.vel;

        assert_eq!(field.intersects(&mut ball), None);
        assert_eq!(ball.vel, vel);
        assert_eq!(ball.radius, BALL_RADIUS);
        assert_eq!(field.destroyed(), 0);
    }

    #[test]
    fn test_bottom_face_hit_reflects_vertically() {
        let mut field = field();
        // Below brick 85 (row 4, col 5), moving up into its bottom edge
        let bottom = BRICK_TOP_MARGIN + 5.0 * BRICK_HEIGHT;
        let mut ball = ball_at(Vec2::new(5.5 * BRICK_WIDTH, bottom + 5.0), Vec2::new(0.0, -1.0));

        let hit = field.intersects(&mut ball).expect("should hit");
        assert_eq!(hit, BrickHit { index: 85, face: HitFace::TopBottom });
        assert!(ball.vel.y > 0.0);
        assert!(ball.radius < BALL_RADIUS);
        assert!(!field.bricks()[85].alive);
        assert_eq!(field.remaining(), BRICK_COUNT - 1);
    }

    #[test]
    fn test_side_face_hit_reflects_horizontally() {
        let mut field = field();
        // Knock out brick 80 so its right neighbour's left edge is exposed
        field.bricks[80].alive = false;
        field.destroyed = 1;

        let row_mid = BRICK_TOP_MARGIN + 4.5 * BRICK_HEIGHT;
        let mut ball = ball_at(
            Vec2::new(BRICK_WIDTH - 3.0, row_mid),
            Vec2::new(1.0, 0.0),
        );
        ball.radius = 4.0;

        let hit = field.intersects(&mut ball).expect("should hit");
        assert_eq!(hit, BrickHit { index: 81, face: HitFace::Side });
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_side_hit_near_corner_resolves_as_top_bottom() {
        let mut field = field();
        field.bricks[80].alive = false;
        field.destroyed = 1;

        // Moving right into brick 81's left edge, 1 unit above its bottom
        // corner: the bottom edge is also within reach, so the vertical axis
        // flips instead of the horizontal one
        let bottom = BRICK_TOP_MARGIN + 5.0 * BRICK_HEIGHT;
        let mut ball = ball_at(Vec2::new(BRICK_WIDTH - 3.0, bottom - 1.0), Vec2::new(1.0, 0.1));
        ball.radius = 4.0;
        let before = ball.vel;

        let hit = field.intersects(&mut ball).expect("should hit");
        assert_eq!(hit, BrickHit { index: 81, face: HitFace::TopBottom });
        assert_eq!(ball.vel.x, before.x);
        assert_eq!(ball.vel.y, -before.y);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_single_hit_per_call_lowest_index() {
        let mut field = field();
        // Straddles bricks 80 and 81 on their shared bottom corner
        let bottom = BRICK_TOP_MARGIN + 5.0 * BRICK_HEIGHT;
        let mut ball = ball_at(Vec2::new(BRICK_WIDTH, bottom + 2.0), Vec2::new(0.0, -1.0));

        let hit = field.intersects(&mut ball).expect("should hit");
        assert_eq!(hit.index, 80);
        assert!(!field.bricks()[80].alive);
        assert!(field.bricks()[81].alive);
        assert_eq!(field.destroyed(), 1);
    }

    #[test]
    fn test_dead_bricks_are_skipped() {
        let mut field = field();
        let bottom = BRICK_TOP_MARGIN + 5.0 * BRICK_HEIGHT;
        let mut ball = ball_at(Vec2::new(5.5 * BRICK_WIDTH, bottom + 5.0), Vec2::new(0.0, -1.0));
        field.intersects(&mut ball);

        // Same spot again: brick 85 is gone and nothing else overlaps
        ball.pos = Vec2::new(5.5 * BRICK_WIDTH, bottom + 5.0);
        assert_eq!(field.intersects(&mut ball), None);
        assert_eq!(field.destroyed(), 1);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut field = field();
        for brick in &mut field.bricks {
            brick.alive = false;
        }
        field.destroyed = BRICK_COUNT;
        assert!(!field.any_remaining());
        assert_eq!(field.alive().count(), 0);

        field.reset();
        assert!(field.any_remaining());
        assert_eq!(field.destroyed(), 0);
        assert_eq!(field.alive().count(), BRICK_COUNT);
    }
}
