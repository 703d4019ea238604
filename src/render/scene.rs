//! Per-frame draw descriptors
//!
//! The host owns the window and the GPU; this module only says what to
//! draw, where, and in which color.

use glam::Vec2;

use super::vertex::{colors, hsv_to_rgba};
use crate::sim::{Circle, GamePhase, GameState, Rect};

/// Brick inset when drawn
pub const BRICK_INSET: f32 = 1.0;
/// Paddle outline corner radius
pub const PADDLE_CORNER_RADIUS: f32 = 3.0;

/// A shape with its fill color
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { circle: Circle, color: [f32; 4] },
    Rect { rect: Rect, color: [f32; 4] },
    RoundedRect { rect: Rect, corner_radius: f32, color: [f32; 4] },
}

/// Centered text prompt
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub center: Vec2,
}

/// Everything the host draws this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub shapes: Vec<Shape>,
    pub prompt: Option<Prompt>,
}

/// Hue (degrees) of a brick from its top edge
pub fn brick_hue(top: f32) -> f32 {
    top - 40.0
}

/// Text shown in the idle phases; `None` in game
pub fn prompt_text(phase: GamePhase, life: u32) -> Option<String> {
    match phase {
        GamePhase::InGame => None,
        GamePhase::Start => Some("Press SPACE to start".to_string()),
        GamePhase::Paused => Some(format!("Lives left: {}\nPress SPACE to continue", life)),
        GamePhase::Cleared => Some("Stage clear!\nPress SPACE to play again".to_string()),
        GamePhase::Ended => Some("Game over\nPress SPACE to start".to_string()),
    }
}

/// Build this frame's draw list.
///
/// Idle phases show only their prompt. In game: live bricks in scan order,
/// then the ball, then the paddle.
pub fn frame(state: &GameState) -> Frame {
    let phase = state.phase();
    if let Some(text) = prompt_text(phase, state.session.life()) {
        return Frame {
            shapes: Vec::new(),
            prompt: Some(Prompt {
                text,
                center: Vec2::new(state.scene.width / 2.0, state.scene.height / 2.0),
            }),
        };
    }

    let mut shapes = Vec::with_capacity(state.bricks.remaining() + 2);
    shapes.extend(state.bricks.alive().map(|(_, brick)| Shape::Rect {
        rect: brick.bounds.inset(BRICK_INSET),
        color: hsv_to_rgba(brick_hue(brick.bounds.top()), 1.0, 1.0),
    }));
    shapes.push(Shape::Circle {
        circle: state.ball.circle(),
        color: colors::BALL,
    });
    shapes.push(Shape::RoundedRect {
        rect: state.paddle.bounds,
        corner_radius: PADDLE_CORNER_RADIUS,
        color: colors::PADDLE,
    });

    Frame {
        shapes,
        prompt: None,
    }
}
