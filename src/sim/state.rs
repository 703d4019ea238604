//! Complete game state
//!
//! One instance of each entity, owned here and lent out mutably to the
//! collision passes.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use super::session::{GamePhase, Session, WorldEffect};
use crate::settings::{SceneSettings, Settings};

/// Something that happened during a tick (for logging and observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    BrickDestroyed { index: usize },
    WallBounce,
    PaddleBounce,
    /// Ball fell out of view; lives left right after the decrement
    BallLost { lives_left: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub scene: SceneSettings,
    pub ball: Ball,
    pub bricks: BrickField,
    pub paddle: Paddle,
    pub session: Session,
    /// Simulated frames while in game
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scene: settings.scene,
            ball: Ball::new(settings.ball),
            bricks: BrickField::new(settings.bricks, settings.ball.shrink_factor),
            paddle: Paddle::new(settings.paddle, settings.scene.width / 2.0),
            session: Session::new(settings.session.lives),
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// Run a playfield side effect handed back by the session
    pub fn run_effect(&mut self, effect: WorldEffect) {
        match effect {
            WorldEffect::ResetBall => self.ball.reset(),
            WorldEffect::ResetBricks => self.bricks.reset(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
