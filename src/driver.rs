//! Loop driver
//!
//! Turns host timestamps and input into one simulation tick per frame, and
//! provides a demo player for headless runs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::render::{self, Frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Counters gathered over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub bricks_destroyed: u64,
    pub balls_lost: u64,
    pub clears: u64,
    pub game_overs: u64,
}

impl RunStats {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BrickDestroyed { .. } => self.bricks_destroyed += 1,
            GameEvent::BallLost { .. } => self.balls_lost += 1,
            GameEvent::PhaseChanged { to: GamePhase::Cleared, .. } => self.clears += 1,
            GameEvent::PhaseChanged { to: GamePhase::Ended, .. } => self.game_overs += 1,
            _ => {}
        }
    }
}

/// Owns the game state and the pending input between frames
pub struct FrameDriver {
    pub state: GameState,
    pub input: TickInput,
    last_time: Option<f64>,
    stats: RunStats,
}

impl FrameDriver {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings),
            input: TickInput::default(),
            last_time: None,
            stats: RunStats::default(),
        }
    }

    /// Latest pointer x (kept until the next move)
    pub fn pointer_moved(&mut self, x: f32) {
        self.input.pointer_x = Some(x);
    }

    /// Continue/start pressed; consumed by the next frame
    pub fn continue_pressed(&mut self) {
        self.input.continue_pressed = true;
    }

    /// Run one frame at host time `now` (seconds)
    pub fn frame(&mut self, now: f64) -> Vec<GameEvent> {
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(now);
        self.step(dt)
    }

    /// Run one frame with an explicit `dt`
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.input, dt);

        // Clear one-shot inputs after processing
        self.input.continue_pressed = false;

        self.stats.frames += 1;
        for event in &events {
            self.stats.record(event);
            match event {
                GameEvent::PhaseChanged { from, to } => {
                    log::info!("Phase {:?} -> {:?}", from, to);
                }
                GameEvent::BallLost { lives_left } => {
                    log::info!("Ball lost, {} lives left", lives_left);
                }
                GameEvent::BrickDestroyed { index } => {
                    log::debug!("Brick {} hit", index);
                }
                GameEvent::WallBounce | GameEvent::PaddleBounce => {
                    log::trace!("{:?}", event);
                }
            }
        }
        events
    }

    /// Draw list for the current state
    pub fn frame_descriptors(&self) -> Frame {
        render::frame(&self.state)
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

/// Demo player: chases the ball with a seeded aim wobble
pub struct Autopilot {
    rng: Pcg32,
    /// Largest aim error in scene units
    pub max_error: f32,
    aim_error: f32,
}

impl Autopilot {
    pub fn new(seed: u64, max_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_error,
            aim_error: 0.0,
        }
    }

    /// Feed this frame's input into the driver
    pub fn drive(&mut self, driver: &mut FrameDriver) {
        let state = &driver.state;
        if state.phase().is_idle() {
            driver.continue_pressed();
            return;
        }

        // Pick a fresh aim error each time the ball starts falling
        if state.ball.vel.y > 0.0 && self.aim_error == 0.0 && self.max_error > 0.0 {
            self.aim_error = self.rng.random_range(-self.max_error..self.max_error);
        } else if state.ball.vel.y < 0.0 {
            self.aim_error = 0.0;
        }

        let target = (state.ball.pos.x + self.aim_error).clamp(0.0, state.scene.width);
        driver.pointer_moved(target);
    }
}
