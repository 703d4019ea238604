//! Per-frame simulation tick
//!
//! Order inside a frame: continue trigger, then (in game only) paddle, ball,
//! collisions bricks -> wall -> paddle, then the loss/clear checks.

use super::session::Trigger;
use super::state::{GameEvent, GameState};
use super::wall::Wall;

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in scene units (paddle stays put when absent)
    pub pointer_x: Option<f32>,
    /// Continue/start pressed this frame (edge, not level)
    pub continue_pressed: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = dt.max(0.0);

    if input.continue_pressed {
        fire(state, Trigger::Continue, &mut events);
    }

    if state.phase().is_idle() {
        return events;
    }

    state.time_ticks += 1;

    if let Some(x) = input.pointer_x {
        state.paddle.update(x);
    }
    state.ball.update(dt);

    // Collisions, fixed order
    if let Some(hit) = state.bricks.intersects(&mut state.ball) {
        events.push(GameEvent::BrickDestroyed { index: hit.index });
    }
    if Wall::intersects(&mut state.ball, state.scene.width).any() {
        events.push(GameEvent::WallBounce);
    }
    if state.paddle.intersects(&mut state.ball) {
        events.push(GameEvent::PaddleBounce);
    }

    if state.ball.is_out_of_view(state.scene.height) {
        fire(state, Trigger::BallLost, &mut events);
    } else if !state.bricks.any_remaining() {
        fire(state, Trigger::FieldCleared, &mut events);
    }

    events
}

/// Push a trigger through the session and run the playfield effects
fn fire(state: &mut GameState, trigger: Trigger, events: &mut Vec<GameEvent>) {
    let Some(applied) = state.session.apply(trigger) else {
        return;
    };
    if let Some(lives_left) = applied.life_after_loss {
        events.push(GameEvent::BallLost { lives_left });
    }
    for effect in applied.world_effects {
        state.run_effect(effect);
    }
    events.push(GameEvent::PhaseChanged {
        from: applied.from,
        to: applied.to,
    });
}
