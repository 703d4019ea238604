//! Session state machine: lives and the current game phase
//!
//! Every phase change goes through [`transition`], which maps
//! `(phase, trigger, life)` to the next phase and the side effects to run.

use serde::{Deserialize, Serialize};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first continue
    #[default]
    Start,
    /// Active gameplay
    InGame,
    /// Ball lost, lives remain
    Paused,
    /// Every brick destroyed
    Cleared,
    /// Lives exhausted
    Ended,
}

impl GamePhase {
    /// Only `InGame` runs the simulation; the rest are idle display phases
    pub fn is_idle(&self) -> bool {
        *self != GamePhase::InGame
    }
}

/// Something that can move the session between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// The player's continue/start input
    Continue,
    /// Ball fell out of view
    BallLost,
    /// No bricks remain
    FieldCleared,
}

/// Side effect attached to a transition, run in listed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    DecrementLife,
    ResetLife,
    ResetBall,
    ResetBricks,
}

/// The playfield part of an [`Effect`]; life effects stay inside [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEffect {
    ResetBall,
    ResetBricks,
}

/// A row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: GamePhase,
    pub effects: &'static [Effect],
}

/// The transition table.
///
/// `life` is the count before any effect runs. Returns `None` when the
/// trigger means nothing in the current phase.
pub fn transition(phase: GamePhase, trigger: Trigger, life: u32) -> Option<Transition> {
    use Effect::*;
    use GamePhase::*;

    let row = match (phase, trigger) {
        (Start | Paused | Cleared | Ended, Trigger::Continue) => Transition {
            to: InGame,
            effects: &[],
        },
        (InGame, Trigger::BallLost) if life.saturating_sub(1) > 0 => Transition {
            to: Paused,
            effects: &[DecrementLife, ResetBall],
        },
        (InGame, Trigger::BallLost) => Transition {
            to: Ended,
            effects: &[DecrementLife, ResetBall, ResetBricks, ResetLife],
        },
        (InGame, Trigger::FieldCleared) => Transition {
            to: Cleared,
            effects: &[ResetBricks, ResetLife, ResetBall],
        },
        _ => return None,
    };
    Some(row)
}

/// What [`Session::apply`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub from: GamePhase,
    pub to: GamePhase,
    /// Life right after any decrement, before a reset
    pub life_after_loss: Option<u32>,
    /// Effects the caller must run on the playfield
    pub world_effects: Vec<WorldEffect>,
}

/// Life count and current phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    life: u32,
    initial_life: u32,
    phase: GamePhase,
}

impl Session {
    pub fn new(initial_life: u32) -> Self {
        Self {
            life: initial_life,
            initial_life,
            phase: GamePhase::Start,
        }
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Decrement life; true while lives remain
    pub fn decrease_life(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }

    pub fn reset_life(&mut self) {
        self.life = self.initial_life;
    }

    /// Feed a trigger through the transition table
    pub fn apply(&mut self, trigger: Trigger) -> Option<Applied> {
        let row = transition(self.phase, trigger, self.life)?;
        let from = self.phase;
        let mut life_after_loss = None;
        let mut world_effects = Vec::new();

        for effect in row.effects {
            match effect {
                Effect::DecrementLife => {
                    self.decrease_life();
                    life_after_loss = Some(self.life);
                }
                Effect::ResetLife => self.reset_life(),
                Effect::ResetBall => world_effects.push(WorldEffect::ResetBall),
                Effect::ResetBricks => world_effects.push(WorldEffect::ResetBricks),
            }
        }
        self.phase = row.to;

        match row.to {
            GamePhase::Paused => log::info!("Continue ({} lives left)", self.life),
            GamePhase::Ended => log::info!("GameOver"),
            GamePhase::Cleared => log::info!("Field cleared"),
            _ => {}
        }
        log::debug!("Session {:?} --{:?}--> {:?}", from, trigger, row.to);

        Some(Applied {
            from,
            to: row.to,
            life_after_loss,
            world_effects,
        })
    }
}
