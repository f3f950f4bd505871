//! Session tracking: lives, phase and win/lose outcome

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::{lerp_color, rgb8};

/// Background on the ground (forest green)
pub const GROUND_COLOR: [f32; 4] = rgb8(34, 139, 34);
/// Background halfway up (sky blue)
pub const SKY_COLOR: [f32; 4] = rgb8(135, 206, 235);
/// Background at the top (space)
pub const SPACE_COLOR: [f32; 4] = rgb8(0, 0, 0);

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Crates are being placed
    Active,
    /// Nothing advances until unpaused
    Paused,
    /// Tower reached the crate goal
    Won,
    /// Ran out of lives
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Terminal result handed to the screen layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Lost { placed: usize },
    Won,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub lives: u32,
    pub phase: GamePhase,
    max_crates: usize,
    half_crates: usize,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            lives: tuning.starting_lives,
            phase: GamePhase::Active,
            max_crates: tuning.max_crates as usize,
            half_crates: tuning.half_crates as usize,
        }
    }

    /// Whether the active crate still awaits a drop decision
    pub fn is_placing(&self) -> bool {
        !self.phase.is_terminal()
    }

    /// Lose a life for a missed drop. Never goes below zero.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Flip between Active and Paused. Terminal phases stay put.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Active => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Active,
            terminal => terminal,
        };
    }

    /// Check lose, then win. Fires at most once per session.
    pub fn evaluate(&mut self, placed: usize) -> Option<Outcome> {
        if self.phase.is_terminal() {
            return None;
        }

        if self.lives == 0 {
            self.phase = GamePhase::Lost;
            log::info!("Session lost with {} crates placed", placed);
            Some(Outcome::Lost { placed })
        } else if placed >= self.max_crates {
            self.phase = GamePhase::Won;
            log::info!("Session won with {} crates placed", placed);
            Some(Outcome::Won)
        } else {
            None
        }
    }

    /// Presentation-only clear color for the current tower height
    pub fn background_color(&self, placed: usize) -> [f32; 4] {
        background_color(placed, self.half_crates, self.max_crates)
    }
}

/// Ground fades to sky over the first half of the goal, sky to space over the rest
pub fn background_color(placed: usize, half: usize, max: usize) -> [f32; 4] {
    if placed <= half {
        let t = placed as f32 / half.max(1) as f32;
        lerp_color(GROUND_COLOR, SKY_COLOR, t)
    } else {
        let t = (placed - half) as f32 / max.saturating_sub(half).max(1) as f32;
        lerp_color(SKY_COLOR, SPACE_COLOR, t)
    }
}
