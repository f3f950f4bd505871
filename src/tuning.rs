//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a session can be rebalanced
//! from a JSON document without recompiling. Missing fields fall back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Oscillation speed of the first active crate
    pub base_move_speed: f32,
    /// Speed gained per supported placement
    pub speed_increment: f32,
    /// Oscillation extent on X
    pub horizontal_bound: f32,
    /// Height gained per placement
    pub stack_step: f32,
    /// Strict upper bound on |active.x - support.x| for a supported drop
    pub support_threshold: f32,
    pub gravity: f32,
    /// Per-tick sideways drift of falling crates
    pub fall_drift: f32,
    /// Radians per second
    pub fall_spin_rate: f32,
    pub floor_y: f32,
    pub starting_lives: u32,
    pub max_crates: u32,
    pub half_crates: u32,
    /// Where the very first active crate appears
    pub spawn_position: Vec3,
    pub camera_start: Vec3,
    pub camera_initial_target: Vec3,
    pub camera_vertical_offset: f32,
    pub camera_distance_behind: f32,
    /// Per-tick lerp factor (not scaled by dt)
    pub camera_smoothing: f32,
    /// Whether crates that fell below the floor may act as support again
    pub landed_crates_support: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_move_speed: BASE_MOVE_SPEED,
            speed_increment: SPEED_INCREMENT,
            horizontal_bound: HORIZONTAL_BOUND,
            stack_step: STACK_STEP,
            support_threshold: SUPPORT_THRESHOLD,
            gravity: GRAVITY,
            fall_drift: FALL_DRIFT,
            fall_spin_rate: FALL_SPIN_RATE,
            floor_y: FLOOR_Y,
            starting_lives: STARTING_LIVES,
            max_crates: MAX_CRATES,
            half_crates: HALF_CRATES,
            spawn_position: Vec3::new(0.0, 2.0, 0.0),
            camera_start: Vec3::new(0.0, 10.0, -20.0),
            camera_initial_target: Vec3::new(0.0, 1.0, 0.0),
            camera_vertical_offset: CAMERA_VERTICAL_OFFSET,
            camera_distance_behind: CAMERA_DISTANCE_BEHIND,
            camera_smoothing: CAMERA_SMOOTHING,
            landed_crates_support: true,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        };

        if self.support_threshold <= 0.0 {
            return invalid("support_threshold", "must be positive");
        }
        if self.horizontal_bound <= 0.0 {
            return invalid("horizontal_bound", "must be positive");
        }
        if self.stack_step <= 0.0 {
            return invalid("stack_step", "must be positive");
        }
        if self.base_move_speed < 0.0 {
            return invalid("base_move_speed", "must not be negative");
        }
        if self.speed_increment < 0.0 {
            return invalid("speed_increment", "must not be negative");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.floor_y >= self.spawn_position.y {
            return invalid("floor_y", "must be below the spawn height");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if self.max_crates == 0 {
            return invalid("max_crates", "must be at least 1");
        }
        if self.half_crates == 0 || self.half_crates >= self.max_crates {
            return invalid("half_crates", "must be between 1 and max_crates");
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) {
            return invalid("camera_smoothing", "must be within [0, 1]");
        }
        Ok(())
    }
}
