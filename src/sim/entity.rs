//! Crate and platform entities
//!
//! Entities carry simulation data only. Renderers read transforms from them by
//! value; no graphics resource is owned here.

use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single crate: the active one being placed, or one already in the tower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crate {
    /// World-space center
    pub position: Vec3,
    /// Judged unsupported and still dropping
    pub is_falling: bool,
    /// Fell below the floor and was frozen there
    pub landed: bool,
    /// Spin accumulated while falling (radians)
    pub rotation_angle: f32,
    /// Unit axis chosen at spawn, never changed afterwards
    rotation_axis: Vec3,
}

impl Crate {
    /// Create a resting crate spinning around `rotation_axis` if it ever falls
    pub fn new(position: Vec3, rotation_axis: Vec3) -> Self {
        Self {
            position,
            is_falling: false,
            landed: false,
            rotation_angle: 0.0,
            rotation_axis: rotation_axis.try_normalize().unwrap_or(Vec3::Y),
        }
    }

    /// Create a crate with a random axis in the positive octant
    pub fn spawn(position: Vec3, rng: &mut impl Rng) -> Self {
        let axis = Vec3::new(rng.random(), rng.random(), rng.random());
        Self::new(position, axis)
    }

    #[inline]
    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    /// Advance the fall spin; resting crates never rotate
    pub fn update_rotation(&mut self, dt: f32, spin_rate: f32) {
        if self.is_falling {
            self.rotation_angle += spin_rate * dt;
        }
    }

    /// Whether the last-stable lookup may pick this crate
    pub fn can_support(&self, landed_crates_support: bool) -> bool {
        !self.is_falling && (landed_crates_support || !self.landed)
    }

    /// World transform: spin about the crate center, then translate.
    /// Rotation only shows while falling.
    pub fn world_matrix(&self) -> Mat4 {
        if self.is_falling {
            let rotation = Quat::from_axis_angle(self.rotation_axis, self.rotation_angle);
            Mat4::from_rotation_translation(rotation, self.position)
        } else {
            Mat4::from_translation(self.position)
        }
    }
}

/// Static base the tower is built on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Platform {
    pub const POSITION: Vec3 = Vec3::new(0.0, -5.0, 0.0);
    pub const HEIGHT: f32 = 0.5;
    pub const DEPTH: f32 = 10.0;

    /// Platform spanning the full oscillation range of the active crate
    pub fn new(horizontal_bound: f32) -> Self {
        Self {
            position: Self::POSITION,
            width: horizontal_bound * 2.0,
            height: Self::HEIGHT,
            depth: Self::DEPTH,
        }
    }

    /// Transform of a unit cube spanning [-1, 1] onto the platform box
    pub fn world_matrix(&self) -> Mat4 {
        let half_extents = Vec3::new(self.width, self.height, self.depth) * 0.5;
        Mat4::from_scale_rotation_translation(half_extents, Quat::IDENTITY, self.position)
    }
}
