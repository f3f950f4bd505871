//! Follow camera
//!
//! Trails behind and above the top of the tower. The target jumps on every
//! supported placement; the eye eases toward its desired spot by a fixed
//! fraction per tick.

use glam::{Mat4, Vec3};

use crate::consts::{CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR};
use crate::tuning::Tuning;

/// View/projection source for any renderer
pub trait Camera {
    fn view(&self) -> Mat4;
    fn projection(&self) -> Mat4;

    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[derive(Debug, Clone)]
pub struct FollowCamera {
    target: Vec3,
    position: Vec3,
    vertical_offset: f32,
    distance_behind: f32,
    smoothing: f32,
    view: Mat4,
    projection: Mat4,
}

impl FollowCamera {
    pub fn new(position: Vec3, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            position,
            vertical_offset: crate::consts::CAMERA_VERTICAL_OFFSET,
            distance_behind: crate::consts::CAMERA_DISTANCE_BEHIND,
            smoothing: crate::consts::CAMERA_SMOOTHING,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.set_aspect_ratio(aspect_ratio);
        camera.update_view_matrix();
        camera
    }

    /// Camera placed and aimed according to the tuning
    pub fn from_tuning(tuning: &Tuning, aspect_ratio: f32) -> Self {
        let mut camera = Self::new(tuning.camera_start, aspect_ratio);
        camera.vertical_offset = tuning.camera_vertical_offset;
        camera.distance_behind = tuning.camera_distance_behind;
        camera.smoothing = tuning.camera_smoothing;
        camera.set_target(tuning.camera_initial_target);
        camera
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Retarget; the view re-aims immediately, the eye catches up over ticks
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update_view_matrix();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let aspect_ratio = if aspect_ratio > 0.0 { aspect_ratio } else { 1.0 };
        self.projection = Mat4::perspective_rh(CAMERA_FOV_Y, aspect_ratio, CAMERA_NEAR, CAMERA_FAR);
    }

    /// Where the eye wants to be for the current target
    pub fn desired_position(&self) -> Vec3 {
        Vec3::new(
            self.target.x,
            self.target.y + self.vertical_offset,
            self.target.z - self.distance_behind,
        )
    }

    /// Ease toward the desired position. Same factor every tick regardless of dt.
    pub fn update(&mut self) {
        self.position = self.position.lerp(self.desired_position(), self.smoothing);
        self.update_view_matrix();
    }

    fn update_view_matrix(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
    }
}

impl Camera for FollowCamera {
    fn view(&self) -> Mat4 {
        self.view
    }

    fn projection(&self) -> Mat4 {
        self.projection
    }
}
