//! Renderer boundary
//!
//! Converts simulation state into GPU-ready data by value. Pipelines, meshes
//! and draw calls belong to the platform renderer.

pub mod frame;
pub mod instance;

pub use frame::FrameSnapshot;
pub use instance::{CameraUniform, CrateInstance};
