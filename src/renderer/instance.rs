//! Per-instance and uniform data for drawing crates
//!
//! Everything here is plain old data built by value from the simulation, so a
//! renderer can copy it straight into GPU buffers.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::sim::{Camera, Crate};

/// One textured cube: model matrix plus a falling flag for tinting
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CrateInstance {
    pub model: [[f32; 4]; 4],
    /// 1.0 while falling, 0.0 otherwise
    pub falling: f32,
    pub _pad: [f32; 3],
}

impl CrateInstance {
    /// First shader location used by instance attributes
    pub const SHADER_LOCATION: u32 = 5;

    pub fn new(model: Mat4, falling: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            falling: if falling { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }

    pub fn from_crate(c: &Crate) -> Self {
        Self::new(c.world_matrix(), c.is_falling)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const COLUMN: wgpu::BufferAddress = std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CrateInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: CrateInstance::SHADER_LOCATION,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: COLUMN,
                    shader_location: CrateInstance::SHADER_LOCATION + 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: COLUMN * 2,
                    shader_location: CrateInstance::SHADER_LOCATION + 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: COLUMN * 3,
                    shader_location: CrateInstance::SHADER_LOCATION + 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: COLUMN * 4,
                    shader_location: CrateInstance::SHADER_LOCATION + 4,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Camera data for the vertex shader
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w unused)
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub fn new(camera: &impl Camera, eye: Vec3) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: eye.extend(1.0).to_array(),
        }
    }
}
