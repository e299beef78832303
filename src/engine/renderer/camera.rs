// Fixed screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Maps a fixed logical canvas (origin top-left, y down) onto the whole
/// surface, whatever the window size
#[derive(Debug, Clone)]
pub struct Camera {
    logical_width: f32,
    logical_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        Self {
            logical_width,
            logical_height,
            view_proj: Mat4::orthographic_rh(
                0.0,
                logical_width,
                logical_height,
                0.0,
                -1.0,
                1.0,
            ),
        }
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.logical_width, self.logical_height)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
