// Vertex layout and quad construction for 2D sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

use crate::core::Rect;

/// Vertex in logical screen space
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    /// Tint multiplied with the sampled texel (RGBA)
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec2, tex_coords: Vec2, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
            color: color.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Index pattern of one quad, relative to its first vertex
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Four corners of `rect` (top-left, top-right, bottom-right, bottom-left)
/// mapped onto `uv` = [u_min, v_min, u_max, v_max]. `flip` mirrors the
/// texture horizontally.
pub fn quad(rect: &Rect, uv: [f32; 4], color: Vec4, flip: bool) -> [Vertex; 4] {
    let [mut u0, v0, mut u1, v1] = uv;
    if flip {
        std::mem::swap(&mut u0, &mut u1);
    }

    [
        Vertex::new(Vec2::new(rect.left(), rect.top()), Vec2::new(u0, v0), color),
        Vertex::new(Vec2::new(rect.right(), rect.top()), Vec2::new(u1, v0), color),
        Vertex::new(
            Vec2::new(rect.right(), rect.bottom()),
            Vec2::new(u1, v1),
            color,
        ),
        Vertex::new(
            Vec2::new(rect.left(), rect.bottom()),
            Vec2::new(u0, v1),
            color,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_quad_corners() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let verts = quad(&rect, [0.0, 0.0, 1.0, 1.0], Vec4::ONE, false);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[2].position, [40.0, 60.0]);
        assert_eq!(verts[1].tex_coords, [1.0, 0.0]);
        assert_eq!(verts[3].tex_coords, [0.0, 1.0]);
    }

    #[test]
    fn test_flipped_quad_mirrors_u() {
        let rect = Rect::new(0.0, 0.0, 48.0, 48.0);
        let verts = quad(&rect, [0.25, 0.0, 0.5, 1.0], Vec4::ONE, true);
        assert_eq!(verts[0].tex_coords, [0.5, 0.0]);
        assert_eq!(verts[1].tex_coords, [0.25, 0.0]);
        // Geometry is unchanged
        assert_eq!(verts[0].position, [0.0, 0.0]);
    }
}
