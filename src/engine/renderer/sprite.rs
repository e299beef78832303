// Sprite batching and the sprite render pipeline

use std::ops::Range;

use super::texture::{TextureHandle, TextureManager};
use super::vertex::{Vertex, QUAD_INDICES};
use super::camera::{Camera, CameraUniform};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Quads that fit in a 16-bit index buffer
const MAX_QUADS: usize = u16::MAX as usize / 4;

/// A run of consecutive quads sharing one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: TextureHandle,
    pub indices: Range<u32>,
}

/// Quads queued for one frame, in painter's order
#[derive(Debug, Default)]
pub struct SpriteBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    batches: Vec<DrawBatch>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.batches.clear();
    }

    /// Queue a quad. Consecutive quads with the same texture share a draw call.
    pub fn push_quad(&mut self, texture: TextureHandle, corners: [Vertex; 4]) {
        if self.quad_count() >= MAX_QUADS {
            log::warn!("Sprite batch full, dropping quad");
            return;
        }

        let base = self.vertices.len() as u16;
        let first_index = self.indices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        let end = self.indices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.indices.end = end,
            _ => self.batches.push(DrawBatch {
                texture,
                indices: first_index..end,
            }),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// GPU side of sprite drawing: one pipeline, a camera uniform and growable
/// vertex/index buffers refilled every frame
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    /// Capacity of the GPU buffers, in quads
    capacity: usize,
}

impl SpriteRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Flipped sprites and the y-down projection reverse winding
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let capacity = 64;
        let (vertex_buffer, index_buffer) = create_buffers(device, capacity);

        Self {
            render_pipeline,
            texture_layout,
            camera_buffer,
            camera_bind_group,
            vertex_buffer,
            index_buffer,
            capacity,
        }
    }

    /// Layout every texture bind group must follow
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::new(camera)]),
        );
    }

    /// Upload this frame's quads, growing the GPU buffers if needed
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &SpriteBatch) {
        if batch.is_empty() {
            return;
        }
        if batch.quad_count() > self.capacity {
            self.capacity = batch.quad_count().next_power_of_two();
            let (vertex_buffer, index_buffer) = create_buffers(device, self.capacity);
            self.vertex_buffer = vertex_buffer;
            self.index_buffer = index_buffer;
            log::debug!("Sprite buffers grown to {} quads", self.capacity);
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(batch.vertices()));
        queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(batch.indices()));
    }

    /// Record one draw call per batch. Batches whose texture is unknown are skipped.
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        batch: &SpriteBatch,
        textures: &'a TextureManager,
    ) {
        if batch.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for draw in batch.batches() {
            let Some(texture) = textures.get(draw.texture) else {
                continue;
            };
            render_pass.set_bind_group(1, texture.bind_group(), &[]);
            render_pass.draw_indexed(draw.indices.clone(), 0, 0..1);
        }
    }
}

fn create_buffers(device: &wgpu::Device, quads: usize) -> (wgpu::Buffer, wgpu::Buffer) {
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Vertex Buffer"),
        size: (quads * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Index Buffer"),
        size: (quads * QUAD_INDICES.len() * std::mem::size_of::<u16>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (vertex_buffer, index_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::engine::renderer::vertex::quad;
    use glam::Vec4;

    fn corners() -> [Vertex; 4] {
        quad(
            &Rect::new(0.0, 0.0, 10.0, 10.0),
            [0.0, 0.0, 1.0, 1.0],
            Vec4::ONE,
            false,
        )
    }

    #[test]
    fn test_same_texture_shares_a_batch() {
        let mut batch = SpriteBatch::new();
        batch.push_quad(TextureHandle(0), corners());
        batch.push_quad(TextureHandle(0), corners());
        assert_eq!(batch.quad_count(), 2);
        assert_eq!(
            batch.batches(),
            &[DrawBatch {
                texture: TextureHandle(0),
                indices: 0..12
            }]
        );
        assert_eq!(&batch.indices()[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_texture_change_splits_batches() {
        let mut batch = SpriteBatch::new();
        batch.push_quad(TextureHandle(0), corners());
        batch.push_quad(TextureHandle(1), corners());
        batch.push_quad(TextureHandle(0), corners());
        let ranges: Vec<_> = batch.batches().iter().map(|b| b.indices.clone()).collect();
        assert_eq!(ranges, vec![0..6, 6..12, 12..18]);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut batch = SpriteBatch::new();
        batch.push_quad(TextureHandle(0), corners());
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.batches().is_empty());
        assert!(batch.indices().is_empty());
    }
}
