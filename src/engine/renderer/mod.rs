// Rendering system using wgpu

mod camera;
mod sprite;
mod surface;
mod texture;
mod vertex;

pub use surface::{Color, RenderSurface, SpriteBlit};

use camera::Camera;
use sprite::{SpriteBatch, SpriteRenderer};
use texture::{Texture, TextureHandle, TextureManager};

use anyhow::Result;
use glam::{Vec2, Vec4};
use image::RgbaImage;
use log::{debug, info};
use std::sync::Arc;
use winit::window::Window;

use crate::core::Rect;

const WHITE_TEXTURE: &str = "__white";

/// Owns the GPU device and draws everything queued through `RenderSurface`
/// once per frame
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_renderer: SpriteRenderer,
    textures: TextureManager,
    /// Backs flat colour fills
    white: TextureHandle,
    camera: Camera,
    batch: SpriteBatch,
}

impl Renderer {
    /// Create a renderer drawing a `logical_size` canvas stretched over the window
    pub async fn new(window: Arc<Window>, logical_size: Vec2) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sprite_renderer = SpriteRenderer::new(&device, surface_format);

        let mut textures = TextureManager::new();
        let white = textures.insert(
            WHITE_TEXTURE,
            Texture::from_color(
                &device,
                &queue,
                sprite_renderer.texture_layout(),
                [255, 255, 255, 255],
                WHITE_TEXTURE,
            ),
        );

        let camera = Camera::new(logical_size.x, logical_size.y);

        info!(
            "Renderer initialized with {}x{} window, {}x{} logical canvas",
            size.width, size.height, logical_size.x, logical_size.y
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_renderer,
            textures,
            white,
            camera,
            batch: SpriteBatch::new(),
        })
    }

    /// Upload an image so it can be drawn by name
    pub fn load_texture(&mut self, name: &str, image: &RgbaImage) {
        let texture = Texture::from_image(
            &self.device,
            &self.queue,
            self.sprite_renderer.texture_layout(),
            image,
            name,
        );
        self.textures.insert(name, texture);
        debug!(
            "Uploaded texture {} ({}x{})",
            name,
            image.width(),
            image.height()
        );
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.handle(name).is_some()
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Reconfigure the surface at its current size, after it was lost or outdated
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    /// Clear to `clear`, draw every queued quad and present. The queue is
    /// emptied even when the frame could not be acquired.
    pub fn render(&mut self, clear: Color) -> Result<(), wgpu::SurfaceError> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(err) => {
                self.batch.clear();
                return Err(err);
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.sprite_renderer.update_camera(&self.queue, &self.camera);
        self.sprite_renderer
            .prepare(&self.device, &self.queue, &self.batch);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer
                .render(&mut render_pass, &self.batch, &self.textures);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.batch.clear();

        Ok(())
    }

    fn push_rect(&mut self, texture: TextureHandle, rect: &Rect, uv: [f32; 4], tint: Vec4, flip: bool) {
        self.batch
            .push_quad(texture, vertex::quad(rect, uv, tint, flip));
    }
}

impl RenderSurface for Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(self.white, &rect, [0.0, 0.0, 1.0, 1.0], color.to_vec4(), false);
    }

    fn blit_frame(&mut self, blit: &SpriteBlit) {
        let dest = blit.dest_rect();
        let sheet = self
            .textures
            .handle(blit.sheet)
            .and_then(|handle| self.textures.get(handle).map(|t| (handle, t.size())));

        match sheet {
            Some((handle, (width, height))) => {
                let uv = blit.frame_uvs(width, height);
                self.push_rect(handle, &dest, uv, Vec4::ONE, blit.flip);
            }
            None => self.fill_rect(dest, blit.fallback),
        }
    }

    fn draw_image(&mut self, name: &'static str) -> bool {
        let Some(handle) = self.textures.handle(name) else {
            return false;
        };
        let size = self.camera.logical_size();
        let rect = Rect::new(0.0, 0.0, size.x, size.y);
        self.push_rect(handle, &rect, [0.0, 0.0, 1.0, 1.0], Vec4::ONE, false);
        true
    }
}
