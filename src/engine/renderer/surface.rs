// Draw primitives the game layer renders through

use glam::{Vec2, Vec4};

use crate::core::Rect;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(220, 30, 60);
    /// Backdrop used when no background image is available
    pub const SKY: Color = Color::rgb(150, 200, 235);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalised components for vertex tinting
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_vec4().to_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// One frame of a single-row sprite sheet, drawn scaled with its
/// bottom-centre pinned to `anchor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteBlit {
    /// Texture name the sheet was loaded under
    pub sheet: &'static str,
    pub column: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub scale: f32,
    pub anchor: Vec2,
    /// Mirror horizontally
    pub flip: bool,
    /// Drawn instead when the sheet is missing
    pub fallback: Color,
}

impl SpriteBlit {
    /// Screen rectangle covered by the scaled frame
    pub fn dest_rect(&self) -> Rect {
        let width = self.frame_width as f32 * self.scale;
        let height = self.frame_height as f32 * self.scale;
        Rect::new(
            self.anchor.x - width / 2.0,
            self.anchor.y - height,
            width,
            height,
        )
    }

    /// Texture coordinates [u_min, v_min, u_max, v_max] of the frame inside a
    /// sheet of the given pixel size. Columns past the sheet clamp to its last frame.
    pub fn frame_uvs(&self, sheet_width: u32, sheet_height: u32) -> [f32; 4] {
        let columns = (sheet_width / self.frame_width.max(1)).max(1);
        let column = self.column.min(columns - 1);

        let u_min = (column * self.frame_width) as f32 / sheet_width as f32;
        let u_max = ((column + 1) * self.frame_width) as f32 / sheet_width as f32;
        let v_max = self.frame_height as f32 / sheet_height as f32;

        [u_min, 0.0, u_max.min(1.0), v_max.min(1.0)]
    }
}

/// Immediate-mode drawing target, in logical screen units with y down
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn blit_frame(&mut self, blit: &SpriteBlit);

    /// Stretch the named image over the whole screen.
    /// Returns false if it is not available.
    fn draw_image(&mut self, name: &'static str) -> bool;
}
