// Presentation: turns match state into draw calls

use super::controller::{GameMode, MatchController};
use super::fighter::{Fighter, SpriteSheetLayout};
use super::mouse::Mouse;
use super::random::RandomSource;
use crate::core::math::Facing;
use crate::core::Rect;
use crate::engine::renderer::{Color, RenderSurface, SpriteBlit};

pub const BACKGROUND: &str = "background.jpg";
/// Sprite sheets for player 1 and player 2
pub const CAT_SHEETS: [&str; 2] = ["cat1.png", "cat2.png"];
pub const MOUSE_SHEET: &str = "mouse.png";

/// Every texture the presentation layer may ask for
pub const TEXTURES: [&str; 4] = [BACKGROUND, CAT_SHEETS[0], CAT_SHEETS[1], MOUSE_SHEET];

/// Stand-in colours when a sheet is missing
const CAT_COLORS: [Color; 2] = [Color::rgb(235, 150, 60), Color::rgb(120, 120, 130)];
const MOUSE_COLOR: Color = Color::rgb(150, 110, 90);

const HEALTH_BAR_WIDTH: f32 = 200.0;
const HEALTH_BAR_HEIGHT: f32 = 20.0;
const HEALTH_BAR_BORDER: f32 = 2.0;
const HEALTH_BAR_MARGIN: f32 = 20.0;

/// Draw one frame. The menu shows only the backdrop; the prompt lives in the
/// window title.
pub fn draw_frame<R: RandomSource>(controller: &MatchController<R>, surface: &mut dyn RenderSurface) {
    let arena = controller.arena();
    let screen = Rect::new(0.0, 0.0, arena.width(), arena.height());

    if !surface.draw_image(BACKGROUND) {
        surface.fill_rect(screen, Color::SKY);
    }
    if controller.mode() == GameMode::Menu {
        return;
    }

    let ground_y = arena.ground_y();
    surface.fill_rect(
        Rect::new(0.0, ground_y, arena.width(), arena.height() - ground_y),
        Color::BLACK,
    );
    for platform in arena.visible_platforms() {
        surface.fill_rect(*platform, Color::BLACK);
    }

    for fighter in controller.fighters() {
        draw_fighter(fighter, surface);
    }
    if let Some(mouse) = controller.mouse() {
        draw_mouse(mouse, surface);
    }

    let [p1, p2] = controller.fighters();
    health_bar(
        surface,
        HEALTH_BAR_MARGIN,
        HEALTH_BAR_MARGIN,
        p1.health_fraction(),
    );
    health_bar(
        surface,
        arena.width() - HEALTH_BAR_WIDTH - HEALTH_BAR_MARGIN,
        HEALTH_BAR_MARGIN,
        p2.health_fraction(),
    );
}

fn draw_fighter(fighter: &Fighter, surface: &mut dyn RenderSurface) {
    let index = fighter.id().index();
    let layout = SpriteSheetLayout::fighter();
    surface.blit_frame(&blit(
        &layout,
        CAT_SHEETS[index],
        layout.column(fighter.pose()),
        fighter.rect(),
        // Sheets face right
        fighter.facing() == Facing::Left,
        CAT_COLORS[index],
    ));
}

fn draw_mouse(mouse: &Mouse, surface: &mut dyn RenderSurface) {
    let layout = SpriteSheetLayout::mouse();
    surface.blit_frame(&blit(
        &layout,
        MOUSE_SHEET,
        0,
        mouse.rect(),
        mouse.flipped(),
        MOUSE_COLOR,
    ));
}

fn blit(
    layout: &SpriteSheetLayout,
    sheet: &'static str,
    column: u32,
    body: &Rect,
    flip: bool,
    fallback: Color,
) -> SpriteBlit {
    SpriteBlit {
        sheet,
        column,
        frame_width: layout.frame_width,
        frame_height: layout.frame_height,
        scale: layout.scale,
        anchor: body.mid_bottom(),
        flip,
        fallback,
    }
}

/// Bordered bar: red back, green fill proportional to `fraction`
fn health_bar(surface: &mut dyn RenderSurface, x: f32, y: f32, fraction: f32) {
    let fraction = fraction.clamp(0.0, 1.0);
    surface.fill_rect(
        Rect::new(
            x - HEALTH_BAR_BORDER,
            y - HEALTH_BAR_BORDER,
            HEALTH_BAR_WIDTH + 2.0 * HEALTH_BAR_BORDER,
            HEALTH_BAR_HEIGHT + 2.0 * HEALTH_BAR_BORDER,
        ),
        Color::BLACK,
    );
    surface.fill_rect(
        Rect::new(x, y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT),
        Color::RED,
    );
    if fraction > 0.0 {
        surface.fill_rect(
            Rect::new(x, y, HEALTH_BAR_WIDTH * fraction, HEALTH_BAR_HEIGHT),
            Color::GREEN,
        );
    }
}

/// A recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Rect, Color),
    Blit(SpriteBlit),
    Image(&'static str),
}

/// Surface that records draw calls instead of drawing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
    /// Image names `draw_image` reports as available
    pub images: Vec<&'static str>,
}

#[cfg(test)]
impl DrawList {
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<SpriteBlit> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit(blit) => Some(*blit),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl RenderSurface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn blit_frame(&mut self, blit: &SpriteBlit) {
        self.calls.push(DrawCall::Blit(*blit));
    }

    fn draw_image(&mut self, name: &'static str) -> bool {
        if !self.images.contains(&name) {
            return false;
        }
        self.calls.push(DrawCall::Image(name));
        true
    }
}
