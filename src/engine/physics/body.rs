// Kinematic bodies driven by gravity and snapped onto platforms

use crate::core::Rect;

/// A rectangle with vertical velocity that falls under gravity and rests on platforms.
///
/// Horizontal motion is applied directly to `rect` by the owner; only the vertical
/// axis is integrated here.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// Current bounds in screen space
    pub rect: Rect,
    /// Vertical velocity in units per frame (positive is downward)
    pub velocity_y: f32,
    /// Whether the body ended the last step resting on a platform
    pub on_ground: bool,
}

impl KinematicBody {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    /// Advance one fixed step: accelerate, move, then snap to whatever surface
    /// `ground` reports for the new bounds and velocity.
    pub fn step(&mut self, gravity: f32, ground: impl FnOnce(&Rect, f32) -> Option<f32>) {
        self.velocity_y += gravity;
        self.rect.y += self.velocity_y;
        self.on_ground = false;

        if let Some(top) = ground(&self.rect, self.velocity_y) {
            self.rect.set_bottom(top);
            self.velocity_y = 0.0;
            self.on_ground = true;
        }
    }

    /// Launch upward with the given (negative) velocity
    pub fn launch(&mut self, velocity_y: f32) {
        self.velocity_y = velocity_y;
    }

    /// Keep the body inside `[min_x, max_x]` horizontally
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        let max_left = max_x - self.rect.width;
        self.rect.x = crate::core::math::clamp(self.rect.x, min_x, max_left);
    }
}
