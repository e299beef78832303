// Mouse pickup that scurries along the floor and heals whoever catches it

use log::debug;

use super::arena::Arena;
use crate::core::Rect;

/// Mouse tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per frame
    pub speed: f32,
    /// Chance per frame that a mouse appears while none is present
    pub spawn_chance: f32,
}

pub const DEFAULT_MOUSE: MouseTuning = MouseTuning {
    width: 20.0,
    height: 20.0,
    speed: 3.0,
    spawn_chance: 0.002,
};

impl Default for MouseTuning {
    fn default() -> Self {
        DEFAULT_MOUSE
    }
}

/// Direction of travel across the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    LeftToRight,
    RightToLeft,
}

impl Heading {
    pub fn sign(self) -> f32 {
        match self {
            Heading::LeftToRight => 1.0,
            Heading::RightToLeft => -1.0,
        }
    }
}

/// Result of moving the mouse one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseStatus {
    Running,
    /// Fully off screen; the owner should drop it
    Expired,
}

#[derive(Debug, Clone)]
pub struct Mouse {
    rect: Rect,
    heading: Heading,
    speed: f32,
    arena_width: f32,
}

impl Mouse {
    /// Spawn just off the edge the mouse runs away from, standing on the floor
    pub fn spawn(heading: Heading, arena: &Arena, tuning: &MouseTuning) -> Self {
        let x = match heading {
            Heading::LeftToRight => -tuning.width,
            Heading::RightToLeft => arena.width(),
        };
        let rect = Rect::new(
            x,
            arena.ground_y() - tuning.height,
            tuning.width,
            tuning.height,
        );
        debug!("Mouse spawned at x={} heading {:?}", x, heading);

        Self {
            rect,
            heading,
            speed: tuning.speed,
            arena_width: arena.width(),
        }
    }

    /// Move one frame and report whether the mouse left the arena
    pub fn update(&mut self) -> MouseStatus {
        self.rect.x += self.heading.sign() * self.speed;

        let gone = match self.heading {
            Heading::RightToLeft => self.rect.right() < 0.0,
            Heading::LeftToRight => self.rect.left() > self.arena_width,
        };
        if gone {
            MouseStatus::Expired
        } else {
            MouseStatus::Running
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Sprite faces left by default; flip when running right
    pub fn flipped(&self) -> bool {
        self.heading == Heading::LeftToRight
    }
}
