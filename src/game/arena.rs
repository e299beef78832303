// Arena geometry: screen bounds and the platform layout

use crate::core::Rect;
use crate::engine::physics::resolve_landing;

/// Logical screen width
pub const ARENA_WIDTH: f32 = 900.0;
/// Logical screen height
pub const ARENA_HEIGHT: f32 = 500.0;
/// Top edge of the floor
pub const GROUND_Y: f32 = 440.0;

/// Static level geometry.
///
/// The first platform is the floor. It spans the whole arena and is not drawn
/// as a platform; the presentation layer paints a floor band instead.
#[derive(Debug, Clone)]
pub struct Arena {
    width: f32,
    height: f32,
    ground_y: f32,
    platforms: Vec<Rect>,
}

impl Arena {
    pub fn new(width: f32, height: f32, ground_y: f32, platforms: Vec<Rect>) -> Self {
        debug_assert!(!platforms.is_empty(), "arena needs at least a floor");
        debug_assert!(width > 0.0 && height > 0.0, "arena must have a size");
        Self {
            width,
            height,
            ground_y,
            platforms,
        }
    }

    /// The floor plus five floating ledges climbing left-to-right
    pub fn standard() -> Self {
        Self::new(
            ARENA_WIDTH,
            ARENA_HEIGHT,
            GROUND_Y,
            vec![
                Rect::new(0.0, GROUND_Y, ARENA_WIDTH, 20.0),
                Rect::new(150.0, 380.0, 120.0, 20.0),
                Rect::new(400.0, 320.0, 120.0, 20.0),
                Rect::new(650.0, 260.0, 120.0, 20.0),
                Rect::new(250.0, 200.0, 120.0, 20.0),
                Rect::new(550.0, 140.0, 120.0, 20.0),
            ],
        )
    }

    /// Where a body moving down with `velocity_y` comes to rest, if anywhere.
    /// Returns the new bottom edge.
    pub fn resolve_ground_collision(&self, body: &Rect, velocity_y: f32) -> Option<f32> {
        resolve_landing(body, velocity_y, &self.platforms)
    }

    /// Platforms drawn as ledges (everything except the floor)
    pub fn visible_platforms(&self) -> &[Rect] {
        &self.platforms[1..]
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let arena = Arena::standard();
        assert_eq!(arena.platforms.len(), 6);
        assert_eq!(arena.visible_platforms().len(), 5);
        assert_eq!(arena.platforms[0].top(), GROUND_Y);
        assert_eq!(arena.platforms[0].width, ARENA_WIDTH);
    }

    #[test]
    fn test_landing_on_floor() {
        let arena = Arena::standard();
        let body = Rect::new(20.0, 361.0, 30.0, 80.0);
        assert_eq!(arena.resolve_ground_collision(&body, 1.6), Some(GROUND_Y));
    }

    #[test]
    fn test_landing_on_ledge() {
        let arena = Arena::standard();
        // Feet crossed the ledge at y=380 this step
        let body = Rect::new(180.0, 302.0, 30.0, 80.0);
        assert_eq!(arena.resolve_ground_collision(&body, 4.0), Some(380.0));
    }

    #[test]
    fn test_jumping_through_ledge_from_below() {
        let arena = Arena::standard();
        let body = Rect::new(180.0, 302.0, 30.0, 80.0);
        assert_eq!(arena.resolve_ground_collision(&body, -10.0), None);
    }

    #[test]
    fn test_mid_air_has_no_support() {
        let arena = Arena::standard();
        let body = Rect::new(50.0, 100.0, 30.0, 80.0);
        assert_eq!(arena.resolve_ground_collision(&body, 3.0), None);
    }
}
