// Fighter stats - both cats share the same numbers

/// Fixed fighter tuning, in logical units per frame at 60 steps per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterStats {
    // Dimensions
    /// Body width in logical units
    pub width: f32,
    /// Body height in logical units
    pub height: f32,

    // Movement
    /// Horizontal distance covered per frame while a direction is held
    pub move_speed: f32,
    /// Vertical velocity applied on jump (negative is upward)
    pub jump_velocity: f32,
    /// Frames the jump pose overrides idle
    pub jump_pose_frames: u32,
    /// Downward acceleration per frame
    pub gravity: f32,

    // Combat
    /// Health at spawn and the cap for healing
    pub max_health: i32,
    /// Frames a fighter shows the hurt pose after being hit
    pub hurt_frames: u32,
    /// Horizontal shove applied to a fighter that gets hit
    pub knockback: f32,
    /// Frames the win pose is pinned when a fighter wins
    pub win_pose_frames: u32,
}

/// The one set of stats used by both fighters
pub const BASE_STATS: FighterStats = FighterStats {
    width: 30.0,
    height: 80.0,

    move_speed: 5.0,
    jump_velocity: -15.0,
    jump_pose_frames: 15,
    gravity: 0.8,

    max_health: 200,
    hurt_frames: 18,
    knockback: 10.0,
    win_pose_frames: 30,
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = FighterStats::default();
        assert_eq!(stats.max_health, 200);
        assert_eq!(stats.hurt_frames, 18);
        assert_eq!(stats.width, 30.0);
        assert_eq!(stats.height, 80.0);
    }

    #[test]
    fn test_jump_is_upward() {
        assert!(BASE_STATS.jump_velocity < 0.0);
        assert!(BASE_STATS.gravity > 0.0);
    }
}
