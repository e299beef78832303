// Fighter poses and the sprite-sheet layout that draws them

/// What a fighter looks like this frame
///
/// Game logic only ever reads and writes poses; the sprite column used to draw a
/// pose is looked up separately through `SpriteSheetLayout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Idle,
    Punch,
    Jump,
    Hurt,
    Dead,
    Win,
    /// First half of the eating animation
    Eating1,
    /// Second half of the eating animation
    Eating2,
}

impl Pose {
    pub const ALL: [Pose; 8] = [
        Pose::Idle,
        Pose::Punch,
        Pose::Jump,
        Pose::Hurt,
        Pose::Dead,
        Pose::Win,
        Pose::Eating1,
        Pose::Eating2,
    ];

    pub fn is_eating(self) -> bool {
        matches!(self, Pose::Eating1 | Pose::Eating2)
    }
}

/// Layout of a single-row sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheetLayout {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Number of frame columns in the sheet
    pub columns: u32,
    /// Uniform scale applied when drawing
    pub scale: f32,
}

impl SpriteSheetLayout {
    pub const fn new(frame_width: u32, frame_height: u32, columns: u32, scale: f32) -> Self {
        Self {
            frame_width,
            frame_height,
            columns,
            scale,
        }
    }

    /// Cat sheets: 16x16 frames drawn at 3x, one column per pose
    pub const fn fighter() -> Self {
        Self::new(16, 16, 8, 3.0)
    }

    /// Mouse sheet: a single 20x20 frame drawn at 1x
    pub const fn mouse() -> Self {
        Self::new(20, 20, 1, 1.0)
    }

    /// Column that holds `pose`. Sheets with fewer columns than poses clamp to
    /// their last column so a short sheet never indexes out of bounds.
    pub fn column(&self, pose: Pose) -> u32 {
        let column = match pose {
            Pose::Idle => 0,
            Pose::Punch => 1,
            Pose::Jump => 2,
            Pose::Hurt => 3,
            Pose::Dead => 4,
            Pose::Win => 5,
            Pose::Eating1 => 6,
            Pose::Eating2 => 7,
        };
        column.min(self.columns.saturating_sub(1))
    }
}

impl Default for SpriteSheetLayout {
    fn default() -> Self {
        Self::fighter()
    }
}
