// Attack profiles and hit-box construction

use crate::core::math::Facing;
use crate::core::Rect;
use crate::engine::audio::Sound;

/// Vertical offset of the hit-box band below the attacker's top edge
pub const HITBOX_TOP_OFFSET: f32 = 20.0;
/// Height of the hit-box band
pub const HITBOX_HEIGHT: f32 = 40.0;

/// The two attacks every fighter has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Light,
    Heavy,
}

/// Fixed numbers describing one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub damage: i32,
    /// Hit-box width, measured from the attacker's centre line
    pub reach: f32,
    /// Frames the punch pose overrides idle
    pub pose_frames: u32,
    /// Frames before the next attack may start
    pub cooldown: u32,
}

impl AttackProfile {
    pub const LIGHT: AttackProfile = AttackProfile {
        damage: 10,
        reach: 50.0,
        pose_frames: 8,
        cooldown: 15,
    };

    pub const HEAVY: AttackProfile = AttackProfile {
        damage: 25,
        reach: 40.0,
        pose_frames: 15,
        cooldown: 35,
    };
}

impl AttackKind {
    pub fn profile(self) -> AttackProfile {
        match self {
            AttackKind::Light => AttackProfile::LIGHT,
            AttackKind::Heavy => AttackProfile::HEAVY,
        }
    }

    /// Tier-specific sound played on top of the generic hit sound
    pub fn impact_sound(self) -> Sound {
        match self {
            AttackKind::Light => Sound::LightHit,
            AttackKind::Heavy => Sound::HeavyHit,
        }
    }
}

/// Result of an attack attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Still cooling down; nothing happened
    OnCooldown,
    /// Swung and missed (or the target was already down)
    Whiff,
    /// Connected with the opponent
    Hit,
}

/// Build the hit-box for an attack.
///
/// The box starts at the attacker's horizontal centre and extends `reach` units
/// in the facing direction, so its centre sits `reach / 2` from the attacker's
/// centre. Vertically it covers a fixed band starting `HITBOX_TOP_OFFSET` below
/// the attacker's top edge. Positions are kept as exact floats, so left- and
/// right-facing boxes are mirror images.
pub fn hitbox(attacker: &Rect, facing: Facing, reach: f32) -> Rect {
    let center_x = attacker.center_x();
    let x = center_x + facing.sign() * reach / 2.0 - reach / 2.0;
    Rect::new(x, attacker.top() + HITBOX_TOP_OFFSET, reach, HITBOX_HEIGHT)
}
