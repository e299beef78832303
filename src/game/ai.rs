// Reactive computer opponent

use log::trace;

use super::fighter::{AttackKind, Fighter, Intent, Pose};
use super::random::RandomSource;
use crate::core::math::Facing;

/// Knobs for the computer opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTuning {
    /// Chance per frame that the AI reacts at all
    pub activation_chance: f32,

    // Spacing
    /// Preferred distance while health is above `healthy_threshold`
    pub healthy_standoff: f32,
    /// Preferred distance once health drops to `healthy_threshold` or below
    pub wary_standoff: f32,
    pub healthy_threshold: i32,
    /// Below this health the AI keeps far away and hops around
    pub critical_threshold: i32,
    pub critical_standoff: f32,
    pub critical_jump_chance: f32,
    /// Back off when closer than standoff minus this margin
    pub retreat_margin: f32,

    // Jumping
    /// Jump when the opponent's centre is more than this far above
    pub chase_height: f32,
    /// Jump over an attacking opponent closer than this
    pub dodge_radius: f32,

    // Attacking
    pub attack_range: f32,
    /// Range inside which a leading AI commits to attacks
    pub close_range: f32,
    pub close_heavy_chance: f32,
    pub mixed_light_chance: f32,
    /// Heavy punish while the opponent is recovering from an attack
    pub punish_heavy_chance: f32,
    pub poke_light_chance: f32,
}

pub const DEFAULT_AI: AiTuning = AiTuning {
    activation_chance: 0.7,

    healthy_standoff: 60.0,
    wary_standoff: 100.0,
    healthy_threshold: 50,
    critical_threshold: 30,
    critical_standoff: 120.0,
    critical_jump_chance: 0.3,
    retreat_margin: 30.0,

    chase_height: 40.0,
    dodge_radius: 60.0,

    attack_range: 80.0,
    close_range: 50.0,
    close_heavy_chance: 0.7,
    mixed_light_chance: 0.6,
    punish_heavy_chance: 0.8,
    poke_light_chance: 0.4,
};

impl Default for AiTuning {
    fn default() -> Self {
        DEFAULT_AI
    }
}

/// Pick this frame's intent for an AI-controlled fighter.
///
/// Every frame is decided from scratch; the only memory is the cooldown and
/// timers the fighter already carries. Draws are taken from `rng` in a fixed
/// order (activation, critical hop, attack choice) and only when the branch
/// that needs them is reached.
pub fn decide(
    me: &Fighter,
    opponent: &Fighter,
    tuning: &AiTuning,
    rng: &mut dyn RandomSource,
) -> Intent {
    if !me.state().accepts_input() {
        return Intent::IDLE;
    }
    if !rng.chance(tuning.activation_chance) {
        return Intent::IDLE;
    }

    let dist_x = opponent.rect().center_x() - me.rect().center_x();
    let dist_y = opponent.rect().center_y() - me.rect().center_y();
    let gap = dist_x.abs();
    let mut intent = Intent::IDLE;

    let mut standoff = if me.health() > tuning.healthy_threshold {
        tuning.healthy_standoff
    } else {
        tuning.wary_standoff
    };

    if me.health() < tuning.critical_threshold {
        standoff = tuning.critical_standoff;
        if me.on_ground() && rng.chance(tuning.critical_jump_chance) {
            intent.jump = true;
        }
    }

    let towards = Facing::towards(me.rect().center_x(), opponent.rect().center_x());
    if gap > standoff {
        intent.movement = Some(towards);
    } else if gap < standoff - tuning.retreat_margin {
        intent.movement = Some(towards.opposite());
    }

    if me.on_ground() {
        let opponent_above = dist_y < -tuning.chase_height;
        let incoming = gap < tuning.dodge_radius && opponent.pose() == Pose::Punch;
        if opponent_above || incoming {
            intent.jump = true;
        }
    }

    if me.attack_cooldown() == 0 && gap < tuning.attack_range {
        intent.attack = choose_attack(me, opponent, gap, tuning, rng);
    }

    trace!("{} AI intent {:?}", me.id().label(), intent);
    intent
}

fn choose_attack(
    me: &Fighter,
    opponent: &Fighter,
    gap: f32,
    tuning: &AiTuning,
    rng: &mut dyn RandomSource,
) -> Option<AttackKind> {
    if me.health() > opponent.health() {
        // Ahead: press the advantage up close
        if gap >= tuning.close_range {
            return None;
        }
        if rng.chance(tuning.close_heavy_chance) {
            return Some(AttackKind::Heavy);
        }
        if rng.chance(tuning.mixed_light_chance) {
            Some(AttackKind::Light)
        } else {
            Some(AttackKind::Heavy)
        }
    } else if opponent.attack_cooldown() > 0 {
        rng.chance(tuning.punish_heavy_chance)
            .then_some(AttackKind::Heavy)
    } else {
        rng.chance(tuning.poke_light_chance)
            .then_some(AttackKind::Light)
    }
}
