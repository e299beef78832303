// Fighter entity: movement, combat, eating and per-frame update

use log::{debug, info};

use super::animation::Pose;
use super::combat::{hitbox, AttackKind, AttackOutcome};
use super::intent::Intent;
use super::state::{AfterMeal, FighterState, MealTick};
use super::stats::FighterStats;
use crate::core::math::{tick_down, Facing};
use crate::core::Rect;
use crate::engine::audio::{Sound, SoundCues};
use crate::engine::input::ControlBinding;
use crate::engine::physics::KinematicBody;
use crate::game::arena::Arena;

/// Which side of the match a fighter is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterId {
    PlayerOne,
    PlayerTwo,
}

impl FighterId {
    pub fn index(self) -> usize {
        match self {
            FighterId::PlayerOne => 0,
            FighterId::PlayerTwo => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FighterId::PlayerOne => "Player 1",
            FighterId::PlayerTwo => "Player 2",
        }
    }
}

/// A cat in the arena, driven either by a keyboard binding or by the AI
#[derive(Debug, Clone)]
pub struct Fighter {
    id: FighterId,
    stats: FighterStats,
    /// Keys used when this fighter is human-controlled
    controls: ControlBinding,

    // Physics
    body: KinematicBody,
    facing: Facing,

    // Combat
    health: i32,
    attack_cooldown: u32,
    hurt_timer: u32,
    /// Frames left on the current pose overlay before falling back to idle
    anim_timer: u32,
    pose: Pose,

    state: FighterState,
}

impl Fighter {
    /// Create a fighter standing with its feet at `ground_y`
    pub fn new(
        id: FighterId,
        spawn_x: f32,
        ground_y: f32,
        facing: Facing,
        controls: ControlBinding,
        stats: FighterStats,
    ) -> Self {
        debug_assert!(stats.max_health > 0, "max health must be positive");
        let rect = Rect::new(spawn_x, ground_y - stats.height, stats.width, stats.height);

        Self {
            id,
            stats,
            controls,
            body: KinematicBody::new(rect),
            facing,
            health: stats.max_health,
            attack_cooldown: 0,
            hurt_timer: 0,
            anim_timer: 0,
            pose: Pose::Idle,
            state: FighterState::Fighting,
        }
    }

    /// Advance one frame.
    ///
    /// Order matters: an eating fighter only chews; a dead fighter does nothing;
    /// otherwise timers tick, the intent is applied (unless the fighter already
    /// won), physics runs and finally the death check, so a fatal hit shows
    /// on the following frame.
    pub fn update(
        &mut self,
        intent: &Intent,
        opponent: &mut Fighter,
        arena: &Arena,
        cues: &mut SoundCues,
    ) {
        if self.advance_meal() {
            return;
        }
        if self.state.is_dead() {
            return;
        }

        self.tick_timers();

        if self.state.accepts_input() {
            self.apply_intent(intent, opponent, cues);
        }

        self.body.step(self.stats.gravity, |rect, velocity_y| {
            arena.resolve_ground_collision(rect, velocity_y)
        });
        self.check_death();
    }

    /// Chew for one frame if eating. Returns true if the fighter was eating.
    pub fn advance_meal(&mut self) -> bool {
        match self.state.tick_meal() {
            None => false,
            Some(MealTick::Chewing { first_half }) => {
                self.pose = if first_half {
                    Pose::Eating1
                } else {
                    Pose::Eating2
                };
                true
            }
            Some(MealTick::Finished { heal, then }) => {
                self.health = (self.health + heal).min(self.stats.max_health);
                self.pose = match then {
                    AfterMeal::Fighting => Pose::Idle,
                    AfterMeal::Winning => Pose::Win,
                };
                debug!(
                    "{} finished eating, healed {} to {}",
                    self.id.label(),
                    heal,
                    self.health
                );
                true
            }
        }
    }

    fn tick_timers(&mut self) {
        self.attack_cooldown = tick_down(self.attack_cooldown);
        self.hurt_timer = tick_down(self.hurt_timer);
        self.anim_timer = tick_down(self.anim_timer);

        if self.anim_timer == 0 && self.hurt_timer == 0 {
            self.pose = if self.state.is_winner() {
                Pose::Win
            } else {
                Pose::Idle
            };
        }
    }

    fn apply_intent(&mut self, intent: &Intent, opponent: &mut Fighter, cues: &mut SoundCues) {
        if let Some(direction) = intent.movement {
            self.facing = direction;
            self.body.rect.x += direction.sign() * self.stats.move_speed;
        }

        if intent.jump {
            self.try_jump(cues);
        }

        if let Some(kind) = intent.attack {
            self.try_attack(kind, opponent, cues);
        }
    }

    /// Jump if standing on a platform. Returns true if the jump happened.
    pub fn try_jump(&mut self, cues: &mut SoundCues) -> bool {
        if !self.body.on_ground {
            return false;
        }
        self.body.launch(self.stats.jump_velocity);
        self.pose = Pose::Jump;
        self.anim_timer = self.stats.jump_pose_frames;
        cues.play(Sound::Jump);
        true
    }

    /// Swing at the opponent. Does nothing at all while the cooldown runs.
    pub fn try_attack(
        &mut self,
        kind: AttackKind,
        opponent: &mut Fighter,
        cues: &mut SoundCues,
    ) -> AttackOutcome {
        if self.attack_cooldown > 0 {
            return AttackOutcome::OnCooldown;
        }

        let profile = kind.profile();
        self.pose = Pose::Punch;
        self.anim_timer = profile.pose_frames;
        self.attack_cooldown = profile.cooldown;

        let reach = hitbox(&self.body.rect, self.facing, profile.reach);
        if !reach.intersects(opponent.rect()) || !opponent.state.is_vulnerable() {
            return AttackOutcome::Whiff;
        }

        opponent.take_hit(profile.damage, self.facing.sign() * self.stats.knockback);
        cues.play(Sound::Hit);
        cues.play(kind.impact_sound());
        debug!(
            "{} hit {} with {:?}, health now {}",
            self.id.label(),
            opponent.id.label(),
            kind,
            opponent.health
        );
        AttackOutcome::Hit
    }

    /// Apply damage, hurt pose and knockback. Health never drops below zero;
    /// the fighter is marked dead at its own next death check.
    fn take_hit(&mut self, damage: i32, knockback_x: f32) {
        self.health = (self.health - damage).max(0);
        self.hurt_timer = self.stats.hurt_frames;
        self.pose = Pose::Hurt;
        self.body.rect.x += knockback_x;
    }

    fn check_death(&mut self) {
        if self.health <= 0 && self.state.die() {
            self.health = 0;
            self.pose = Pose::Dead;
            info!("{} is knocked out", self.id.label());
        }
    }

    /// Start eating a mouse. Returns false if dead, about to go down or
    /// already eating.
    pub fn eat(&mut self, cues: &mut SoundCues) -> bool {
        if self.health <= 0 {
            return false;
        }
        if !self.state.begin_meal(self.health, self.stats.max_health) {
            return false;
        }
        self.pose = Pose::Eating1;
        cues.stop(Sound::PickupAmbient);
        cues.play(Sound::Eat);
        info!(
            "{} is eating, will heal {}",
            self.id.label(),
            self.state.pending_heal().unwrap_or(0)
        );
        true
    }

    /// Mark this fighter as the winner and pin the win pose.
    /// Returns false if it already won or is dead.
    pub fn declare_winner(&mut self) -> bool {
        if !self.state.win() {
            return false;
        }
        if !self.state.is_eating() {
            self.pose = Pose::Win;
        }
        if self.anim_timer == 0 {
            self.anim_timer = self.stats.win_pose_frames;
        }
        true
    }

    /// Keep the body inside the arena's horizontal bounds
    pub fn clamp_to(&mut self, min_x: f32, max_x: f32) {
        self.body.clamp_x(min_x, max_x);
    }

    pub fn id(&self) -> FighterId {
        self.id
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn velocity_y(&self) -> f32 {
        self.body.velocity_y
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    /// Health as a fraction of max health in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.stats.max_health as f32
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown
    }

    pub fn hurt_timer(&self) -> u32 {
        self.hurt_timer
    }

    pub fn anim_timer(&self) -> u32 {
        self.anim_timer
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn state(&self) -> &FighterState {
        &self.state
    }

    pub fn controls(&self) -> &ControlBinding {
        &self.controls
    }

    pub fn stats(&self) -> &FighterStats {
        &self.stats
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    pub fn is_winner(&self) -> bool {
        self.state.is_winner()
    }

    pub fn is_eating(&self) -> bool {
        self.state.is_eating()
    }

    #[cfg(test)]
    pub(crate) fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    #[cfg(test)]
    pub(crate) fn set_attack_cooldown(&mut self, frames: u32) {
        self.attack_cooldown = frames;
    }

    #[cfg(test)]
    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::audio::SoundCue;
    use crate::game::fighter::state::EAT_FRAMES;
    use crate::game::fighter::stats::BASE_STATS;
    use approx::assert_relative_eq;

    const GROUND_Y: f32 = 440.0;

    fn floor() -> Arena {
        Arena::new(900.0, 500.0, GROUND_Y, vec![Rect::new(0.0, GROUND_Y, 900.0, 20.0)])
    }

    fn fighter(id: FighterId, x: f32, facing: Facing) -> Fighter {
        Fighter::new(
            id,
            x,
            GROUND_Y,
            facing,
            ControlBinding::new(),
            BASE_STATS,
        )
    }

    /// Two grounded fighters 40 units apart, facing each other
    fn face_off() -> (Fighter, Fighter) {
        let mut a = fighter(FighterId::PlayerOne, 100.0, Facing::Right);
        let mut b = fighter(FighterId::PlayerTwo, 140.0, Facing::Left);
        a.body_mut().on_ground = true;
        b.body_mut().on_ground = true;
        (a, b)
    }

    #[test]
    fn test_spawn_state() {
        let f = fighter(FighterId::PlayerOne, 150.0, Facing::Right);
        assert_eq!(f.health(), 200);
        assert_eq!(f.rect().bottom(), GROUND_Y);
        assert_eq!(f.pose(), Pose::Idle);
        assert_eq!(f.attack_cooldown(), 0);
        assert!(!f.is_dead());
    }

    #[test]
    fn test_light_attack_scenario() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();

        let outcome = a.try_attack(AttackKind::Light, &mut b, &mut cues);
        assert_eq!(outcome, AttackOutcome::Hit);
        assert_eq!(b.health(), 190);
        assert_eq!(b.hurt_timer(), 18);
        assert_eq!(b.pose(), Pose::Hurt);
        assert_relative_eq!(b.rect().x, 150.0);

        assert_eq!(a.pose(), Pose::Punch);
        assert_eq!(a.attack_cooldown(), 15);
        assert_eq!(a.anim_timer(), 8);
        assert!(cues.contains(SoundCue::Play(Sound::Hit)));
        assert!(cues.contains(SoundCue::Play(Sound::LightHit)));
    }

    #[test]
    fn test_knockback_follows_attacker_facing() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        b.try_attack(AttackKind::Heavy, &mut a, &mut cues);
        assert_eq!(a.health(), 175);
        assert_relative_eq!(a.rect().x, 90.0);
    }

    #[test]
    fn test_attack_on_cooldown_is_no_op() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.set_attack_cooldown(5);

        let outcome = a.try_attack(AttackKind::Heavy, &mut b, &mut cues);
        assert_eq!(outcome, AttackOutcome::OnCooldown);
        assert_eq!(b.health(), 200);
        assert_eq!(b.hurt_timer(), 0);
        assert_eq!(b.pose(), Pose::Idle);
        assert_eq!(a.attack_cooldown(), 5);
        assert!(cues.as_slice().is_empty());
    }

    #[test]
    fn test_attack_facing_away_whiffs() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.set_facing(Facing::Left);
        assert_eq!(
            a.try_attack(AttackKind::Light, &mut b, &mut cues),
            AttackOutcome::Whiff
        );
        assert_eq!(b.health(), 200);
        // The swing still costs the cooldown
        assert_eq!(a.attack_cooldown(), 15);
    }

    #[test]
    fn test_dead_opponent_is_not_hit() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        b.set_health(0);
        b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
        assert!(b.is_dead());

        assert_eq!(
            a.try_attack(AttackKind::Light, &mut b, &mut cues),
            AttackOutcome::Whiff
        );
        assert_eq!(b.health(), 0);
        assert_eq!(b.pose(), Pose::Dead);
    }

    #[test]
    fn test_health_never_negative() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        b.set_health(5);
        a.try_attack(AttackKind::Heavy, &mut b, &mut cues);
        assert_eq!(b.health(), 0);
        assert!(!b.is_dead(), "death registers on the victim's own update");

        b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
        assert!(b.is_dead());
        assert_eq!(b.pose(), Pose::Dead);
    }

    #[test]
    fn test_update_moves_and_faces() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        let intent = Intent {
            movement: Some(Facing::Left),
            ..Intent::IDLE
        };
        a.update(&intent, &mut b, &floor(), &mut cues);
        assert_eq!(a.facing(), Facing::Left);
        assert_relative_eq!(a.rect().x, 95.0);
        assert!(a.on_ground());
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        let jump = Intent {
            jump: true,
            ..Intent::IDLE
        };

        a.update(&jump, &mut b, &floor(), &mut cues);
        assert_eq!(a.pose(), Pose::Jump);
        assert_eq!(a.anim_timer(), 15);
        assert!(!a.on_ground());
        assert_relative_eq!(a.velocity_y(), -14.2, epsilon = 1e-4);
        assert!(cues.contains(SoundCue::Play(Sound::Jump)));

        cues.clear();
        a.update(&jump, &mut b, &floor(), &mut cues);
        assert!(cues.as_slice().is_empty(), "no double jump in mid-air");
        assert_relative_eq!(a.velocity_y(), -13.4, epsilon = 1e-4);
    }

    #[test]
    fn test_overlay_pose_decays_to_idle() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.set_facing(Facing::Left);
        a.try_attack(AttackKind::Light, &mut b, &mut cues);
        assert_eq!(a.pose(), Pose::Punch);

        for _ in 0..7 {
            a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
            assert_eq!(a.pose(), Pose::Punch);
        }
        a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        assert_eq!(a.pose(), Pose::Idle);
    }

    #[test]
    fn test_hurt_pose_lasts_hurt_timer() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.try_attack(AttackKind::Light, &mut b, &mut cues);

        for _ in 0..17 {
            b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
            assert_eq!(b.pose(), Pose::Hurt);
        }
        b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
        assert_eq!(b.pose(), Pose::Idle);
    }

    #[test]
    fn test_heal_lands_only_after_full_meal() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.set_health(150);

        assert!(a.eat(&mut cues));
        assert_eq!(a.state().pending_heal(), Some(25));
        assert_eq!(
            cues.as_slice(),
            &[
                SoundCue::Stop(Sound::PickupAmbient),
                SoundCue::Play(Sound::Eat)
            ]
        );

        for _ in 0..EAT_FRAMES - 1 {
            a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
            assert_eq!(a.health(), 150);
            assert!(a.pose().is_eating());
        }
        a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        assert_eq!(a.health(), 175);
        assert!(!a.is_eating());
        assert_eq!(a.pose(), Pose::Idle);
    }

    #[test]
    fn test_eating_animation_switches_halfway() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.eat(&mut cues);

        for _ in 0..29 {
            a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        }
        assert_eq!(a.pose(), Pose::Eating1);
        a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        assert_eq!(a.pose(), Pose::Eating2);
    }

    #[test]
    fn test_eating_blocks_input() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.eat(&mut cues);
        let x = a.rect().x;

        let intent = Intent {
            movement: Some(Facing::Right),
            jump: true,
            attack: Some(AttackKind::Heavy),
        };
        a.update(&intent, &mut b, &floor(), &mut cues);
        assert_eq!(a.rect().x, x);
        assert_eq!(b.health(), 200);
    }

    #[test]
    fn test_eat_rejected_when_eating_or_dead() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        assert!(a.eat(&mut cues));
        assert!(!a.eat(&mut cues));

        b.set_health(0);
        b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
        cues.clear();
        assert!(!b.eat(&mut cues));
        assert!(cues.as_slice().is_empty());
    }

    #[test]
    fn test_eat_rejected_at_zero_health_before_death_check() {
        let (_, mut b) = face_off();
        let mut cues = SoundCues::new();
        b.set_health(0);
        assert!(!b.is_dead());
        assert!(!b.eat(&mut cues));
        assert!(!b.is_eating());
        assert!(cues.as_slice().is_empty());
    }

    #[test]
    fn test_full_health_meal_heals_nothing() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.eat(&mut cues);
        for _ in 0..EAT_FRAMES {
            a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        }
        assert_eq!(a.health(), a.max_health());
    }

    #[test]
    fn test_winner_ignores_input_and_keeps_pose() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        assert!(a.declare_winner());
        assert!(!a.declare_winner());
        assert_eq!(a.pose(), Pose::Win);
        assert_eq!(a.anim_timer(), 30);

        let intent = Intent {
            movement: Some(Facing::Left),
            ..Intent::IDLE
        };
        for _ in 0..40 {
            a.update(&intent, &mut b, &floor(), &mut cues);
        }
        assert_relative_eq!(a.rect().x, 100.0);
        assert_eq!(a.pose(), Pose::Win);
    }

    #[test]
    fn test_winner_can_still_eat() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        a.set_health(100);
        a.declare_winner();
        assert!(a.eat(&mut cues));
        for _ in 0..EAT_FRAMES {
            a.update(&Intent::IDLE, &mut b, &floor(), &mut cues);
        }
        assert_eq!(a.health(), 150);
        assert!(a.is_winner());
        assert_eq!(a.pose(), Pose::Win);
    }

    #[test]
    fn test_dead_fighter_is_frozen() {
        let (mut a, mut b) = face_off();
        let mut cues = SoundCues::new();
        b.set_health(0);
        b.update(&Intent::IDLE, &mut a, &floor(), &mut cues);
        let rect = *b.rect();

        b.body_mut().on_ground = false;
        b.update(
            &Intent {
                movement: Some(Facing::Right),
                jump: true,
                attack: Some(AttackKind::Light),
            },
            &mut a,
            &floor(),
            &mut cues,
        );
        assert_eq!(*b.rect(), rect);
        assert_eq!(a.health(), 200);
        assert!(!b.declare_winner());
    }
}
