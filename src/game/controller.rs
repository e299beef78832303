// Match controller: modes, per-frame orchestration, pickups and win detection

use log::info;

use super::ai::{self, AiTuning};
use super::arena::Arena;
use super::fighter::{Fighter, FighterId, Intent, BASE_STATS};
use super::mouse::{Heading, Mouse, MouseStatus, MouseTuning};
use super::random::{RandomSource, SeededRandom};
use crate::core::math::Facing;
use crate::engine::audio::{AudioSink, Sound, SoundCues};
use crate::engine::input::{Command, ControlBinding, KeySnapshot};

/// Distance of each spawn point from its side of the arena
const P1_SPAWN_X: f32 = 150.0;
const P2_SPAWN_INSET: f32 = 180.0;

/// Chance that a new mouse enters from the left edge
const MOUSE_FROM_LEFT_CHANCE: f32 = 0.5;

/// What the match is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Waiting for a mode selection; nothing simulates
    #[default]
    Menu,
    /// Player 2 is driven by the AI
    OnePlayerVsAi,
    TwoPlayer,
}

/// Owns both fighters and the optional mouse and advances them in a fixed
/// order each step: fighter 1, fighter 2, mouse, then win arbitration.
pub struct MatchController<R: RandomSource = SeededRandom> {
    mode: GameMode,
    arena: Arena,
    fighters: [Fighter; 2],
    mouse: Option<Mouse>,
    rng: R,
    ai: AiTuning,
    mouse_tuning: MouseTuning,
    cues: SoundCues,
}

impl<R: RandomSource> MatchController<R> {
    pub fn new(rng: R) -> Self {
        Self::with_arena(Arena::standard(), rng)
    }

    pub fn with_arena(arena: Arena, rng: R) -> Self {
        let fighters = spawn_fighters(&arena);
        Self {
            mode: GameMode::Menu,
            arena,
            fighters,
            mouse: None,
            rng,
            ai: AiTuning::default(),
            mouse_tuning: MouseTuning::default(),
            cues: SoundCues::new(),
        }
    }

    /// Put both fighters back on their spawn points and drop any mouse
    pub fn reset(&mut self) {
        if self.mouse.take().is_some() {
            self.cues.stop(Sound::PickupAmbient);
        }
        self.fighters = spawn_fighters(&self.arena);
    }

    /// React to an edge-triggered command. `Quit` belongs to the app and is
    /// ignored here. Returns true if the match changed.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Restart => {
                self.reset();
                self.mode = GameMode::Menu;
                info!("Match restarted, back to menu");
                true
            }
            Command::SelectOnePlayer => self.start(GameMode::OnePlayerVsAi),
            Command::SelectTwoPlayer => self.start(GameMode::TwoPlayer),
            Command::Quit => false,
        }
    }

    fn start(&mut self, mode: GameMode) -> bool {
        if self.mode != GameMode::Menu {
            return false;
        }
        self.reset();
        self.mode = mode;
        info!("Starting {:?}", mode);
        true
    }

    /// Advance the match by one fixed step
    pub fn step(&mut self, keys: &dyn KeySnapshot) {
        if self.mode == GameMode::Menu {
            self.clamp_fighters();
            return;
        }

        // A meal freezes everything else
        if self.fighters.iter().any(Fighter::is_eating) {
            for fighter in self.fighters.iter_mut().filter(|f| f.is_eating()) {
                fighter.advance_meal();
            }
            self.clamp_fighters();
            return;
        }

        self.update_fighters(keys);
        self.update_mouse();
        self.check_winner();
        self.clamp_fighters();
    }

    fn update_fighters(&mut self, keys: &dyn KeySnapshot) {
        let arena = &self.arena;
        let [first, second] = &mut self.fighters;

        let intent = Intent::from_keys(first.controls(), keys);
        first.update(&intent, second, arena, &mut self.cues);

        let intent = match self.mode {
            GameMode::OnePlayerVsAi => ai::decide(second, first, &self.ai, &mut self.rng),
            _ => Intent::from_keys(second.controls(), keys),
        };
        second.update(&intent, first, arena, &mut self.cues);
    }

    fn update_mouse(&mut self) {
        match self.mouse.as_mut() {
            Some(mouse) => {
                if mouse.update() == MouseStatus::Expired {
                    self.mouse = None;
                    self.cues.stop(Sound::PickupAmbient);
                    info!("Mouse escaped");
                    return;
                }
            }
            None => {
                if !self.can_spawn_mouse() || !self.rng.chance(self.mouse_tuning.spawn_chance) {
                    return;
                }
                let heading = if self.rng.chance(MOUSE_FROM_LEFT_CHANCE) {
                    Heading::LeftToRight
                } else {
                    Heading::RightToLeft
                };
                self.mouse = Some(Mouse::spawn(heading, &self.arena, &self.mouse_tuning));
                self.cues.play(Sound::PickupAmbient);
                info!("A mouse appeared, running {:?}", heading);
            }
        }

        let Some(mouse_rect) = self.mouse.as_ref().map(|m| *m.rect()) else {
            return;
        };
        for fighter in self.fighters.iter_mut() {
            if fighter.is_eating() || !fighter.rect().intersects(&mouse_rect) {
                continue;
            }
            if fighter.eat(&mut self.cues) {
                self.mouse = None;
                info!("{} caught the mouse", fighter.id().label());
                break;
            }
        }
    }

    fn can_spawn_mouse(&self) -> bool {
        self.mouse.is_none()
            && self
                .fighters
                .iter()
                .all(|f| !f.is_eating() && !f.is_winner())
    }

    /// Declare a winner the moment its opponent is down. A fighter already at
    /// zero health is about to go down itself and cannot win.
    fn check_winner(&mut self) {
        for (loser, winner) in [(0, 1), (1, 0)] {
            if !self.fighters[loser].is_dead() {
                continue;
            }
            let fighter = &mut self.fighters[winner];
            if fighter.is_dead() || fighter.health() <= 0 || fighter.is_winner() {
                continue;
            }
            if !fighter.declare_winner() {
                continue;
            }
            info!("{} wins", fighter.id().label());

            if self.mouse.is_some() && !fighter.is_eating() && fighter.eat(&mut self.cues) {
                self.mouse = None;
            }
        }
    }

    fn clamp_fighters(&mut self) {
        let width = self.arena.width();
        for fighter in self.fighters.iter_mut() {
            fighter.clamp_to(0.0, width);
        }
    }

    /// Hand this step's sound cues to the audio backend
    pub fn flush_cues(&mut self, sink: &mut dyn AudioSink) {
        self.cues.flush_into(sink);
    }

    pub fn winner(&self) -> Option<FighterId> {
        self.fighters.iter().find(|f| f.is_winner()).map(Fighter::id)
    }

    /// One-line description of the match for the window title
    pub fn status_line(&self) -> String {
        if self.mode == GameMode::Menu {
            return "Press 1 for Single Player, 2 for Two Players".to_string();
        }
        match self.winner() {
            Some(id) => format!("{} wins! F1 = restart", id.label()),
            None => match self.mode {
                GameMode::OnePlayerVsAi => "Single Player".to_string(),
                _ => "Two Players".to_string(),
            },
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    pub fn mouse(&self) -> Option<&Mouse> {
        self.mouse.as_ref()
    }

    pub fn cues(&self) -> &SoundCues {
        &self.cues
    }

    #[cfg(test)]
    pub(crate) fn fighters_mut(&mut self) -> &mut [Fighter; 2] {
        &mut self.fighters
    }

    #[cfg(test)]
    pub(crate) fn place_mouse(&mut self, mouse: Mouse) {
        self.mouse = Some(mouse);
    }
}

impl Default for MatchController<SeededRandom> {
    fn default() -> Self {
        Self::new(SeededRandom::from_entropy())
    }
}

fn spawn_fighters(arena: &Arena) -> [Fighter; 2] {
    [
        Fighter::new(
            FighterId::PlayerOne,
            P1_SPAWN_X,
            arena.ground_y(),
            Facing::Right,
            ControlBinding::player_one(),
            BASE_STATS,
        ),
        Fighter::new(
            FighterId::PlayerTwo,
            arena.width() - P2_SPAWN_INSET,
            arena.ground_y(),
            Facing::Left,
            ControlBinding::player_two(),
            BASE_STATS,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::audio::SoundCue;
    use crate::engine::input::HeldKeys;
    use crate::game::fighter::state::EAT_FRAMES;
    use crate::game::fighter::Pose;
    use crate::game::mouse::DEFAULT_MOUSE;
    use crate::game::random::ScriptedRolls;
    use approx::assert_relative_eq;
    use winit::keyboard::KeyCode;

    /// Controller whose rolls never spawn a mouse or wake the AI
    fn quiet(mode: Command) -> MatchController<ScriptedRolls> {
        let mut controller = MatchController::new(ScriptedRolls::new(&[]));
        controller.handle_command(mode);
        controller
    }

    fn idle() -> HeldKeys {
        HeldKeys::new()
    }

    /// A right-to-left mouse placed with its left edge at `x`
    fn mouse_at(controller: &MatchController<ScriptedRolls>, x: f32) -> Mouse {
        let mut mouse = Mouse::spawn(Heading::RightToLeft, controller.arena(), &DEFAULT_MOUSE);
        let start = mouse.rect().x;
        while mouse.rect().x > x {
            mouse.update();
        }
        assert!(mouse.rect().x <= x && mouse.rect().x < start);
        mouse
    }

    #[test]
    fn test_starts_in_menu_with_spawned_fighters() {
        let controller = MatchController::new(ScriptedRolls::new(&[]));
        assert_eq!(controller.mode(), GameMode::Menu);
        let [p1, p2] = controller.fighters();
        assert_relative_eq!(p1.rect().x, 150.0);
        assert_relative_eq!(p2.rect().x, 720.0);
        assert_eq!(p1.facing(), Facing::Right);
        assert_eq!(p2.facing(), Facing::Left);
        assert_relative_eq!(p1.rect().bottom(), 440.0);
        assert_eq!(
            controller.status_line(),
            "Press 1 for Single Player, 2 for Two Players"
        );
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut controller = MatchController::new(ScriptedRolls::new(&[0.0, 0.0]));
        let keys = HeldKeys::with_keys(&[KeyCode::KeyD, KeyCode::ArrowLeft]);
        controller.step(&keys);
        assert_relative_eq!(controller.fighter(FighterId::PlayerOne).rect().x, 150.0);
        assert_relative_eq!(controller.fighter(FighterId::PlayerTwo).rect().x, 720.0);
        assert!(controller.mouse().is_none());
    }

    #[test]
    fn test_mode_select_only_from_menu() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        assert_eq!(controller.mode(), GameMode::TwoPlayer);
        assert!(!controller.handle_command(Command::SelectOnePlayer));
        assert_eq!(controller.mode(), GameMode::TwoPlayer);
        assert!(!controller.handle_command(Command::Quit));
    }

    #[test]
    fn test_two_player_keys_drive_both() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        let keys = HeldKeys::with_keys(&[KeyCode::KeyD, KeyCode::ArrowLeft]);
        controller.step(&keys);
        assert_relative_eq!(controller.fighter(FighterId::PlayerOne).rect().x, 155.0);
        assert_relative_eq!(controller.fighter(FighterId::PlayerTwo).rect().x, 715.0);
        assert!(controller.fighters().iter().all(Fighter::on_ground));
    }

    #[test]
    fn test_ai_ignores_player_two_keys() {
        let mut controller = quiet(Command::SelectOnePlayer);
        let keys = HeldKeys::with_keys(&[KeyCode::ArrowLeft]);
        controller.step(&keys);
        assert_relative_eq!(controller.fighter(FighterId::PlayerTwo).rect().x, 720.0);
    }

    #[test]
    fn test_ai_moves_when_active() {
        // Activation roll, then the spawn roll fails on the fallback
        let mut controller = MatchController::new(ScriptedRolls::new(&[0.1]));
        controller.handle_command(Command::SelectOnePlayer);
        controller.step(&idle());
        let p2 = controller.fighter(FighterId::PlayerTwo);
        assert_relative_eq!(p2.rect().x, 715.0);
        assert_eq!(p2.facing(), Facing::Left);
    }

    #[test]
    fn test_fighters_stay_on_screen() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        let keys = HeldKeys::with_keys(&[KeyCode::KeyA, KeyCode::ArrowRight]);
        for _ in 0..200 {
            controller.step(&keys);
        }
        assert_relative_eq!(controller.fighter(FighterId::PlayerOne).rect().x, 0.0);
        assert_relative_eq!(controller.fighter(FighterId::PlayerTwo).rect().right(), 900.0);
    }

    #[test]
    fn test_fatal_hit_blocks_mouse_on_same_step() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        controller.fighters_mut()[0].set_health(5);
        controller.fighters_mut()[1].body_mut().rect.x = 190.0;
        let mouse = mouse_at(&controller, 160.0);
        controller.place_mouse(mouse);

        // Player 2's light hit lands after player 1's death check ran
        controller.step(&HeldKeys::with_keys(&[KeyCode::Numpad1]));
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert_eq!(p1.health(), 0);
        assert!(!p1.is_dead());
        assert!(!p1.is_eating());
        assert!(controller.mouse().is_some());

        controller.step(&idle());
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert!(p1.is_dead());
        assert_eq!(p1.health(), 0);
        assert_eq!(controller.winner(), Some(FighterId::PlayerTwo));
        assert!(controller.fighter(FighterId::PlayerTwo).is_eating());
        assert!(controller.mouse().is_none());
    }

    #[test]
    fn test_mouse_spawns_and_plays_ambient() {
        let mut controller = MatchController::new(ScriptedRolls::new(&[0.001, 0.2]));
        controller.handle_command(Command::SelectTwoPlayer);
        controller.step(&idle());

        let mouse = controller.mouse().expect("mouse should spawn");
        assert_eq!(mouse.heading(), Heading::LeftToRight);
        assert!(controller
            .cues()
            .contains(SoundCue::Play(Sound::PickupAmbient)));
    }

    #[test]
    fn test_mouse_expiry_heals_nobody() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        for fighter in controller.fighters_mut().iter_mut() {
            fighter.set_health(100);
        }
        let mouse = mouse_at(&controller, -18.0);
        controller.place_mouse(mouse);

        controller.step(&idle());
        assert!(controller.mouse().is_none());
        assert!(controller
            .cues()
            .contains(SoundCue::Stop(Sound::PickupAmbient)));
        for fighter in controller.fighters() {
            assert!(!fighter.is_eating());
            assert_eq!(fighter.health(), 100);
        }
    }

    #[test]
    fn test_caught_mouse_heals_after_meal_and_freezes_match() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        controller.fighters_mut()[0].set_health(150);
        let mouse = mouse_at(&controller, 170.0);
        controller.place_mouse(mouse);

        controller.step(&idle());
        assert!(controller.mouse().is_none());
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert!(p1.is_eating());
        assert_eq!(p1.state().pending_heal(), Some(25));
        assert!(controller.cues().contains(SoundCue::Play(Sound::Eat)));

        let keys = HeldKeys::with_keys(&[KeyCode::ArrowLeft]);
        for _ in 0..EAT_FRAMES - 1 {
            controller.step(&keys);
            assert_eq!(controller.fighter(FighterId::PlayerOne).health(), 150);
        }
        assert_relative_eq!(controller.fighter(FighterId::PlayerTwo).rect().x, 720.0);

        controller.step(&keys);
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert_eq!(p1.health(), 175);
        assert!(!p1.is_eating());
    }

    #[test]
    fn test_no_mouse_spawns_after_a_win() {
        // First spawn roll misses, later ones would all hit
        let mut controller = MatchController::new(ScriptedRolls::new(&[0.99, 0.0, 0.0]));
        controller.handle_command(Command::SelectTwoPlayer);
        controller.fighters_mut()[1].set_health(0);
        controller.step(&idle());
        assert_eq!(controller.winner(), Some(FighterId::PlayerOne));

        controller.step(&idle());
        assert!(controller.mouse().is_none());
    }

    #[test]
    fn test_mouse_spawned_on_knockout_frame_feeds_winner() {
        let mut controller = MatchController::new(ScriptedRolls::new(&[0.0, 0.0]));
        controller.handle_command(Command::SelectTwoPlayer);
        controller.fighters_mut()[0].set_health(100);
        controller.fighters_mut()[1].set_health(0);
        controller.step(&idle());

        // The spawn roll runs before the win is declared, then the winner eats
        assert!(controller.mouse().is_none());
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert!(p1.is_winner());
        assert_eq!(p1.state().pending_heal(), Some(50));
    }

    #[test]
    fn test_win_is_declared_once() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        controller.fighters_mut()[1].set_health(0);

        controller.step(&idle());
        assert!(controller.fighter(FighterId::PlayerTwo).is_dead());
        assert_eq!(controller.winner(), Some(FighterId::PlayerOne));
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert_eq!(p1.pose(), Pose::Win);
        assert_eq!(p1.anim_timer(), 30);
        assert_eq!(controller.status_line(), "Player 1 wins! F1 = restart");

        controller.step(&idle());
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert_eq!(p1.anim_timer(), 29, "win timer is not refreshed");
        assert_eq!(p1.pose(), Pose::Win);
    }

    #[test]
    fn test_winner_is_fed_present_mouse() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        controller.fighters_mut()[0].set_health(120);
        controller.fighters_mut()[1].set_health(0);
        let mouse = mouse_at(&controller, 820.0);
        controller.place_mouse(mouse);

        controller.step(&idle());
        assert!(controller.mouse().is_none());
        let p1 = controller.fighter(FighterId::PlayerOne);
        assert!(p1.is_winner());
        assert!(p1.is_eating());
        assert_eq!(p1.state().pending_heal(), Some(40));
    }

    #[test]
    fn test_simultaneous_knockout_has_no_winner() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        {
            let [p1, p2] = controller.fighters_mut();
            p1.set_health(5);
            p2.set_health(5);
            p1.body_mut().rect.x = 100.0;
            p2.body_mut().rect.x = 140.0;
        }
        let keys = HeldKeys::with_keys(&[KeyCode::KeyR, KeyCode::Numpad1]);

        controller.step(&keys);
        assert!(controller.fighter(FighterId::PlayerTwo).is_dead());
        assert_eq!(controller.fighter(FighterId::PlayerOne).health(), 0);
        assert_eq!(controller.winner(), None);

        controller.step(&keys);
        assert!(controller.fighters().iter().all(Fighter::is_dead));
        assert_eq!(controller.winner(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut controller = quiet(Command::SelectTwoPlayer);
        let keys = HeldKeys::with_keys(&[KeyCode::KeyD, KeyCode::KeyW]);
        for _ in 0..5 {
            controller.step(&keys);
        }
        controller.fighters_mut()[1].set_health(60);
        controller.fighters_mut()[0].set_attack_cooldown(12);
        let mouse = mouse_at(&controller, 500.0);
        controller.place_mouse(mouse);

        assert!(controller.handle_command(Command::Restart));
        assert_eq!(controller.mode(), GameMode::Menu);
        assert!(controller.mouse().is_none());
        assert!(controller
            .cues()
            .contains(SoundCue::Stop(Sound::PickupAmbient)));

        let [p1, p2] = controller.fighters();
        assert_relative_eq!(p1.rect().x, 150.0);
        assert_relative_eq!(p1.rect().bottom(), 440.0);
        assert_eq!(p1.attack_cooldown(), 0);
        assert_eq!(p1.anim_timer(), 0);
        assert_eq!(p2.health(), 200);
        assert_eq!(p2.hurt_timer(), 0);
        assert_eq!(p1.pose(), Pose::Idle);
    }

    #[test]
    fn test_health_stays_in_bounds_over_long_fight() {
        let mut controller = MatchController::new(SeededRandom::seeded(3));
        controller.handle_command(Command::SelectOnePlayer);
        let keys = HeldKeys::with_keys(&[KeyCode::KeyD, KeyCode::KeyR, KeyCode::KeyT]);
        for _ in 0..3000 {
            controller.step(&keys);
            for fighter in controller.fighters() {
                assert!((0..=fighter.max_health()).contains(&fighter.health()));
            }
        }
    }
}
