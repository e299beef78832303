// What a fighter wants to do this frame, from the keyboard or the AI

use super::combat::AttackKind;
use crate::core::math::Facing;
use crate::engine::input::{Action, ControlBinding, KeySnapshot};

/// Per-frame request applied by `Fighter::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    /// Walk one step in this direction (and face it)
    pub movement: Option<Facing>,
    /// Jump if standing on something
    pub jump: bool,
    /// Attack if off cooldown
    pub attack: Option<AttackKind>,
}

impl Intent {
    /// Do nothing this frame
    pub const IDLE: Intent = Intent {
        movement: None,
        jump: false,
        attack: None,
    };

    /// Read a human fighter's held keys.
    ///
    /// Right wins over left when both are held, and a held light attack
    /// shadows a held heavy attack.
    pub fn from_keys(binding: &ControlBinding, keys: &dyn KeySnapshot) -> Self {
        let movement = if binding.is_held(Action::MoveRight, keys) {
            Some(Facing::Right)
        } else if binding.is_held(Action::MoveLeft, keys) {
            Some(Facing::Left)
        } else {
            None
        };

        let attack = if binding.is_held(Action::LightAttack, keys) {
            Some(AttackKind::Light)
        } else if binding.is_held(Action::HeavyAttack, keys) {
            Some(AttackKind::Heavy)
        } else {
            None
        };

        Self {
            movement,
            jump: binding.is_held(Action::Jump, keys),
            attack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::HeldKeys;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_no_keys_is_idle() {
        let binding = ControlBinding::player_one();
        let intent = Intent::from_keys(&binding, &HeldKeys::new());
        assert_eq!(intent, Intent::IDLE);
    }

    #[test]
    fn test_right_takes_precedence() {
        let binding = ControlBinding::player_one();
        let keys = HeldKeys::with_keys(&[KeyCode::KeyA, KeyCode::KeyD]);
        assert_eq!(
            Intent::from_keys(&binding, &keys).movement,
            Some(Facing::Right)
        );
    }

    #[test]
    fn test_light_shadows_heavy() {
        let binding = ControlBinding::player_two();
        let keys = HeldKeys::with_keys(&[KeyCode::Numpad1, KeyCode::Numpad2]);
        assert_eq!(
            Intent::from_keys(&binding, &keys).attack,
            Some(AttackKind::Light)
        );

        let keys = HeldKeys::with_keys(&[KeyCode::Numpad2]);
        assert_eq!(
            Intent::from_keys(&binding, &keys).attack,
            Some(AttackKind::Heavy)
        );
    }

    #[test]
    fn test_jump_and_move_together() {
        let binding = ControlBinding::player_one();
        let keys = HeldKeys::with_keys(&[KeyCode::KeyW, KeyCode::KeyA]);
        let intent = Intent::from_keys(&binding, &keys);
        assert!(intent.jump);
        assert_eq!(intent.movement, Some(Facing::Left));
    }
}
