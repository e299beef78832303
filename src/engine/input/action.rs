// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Held actions a fighter reads from the keyboard every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    LightAttack,
    HeavyAttack,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::LightAttack,
        Action::HeavyAttack,
    ];
}

/// Edge-triggered commands that drive menus and the process itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Restart,
    SelectOnePlayer,
    SelectTwoPlayer,
}

/// Default bindings for Player 1 (WASD movement, R/T attacks)
pub fn default_p1_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::KeyR, Action::LightAttack),
        (KeyCode::KeyT, Action::HeavyAttack),
    ]
}

/// Default bindings for Player 2 (arrow keys, numpad attacks)
pub fn default_p2_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::Numpad1, Action::LightAttack),
        (KeyCode::Numpad2, Action::HeavyAttack),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(KeyCode, Command)> {
    vec![
        (KeyCode::Escape, Command::Quit),
        (KeyCode::F1, Command::Restart),
        (KeyCode::Digit1, Command::SelectOnePlayer),
        (KeyCode::Digit2, Command::SelectTwoPlayer),
    ]
}
