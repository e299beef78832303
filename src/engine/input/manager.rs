// Input manager - turns window key events into held keys and edge commands

use super::action::Command;
use super::config::CommandBindings;
use super::snapshot::HeldKeys;
use std::collections::VecDeque;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Upper bound on queued commands between two drains
const MAX_PENDING_COMMANDS: usize = 16;

/// Collects keyboard state between frames
///
/// Held keys are level-triggered and polled by the simulation; commands are
/// edge-triggered, queued on the initial press only and drained by the app.
#[derive(Debug, Default)]
pub struct InputManager {
    held: HeldKeys,
    commands: CommandBindings,
    pending: VecDeque<Command>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Record a key transition. Auto-repeat presses never emit a command.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                let newly_held = self.held.press(key);
                if newly_held && !repeat {
                    if let Some(command) = self.commands.command_for(key) {
                        log::debug!("Command {:?} from {:?}", command, key);
                        self.pending.push_back(command);
                        if self.pending.len() > MAX_PENDING_COMMANDS {
                            self.pending.pop_front();
                        }
                    }
                }
            }
            ElementState::Released => {
                self.held.release(key);
            }
        }
    }

    /// Take every command queued since the last drain, oldest first
    pub fn drain_commands(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }

    /// Current held-key snapshot
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    /// Forget all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
