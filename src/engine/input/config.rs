// Per-player control bindings and remapping

use super::action::{Action, Command};
use super::snapshot::KeySnapshot;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to the logical actions of one human-controlled fighter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlBinding {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl ControlBinding {
    /// Create an empty binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding from a list of key/action pairs
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut binding = Self::new();
        for (key, action) in bindings {
            binding.bind(key, action);
        }
        binding
    }

    /// Player 1 defaults
    pub fn player_one() -> Self {
        Self::from_bindings(super::action::default_p1_bindings())
    }

    /// Player 2 defaults
    pub fn player_two() -> Self {
        Self::from_bindings(super::action::default_p2_bindings())
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove a key's binding
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if any key bound to `action` is held in the snapshot
    pub fn is_held(&self, action: Action, keys: &dyn KeySnapshot) -> bool {
        self.keys_for(action).iter().any(|key| keys.is_held(*key))
    }
}

/// Global key-to-command table used while polling key-press events
#[derive(Debug, Clone)]
pub struct CommandBindings {
    bindings: HashMap<KeyCode, Command>,
}

impl CommandBindings {
    pub fn from_bindings(bindings: Vec<(KeyCode, Command)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn command_for(&self, key: KeyCode) -> Option<Command> {
        self.bindings.get(&key).copied()
    }
}

impl Default for CommandBindings {
    fn default() -> Self {
        Self::from_bindings(super::action::global_bindings())
    }
}
