// Held-key snapshots queried once per simulation step

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Read-only view of which keys are currently held down
pub trait KeySnapshot {
    fn is_held(&self, key: KeyCode) -> bool;
}

/// Set of currently held keys, maintained from press/release events
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<KeyCode>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot with the given keys held (handy for scripted frames)
    pub fn with_keys(keys: &[KeyCode]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
        }
    }

    /// Mark a key as held. Returns true if it was not held before.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.held.insert(key)
    }

    /// Mark a key as released. Returns true if it was held before.
    pub fn release(&mut self, key: KeyCode) -> bool {
        self.held.remove(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl KeySnapshot for HeldKeys {
    fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}
