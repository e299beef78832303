// Input handling system
//
// ## Architecture
//
// - `action`: logical fighter actions, edge-triggered commands and default bindings
// - `config`: per-player control bindings and the global command table
// - `snapshot`: the held-key view the simulation polls once per step
// - `manager`: turns winit key events into held keys and queued commands

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

pub use action::{Action, Command};
pub use config::ControlBinding;
pub use manager::InputManager;
pub use snapshot::{HeldKeys, KeySnapshot};
