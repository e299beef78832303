// Game logic: arena, fighters, the AI opponent, the mouse pickup,
// match orchestration and presentation

pub mod ai;
pub mod arena;
pub mod controller;
pub mod fighter;
pub mod mouse;
pub mod random;
pub mod render;

pub use arena::{ARENA_HEIGHT, ARENA_WIDTH};
pub use controller::MatchController;
pub use random::SeededRandom;
