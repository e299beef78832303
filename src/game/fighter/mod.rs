// Cat fighters: stats, combat, poses, state machine and the fighter entity

pub mod animation;
pub mod combat;
#[allow(clippy::module_inception)]
pub mod fighter;
pub mod intent;
pub mod state;
pub mod stats;

pub use animation::{Pose, SpriteSheetLayout};
pub use combat::AttackKind;
pub use fighter::{Fighter, FighterId};
pub use intent::Intent;
pub use stats::BASE_STATS;
