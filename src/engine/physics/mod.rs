// Lightweight platformer physics: gravity integration and one-way platform landing
//
// The arena only has a handful of static platforms, so bodies are resolved with a
// single linear scan instead of a broad phase.

pub mod body;
mod collision;

pub use body::KinematicBody;
pub use collision::resolve_landing;
