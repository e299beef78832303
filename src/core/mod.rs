// Core utilities shared by the engine and the game: math helpers and geometry

pub mod math;
pub mod rect;

pub use rect::Rect;
