// Engine modules: frame clock, input, audio, assets, physics and renderer

pub mod assets;
pub mod audio;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
