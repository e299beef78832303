use anyhow::Result;
use log::info;

mod app;
mod core;
mod engine;
mod game;

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Cat Fighter...");

    app::run()
}
