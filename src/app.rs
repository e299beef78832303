// Window, event loop and per-frame wiring

use std::sync::Arc;

use anyhow::Result;
use glam::Vec2;
use log::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::engine::assets::{AssetLoader, AssetType};
use crate::engine::audio::{LoggingAudio, Sound};
use crate::engine::game_loop::FrameClock;
use crate::engine::input::{Command, InputManager};
use crate::engine::renderer::{Color, Renderer};
use crate::game::render::{draw_frame, TEXTURES};
use crate::game::{MatchController, SeededRandom, ARENA_HEIGHT, ARENA_WIDTH};

const TITLE: &str = "Cat Fighter";

/// Environment variable fixing the random seed for reproducible matches
const SEED_ENV: &str = "CAT_FIGHTER_SEED";

/// Everything that lives for the lifetime of the window
struct App {
    window: Arc<Window>,
    renderer: Renderer,
    clock: FrameClock,
    input: InputManager,
    game: MatchController,
    audio: LoggingAudio,
    title: String,
}

impl App {
    fn new(window: Arc<Window>, mut renderer: Renderer) -> Self {
        let loader = AssetLoader::from_env();
        info!("Loading assets from {}", loader.base_path().display());

        for name in TEXTURES {
            match loader.load_image(name) {
                Ok(image) => renderer.load_texture(name, &image),
                Err(err) => warn!("{}; drawing placeholder instead", err),
            }
        }
        let loaded = TEXTURES
            .iter()
            .filter(|name| renderer.has_texture(name))
            .count();
        info!("{}/{} textures loaded", loaded, TEXTURES.len());

        let sounds: Vec<Sound> = Sound::ALL
            .into_iter()
            .filter(|sound| loader.exists(AssetType::Sound, sound.file_name()))
            .collect();
        info!("{}/{} sounds available", sounds.len(), Sound::ALL.len());

        Self {
            window,
            renderer,
            clock: FrameClock::new(),
            input: InputManager::new(),
            game: MatchController::new(random_source()),
            audio: LoggingAudio::new(sounds),
            title: String::new(),
        }
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!("Close requested, shutting down...");
                        elwt.exit();
                    }
                    WindowEvent::Resized(physical_size) => {
                        self.renderer.resize(physical_size);
                    }
                    WindowEvent::Focused(false) => {
                        // Keys released while unfocused never reach us
                        self.input.release_all();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        self.input.process_keyboard_event(&event);
                    }
                    WindowEvent::RedrawRequested => self.frame(elwt),
                    _ => {}
                }
            }
            Event::AboutToWait => {
                self.window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Ran {} steps over {} frames, {} sound cues",
                    self.clock.step_count(),
                    self.clock.frame_count(),
                    self.audio.played()
                );
            }
            _ => {}
        }
    }

    /// Apply commands, simulate the steps owed since the last frame, then draw
    fn frame(&mut self, elwt: &EventLoopWindowTarget<()>) {
        for command in self.input.drain_commands() {
            if command == Command::Quit {
                info!("Quit requested, shutting down...");
                elwt.exit();
                return;
            }
            self.game.handle_command(command);
        }

        for _ in 0..self.clock.begin_frame() {
            self.game.step(self.input.held());
        }
        self.game.flush_cues(&mut self.audio);

        self.update_title();

        draw_frame(&self.game, &mut self.renderer);
        match self.renderer.render(Color::BLACK) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, shutting down");
                elwt.exit();
            }
            Err(err) => warn!("Dropped frame: {:?}", err),
        }
    }

    fn update_title(&mut self) {
        let title = format!("{} - {}", TITLE, self.game.status_line());
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }
}

fn random_source() -> SeededRandom {
    let Ok(value) = std::env::var(SEED_ENV) else {
        return SeededRandom::from_entropy();
    };
    match value.trim().parse::<u64>() {
        Ok(seed) => {
            info!("Using random seed {}", seed);
            SeededRandom::seeded(seed)
        }
        Err(err) => {
            warn!("Ignoring {}={:?}: {}", SEED_ENV, value, err);
            SeededRandom::from_entropy()
        }
    }
}

/// Open the window and run until it is closed
pub fn run() -> Result<()> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(ARENA_WIDTH, ARENA_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );
    info!("Window created successfully");

    let renderer = pollster::block_on(Renderer::new(
        window.clone(),
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
    ))?;

    let mut app = App::new(window, renderer);
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| app.handle_event(event, elwt))
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}
