//! The game window.
//!
//! [`run`] opens a winit window, sets up the [`Renderer`] and drives one game
//! frame per redraw: clock, input, update, draw, present.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::canvas::DrawList;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, GameEvent};
use crate::gpu::Renderer;
use crate::input::{Input, Key};
use crate::time::FrameClock;

/// Frames between `frame stats` debug lines.
const STATS_EVERY: u64 = 600;

/// Open the window and play until it is closed.
pub fn run(config: GameConfig) -> Result<(), GameError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    info!(stats = ?app.game.stats(), "window closed");
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: Game,
    input: Input,
    clock: FrameClock,
    draw_list: DrawList,
    /// Set when setup failed inside the event loop; returned from [`run`].
    error: Option<GameError>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            window: None,
            renderer: None,
            game: Game::new(config),
            input: Input::new(),
            clock: FrameClock::new(),
            draw_list: DrawList::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GameError> {
        let (width, height) = self.game.config().pixel_size();
        let window_attrs = Window::default_attributes()
            .with_title("Skyblast")
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.game.config().field_size,
        ))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        // Setup time is not game time.
        self.clock.restart();
        info!(width, height, "window ready");
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.pressed(Key::Pause) {
            self.clock.toggle_pause();
            info!(paused = self.clock.is_paused(), "pause toggled");
        }

        let dt = self.clock.restart();
        if !self.clock.is_paused() {
            for event in self.game.update(dt, self.input.controls()) {
                if let GameEvent::PlayerHit { at } = event {
                    debug!(x = at.x, y = at.y, "player crashed");
                }
            }
        }
        self.input.end_frame();

        if self.clock.is_periodic_frame(STATS_EVERY) {
            debug!(fps = self.clock.fps(), explosions = self.game.explosions().len(), "frame stats");
        }

        self.draw_list.clear();
        self.game.draw(&mut self.draw_list);

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render(&self.draw_list, self.game.config().background) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { .. } if self.input.pressed(Key::Quit) => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
