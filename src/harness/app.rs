//! winit event loop driving a `Session`

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::{Game, Outcome, Session};
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key};
use crate::renderer::RenderState;
use crate::settings::Settings;

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Window plus the renderer bound to it
struct Gpu {
    window: Arc<Window>,
    render: RenderState,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, title: &str, size: (u32, u32), settings: &Settings) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(size.0, size.1))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let physical = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            (physical.width, physical.height),
            size,
            settings,
        ))?;

        log::info!("Window created: {}x{}", size.0, size.1);
        Ok(Self { window, render })
    }
}

struct App<'a, G: Game> {
    session: Session<G>,
    settings: &'a Settings,
    gpu: Option<Gpu>,
    last_frame: Option<Instant>,
    error: Option<Error>,
}

impl<G: Game> App<'_, G> {
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        if self.session.advance(dt).is_some() {
            event_loop.exit();
            return;
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let frame = self.session.draw();
        match gpu.render.render(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.render.resize(gpu.render.size.0, gpu.render.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl<G: Game> ApplicationHandler for App<'_, G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        let game = self.session.game();
        match Gpu::new(event_loop, game.title(), game.size(), self.settings) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.session.handle(InputEvent::Quit),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        self.session.handle(match event.state {
                            ElementState::Pressed => InputEvent::KeyDown(key),
                            ElementState::Released => InputEvent::KeyUp(key),
                        });
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }

        if self.session.outcome().is_some() {
            event_loop.exit();
        }
    }
}

pub(super) fn run<G: Game>(session: Session<G>, settings: &Settings) -> Result<Outcome> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        session,
        settings,
        gpu: None,
        last_frame: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error {
        return Err(e);
    }
    Ok(app.session.outcome().unwrap_or(Outcome::Quit))
}
