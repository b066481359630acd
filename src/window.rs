//! winit application driving the frame loop.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::config::FireworksConfig;
use crate::error::RunError;
use crate::gpu::GpuState;
use crate::input::{Input, PointerAction};
use crate::simulation::Fireworks;
use crate::time::Time;

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    fireworks: Fireworks,
    camera: Camera,
    input: Input,
    time: Time,
    title: String,
    window_size: (u32, u32),
    error: Option<RunError>,
}

impl App {
    pub(crate) fn new(config: FireworksConfig, title: String, window_size: (u32, u32)) -> Self {
        let camera = Camera::new(&config);
        Self {
            window: None,
            gpu_state: None,
            fireworks: Fireworks::new(config),
            camera,
            input: Input::new(),
            time: Time::new(),
            title,
            window_size,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<RunError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let (width, height) = self.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.camera.set_viewport(size.width, size.height);
        self.input.set_window_size(size.width, size.height);

        let gpu_state = pollster::block_on(GpuState::new(window.clone(), self.fireworks.config()))?;
        self.gpu_state = Some(gpu_state);

        // Measure the first frame from when drawing can actually start.
        self.time.reset();
        window.request_redraw();
        Ok(())
    }

    fn handle_pointer(&mut self, action: PointerAction) {
        match action {
            PointerAction::Click { ndc } => {
                self.fireworks.spawn_at_pointer(&self.camera, ndc);
            }
            PointerAction::Drag { delta } => self.camera.orbit(delta.x, delta.y),
            PointerAction::Zoom(scroll) => self.camera.zoom(scroll),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta_time = self.time.update();
        self.fireworks.step(delta_time);

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(self.fireworks.scene(), &self.camera) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu_state.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.time.fps_refreshed() {
                window.set_title(&format!(
                    "{} | {:.0} fps | {} explosions | {} particles",
                    self.title,
                    self.time.fps(),
                    self.fireworks.explosion_count(),
                    self.fireworks.particle_count()
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(action) = self.input.handle_event(&event) {
            self.handle_pointer(action);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.camera
                    .set_viewport(physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
