//! Simulation state and the windowed runner.
//!
//! [`Fireworks`] is the per-frame loop without any windowing: it owns the
//! active explosions, the scene they draw into, and the spawner. A frame is
//! always ambient spawn check, then explosion updates, then (in the runner)
//! a render.
//!
//! [`Simulation`] wraps it in a winit window with a wgpu renderer.

use crate::camera::Camera;
use crate::config::FireworksConfig;
use crate::error::RunError;
use crate::explosion::Explosion;
use crate::scene::Scene;
use crate::spawn::Spawner;
use crate::window::App;
use glam::{Vec2, Vec3};
use winit::event_loop::{ControlFlow, EventLoop};

/// Fireworks simulation state.
///
/// # Example
///
/// ```ignore
/// let mut fireworks = Fireworks::new(FireworksConfig::default().with_seed(1));
/// fireworks.spawn_at(Vec3::ZERO);
/// fireworks.step(1.0 / 60.0);
/// assert_eq!(fireworks.explosion_count(), 1);
/// ```
pub struct Fireworks {
    config: FireworksConfig,
    spawner: Spawner,
    scene: Scene,
    explosions: Vec<Explosion>,
}

impl Fireworks {
    pub fn new(config: FireworksConfig) -> Self {
        let spawner = Spawner::new(&config);
        Self {
            config,
            spawner,
            scene: Scene::new(),
            explosions: Vec::new(),
        }
    }

    /// Run one frame of simulation: ambient spawn check, then update every
    /// explosion and drop the ones that have burnt out.
    pub fn step(&mut self, delta_time: f32) {
        self.spawn_ambient();

        let scene = &mut self.scene;
        let before = self.explosions.len();
        self.explosions.retain_mut(|explosion| explosion.update(delta_time, scene));

        let retired = before - self.explosions.len();
        if retired > 0 {
            log::debug!("retired {} explosion(s), {} active", retired, self.explosions.len());
        }
        log::trace!(
            "dt={:.4}s explosions={} particles={}",
            delta_time,
            self.explosions.len(),
            self.scene.len()
        );
    }

    /// Ambient trigger. Returns the origin if an explosion was spawned.
    pub fn spawn_ambient(&mut self) -> Option<Vec3> {
        let origin = self.spawner.ambient()?;
        log::debug!("ambient explosion at {:?}", origin);
        self.spawn_at(origin);
        Some(origin)
    }

    /// Pointer trigger for a click at `ndc` (normalized device coordinates).
    ///
    /// Returns the world-space origin, or `None` if the click could not be
    /// mapped onto the z=0 plane.
    pub fn spawn_at_pointer(&mut self, camera: &Camera, ndc: Vec2) -> Option<Vec3> {
        let origin = self.spawner.pointer_origin(camera, ndc)?;
        log::debug!("pointer explosion at {:?}", origin);
        self.spawn_at(origin);
        Some(origin)
    }

    /// Spawn an explosion at a world-space point.
    pub fn spawn_at(&mut self, origin: Vec3) {
        let explosion = Explosion::new(origin, &self.config, self.spawner.rng(), &mut self.scene);
        self.explosions.push(explosion);
    }

    /// Remove every explosion and its spheres.
    pub fn clear(&mut self) {
        for explosion in &mut self.explosions {
            explosion.clear(&mut self.scene);
        }
        self.explosions.clear();
    }

    #[inline]
    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Mutable access to active explosions, mainly for tests.
    #[inline]
    pub fn explosions_mut(&mut self) -> &mut [Explosion] {
        &mut self.explosions
    }

    #[inline]
    pub fn explosion_count(&self) -> usize {
        self.explosions.len()
    }

    /// Live particles across all explosions.
    pub fn particle_count(&self) -> usize {
        self.explosions.iter().map(Explosion::len).sum()
    }
}

/// Windowed fireworks runner.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Simulation::new()
///     .with_config(FireworksConfig::default().with_ambient_probability(0.05))
///     .with_title("Fireworks")
///     .run()?;
/// ```
pub struct Simulation {
    config: FireworksConfig,
    title: String,
    window_size: (u32, u32),
}

impl Simulation {
    /// Create a runner with default settings.
    pub fn new() -> Self {
        Self {
            config: FireworksConfig::default(),
            title: "Fireworks".to_string(),
            window_size: (1280, 720),
        }
    }

    /// Replace the simulation config.
    pub fn with_config(mut self, config: FireworksConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base window title. FPS and counts are appended at runtime.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config, self.title, self.window_size);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
