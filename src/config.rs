//! Tunable constants for the fireworks effect.
//!
//! Every number the effect depends on lives in [`FireworksConfig`]. The
//! defaults reproduce the classic look: 100 sparks per burst, gravity at half
//! strength, and a 2% chance of an ambient burst every frame.
//!
//! ```ignore
//! let config = FireworksConfig::default()
//!     .with_ambient_probability(0.05)
//!     .with_seed(7);
//! ```

use std::ops::Range;

/// Configuration for the simulation, spawner and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FireworksConfig {
    /// Particles created by every explosion.
    pub particles_per_explosion: usize,
    /// Initial particle speed range (units per second).
    pub speed: Range<f32>,
    /// Particle lifetime range (seconds).
    pub lifetime: Range<f32>,
    /// Gravitational acceleration before scaling.
    pub gravity: f32,
    /// Multiplier applied to `gravity` each frame.
    pub gravity_scale: f32,
    /// Chance per frame of an ambient explosion.
    pub ambient_probability: f32,
    /// Side length of the ambient spawn volume.
    pub spawn_extent: f32,
    /// Vertical offset of the spawn volume, as a fraction of `spawn_extent`.
    ///
    /// The volume spans `-bias..1-bias` of the extent, so `0.2` leans upward.
    pub spawn_vertical_bias: f32,
    /// Sphere radius of a single particle.
    pub particle_radius: f32,
    /// Sphere tessellation (longitude, latitude).
    pub sphere_segments: (u32, u32),
    /// Vertical field of view in degrees.
    pub camera_fov_degrees: f32,
    /// Near clip plane.
    pub camera_near: f32,
    /// Far clip plane.
    pub camera_far: f32,
    /// Starting distance from the camera to the origin along +Z.
    pub camera_distance: f32,
    /// Requested MSAA sample count. Falls back to 1 if unsupported.
    pub msaa_samples: u32,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            particles_per_explosion: 100,
            speed: 5.0..15.0,
            lifetime: 1.0..3.0,
            gravity: 9.8,
            gravity_scale: 0.5,
            ambient_probability: 0.02,
            spawn_extent: 40.0,
            spawn_vertical_bias: 0.2,
            particle_radius: 0.3,
            sphere_segments: (8, 8),
            camera_fov_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_distance: 50.0,
            msaa_samples: 4,
            seed: None,
        }
    }
}

impl FireworksConfig {
    /// Downward acceleration actually applied to particle velocity.
    #[inline]
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.gravity_scale
    }

    /// Set the number of particles per explosion.
    pub fn with_particles_per_explosion(mut self, count: usize) -> Self {
        self.particles_per_explosion = count;
        self
    }

    /// Set the initial speed range.
    pub fn with_speed(mut self, speed: Range<f32>) -> Self {
        self.speed = speed;
        self
    }

    /// Set the particle lifetime range in seconds.
    pub fn with_lifetime(mut self, lifetime: Range<f32>) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Set gravity and the per-frame scale applied to it.
    pub fn with_gravity(mut self, gravity: f32, scale: f32) -> Self {
        self.gravity = gravity;
        self.gravity_scale = scale;
        self
    }

    /// Set the per-frame chance of an ambient explosion (clamped to 0..=1).
    pub fn with_ambient_probability(mut self, probability: f32) -> Self {
        self.ambient_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Set the ambient spawn volume.
    pub fn with_spawn_volume(mut self, extent: f32, vertical_bias: f32) -> Self {
        self.spawn_extent = extent;
        self.spawn_vertical_bias = vertical_bias;
        self
    }

    /// Set the particle sphere radius.
    pub fn with_particle_radius(mut self, radius: f32) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Set the MSAA sample count (1 disables multisampling).
    pub fn with_msaa_samples(mut self, samples: u32) -> Self {
        self.msaa_samples = samples.max(1);
        self
    }

    /// Seed the random number generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
