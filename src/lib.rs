//! # Fireworks
//!
//! Particle fireworks in a 3D scene, rendered with wgpu.
//!
//! Bursts of coloured spheres appear at random every so often, or wherever
//! you click. Each spark flies out from the burst origin, falls under gravity
//! and fades out over a random one to three second lifetime.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fireworks::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Simulation::new()
//!         .with_config(FireworksConfig::default().with_ambient_probability(0.05))
//!         .run()
//! }
//! ```
//!
//! ## Headless use
//!
//! The simulation does not need a window. [`Fireworks`] exposes the same
//! frame loop the viewer runs:
//!
//! ```ignore
//! let mut fireworks = Fireworks::new(FireworksConfig::default().with_seed(1));
//! fireworks.spawn_at(Vec3::new(0.0, 10.0, 0.0));
//! for _ in 0..60 {
//!     fireworks.step(1.0 / 60.0);
//! }
//! println!("{} sparks left", fireworks.particle_count());
//! ```
//!
//! ## Frame order
//!
//! Every frame runs in the same order:
//!
//! 1. Roll the ambient spawn chance (2% by default)
//! 2. Update every explosion; drop the ones with no particles left
//! 3. Render the scene
//!
//! ## Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Left click | Explosion under the cursor (on the z=0 plane) |
//! | Left drag | Orbit the camera |
//! | Wheel | Zoom |
//! | Escape | Quit |

pub mod camera;
pub mod config;
pub mod error;
pub mod explosion;
mod gpu;
pub mod input;
pub mod particle;
pub mod scene;
mod shader;
mod simulation;
pub mod spawn;
pub mod time;
mod window;

pub use camera::Camera;
pub use config::FireworksConfig;
pub use error::{GpuError, RunError};
pub use explosion::Explosion;
pub use glam::{Vec2, Vec3};
pub use particle::{Particle, Visual};
pub use scene::{MeshHandle, Scene, Sphere};
pub use simulation::{Fireworks, Simulation};
pub use spawn::Spawner;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use fireworks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::config::FireworksConfig;
    pub use crate::error::RunError;
    pub use crate::explosion::Explosion;
    pub use crate::simulation::{Fireworks, Simulation};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3};
}
