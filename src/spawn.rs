//! Explosion spawning.
//!
//! The [`Spawner`] decides when and where new explosions appear:
//!
//! - **Ambient**: once per frame, with a fixed probability, at a random point
//!   inside a box around the origin.
//! - **Pointer**: on click, the cursor is unprojected through the camera and
//!   the resulting ray is intersected with the world z=0 plane.
//!
//! It also owns the RNG used for every per-particle random draw, so a seeded
//! spawner gives a fully reproducible run.

use crate::camera::Camera;
use crate::config::FireworksConfig;
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Rays whose z component is smaller than this never meet the z=0 plane
/// inside any sensible view distance. Unprojection error is around 1e-5.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Produces explosion origins.
pub struct Spawner {
    rng: SmallRng,
    probability: f32,
    extent: f32,
    vertical_bias: f32,
}

impl Spawner {
    /// Create a spawner from config, seeding from `config.seed` when set.
    pub fn new(config: &FireworksConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            rng,
            probability: config.ambient_probability,
            extent: config.spawn_extent,
            vertical_bias: config.spawn_vertical_bias,
        }
    }

    /// Random source shared with explosion construction.
    #[inline]
    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Roll the per-frame ambient chance.
    #[inline]
    pub fn should_spawn(&mut self) -> bool {
        self.rng.gen::<f32>() < self.probability
    }

    /// Random point in the ambient spawn volume.
    ///
    /// X and Z span `±extent/2`; Y spans `-bias*extent..(1-bias)*extent`.
    pub fn ambient_origin(&mut self) -> Vec3 {
        Vec3::new(
            (self.rng.gen::<f32>() - 0.5) * self.extent,
            (self.rng.gen::<f32>() - self.vertical_bias) * self.extent,
            (self.rng.gen::<f32>() - 0.5) * self.extent,
        )
    }

    /// Ambient trigger: `Some(origin)` when this frame's roll succeeds.
    pub fn ambient(&mut self) -> Option<Vec3> {
        if self.should_spawn() {
            Some(self.ambient_origin())
        } else {
            None
        }
    }

    /// Pointer trigger: world point under the cursor on the z=0 plane.
    ///
    /// Returns `None` when the view ray runs parallel to the plane, meets it
    /// behind the camera, or the hit point is not finite.
    pub fn pointer_origin(&self, camera: &Camera, ndc: Vec2) -> Option<Vec3> {
        let eye = camera.position();
        let on_ray = camera.unproject(ndc.extend(0.5));
        let direction = (on_ray - eye).normalize_or_zero();

        if direction.z.abs() < PARALLEL_EPSILON {
            log::warn!("pointer ray is parallel to the z=0 plane, skipping spawn");
            return None;
        }

        let distance = -eye.z / direction.z;
        if distance <= 0.0 {
            log::warn!("pointer ray points away from the z=0 plane, skipping spawn");
            return None;
        }

        let point = eye + direction * distance;
        if !point.is_finite() {
            log::warn!("pointer ray produced a non-finite hit point, skipping spawn");
            return None;
        }
        Some(point)
    }
}

/// Random unit vector sampled from the cube `[-1, 1)^3` and normalized.
///
/// A zero sample normalizes to zero rather than NaN.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * 2.0,
        (rng.gen::<f32>() - 0.5) * 2.0,
        (rng.gen::<f32>() - 0.5) * 2.0,
    )
    .normalize_or_zero()
}

/// Random fully saturated, mid-lightness colour.
pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    hsl_to_rgb(rng.gen::<f32>(), 1.0, 0.5)
}

/// Convert HSL to RGB.
///
/// * `h` - 0.0 to 1.0 (wraps)
/// * `s` - 0.0 (gray) to 1.0 (vivid)
/// * `l` - 0.0 (black) to 1.0 (white), 0.5 is the pure hue
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}
