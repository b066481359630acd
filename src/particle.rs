//! A single firework spark.
//!
//! A [`Particle`] carries its own kinematic state plus a [`Visual`] that links
//! it to a sphere in the [`Scene`]. Each frame [`Particle::advance`] applies
//! gravity to the velocity first and then integrates position with the
//! updated velocity.
//!
//! ```ignore
//! let mut p = Particle::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 2.0, Vec3::ONE);
//! p.advance(0.5, 4.9);
//! assert!((p.velocity.y - 7.55).abs() < 1e-5);
//! assert!((p.position.y - 3.775).abs() < 1e-5);
//! assert!((p.visual.opacity - 0.75).abs() < 1e-5);
//! ```

use crate::scene::{MeshHandle, Scene, Sphere};
use glam::Vec3;

/// Rendering state of a particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    /// Sphere in the scene, `None` once detached (or before attaching).
    pub mesh: Option<MeshHandle>,
    /// RGB colour (sRGB, 0.0-1.0).
    pub color: Vec3,
    /// Current opacity, always within 0.0..=1.0.
    pub opacity: f32,
}

/// A moving, fading point with a fixed lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Seconds since spawn.
    pub age: f32,
    /// Seconds until expiry.
    pub max_lifetime: f32,
    pub visual: Visual,
}

impl Particle {
    /// Create a particle at age zero, fully opaque and not yet in a scene.
    pub fn new(position: Vec3, velocity: Vec3, max_lifetime: f32, color: Vec3) -> Self {
        Self {
            position,
            velocity,
            age: 0.0,
            max_lifetime,
            visual: Visual {
                mesh: None,
                color,
                opacity: 1.0,
            },
        }
    }

    /// Step the particle forward by `delta_time` seconds.
    ///
    /// `gravity` is the downward acceleration applied to `velocity.y`. A
    /// particle that has reached its lifetime stops moving and drops to zero
    /// opacity.
    pub fn advance(&mut self, delta_time: f32, gravity: f32) {
        let dt = delta_time.max(0.0);
        self.age += dt;

        if self.is_alive() {
            self.velocity.y -= gravity * dt;
            self.position += self.velocity * dt;
            self.visual.opacity = (1.0 - self.life_fraction()).clamp(0.0, 1.0);
        } else {
            self.visual.opacity = 0.0;
        }
    }

    /// True while `age < max_lifetime`.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.max_lifetime
    }

    /// Fraction of the lifetime already used (0.0 at birth, >= 1.0 once expired).
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        self.age / self.max_lifetime
    }

    /// Add this particle's sphere to the scene.
    ///
    /// Does nothing if the particle is already attached.
    pub fn attach(&mut self, scene: &mut Scene, radius: f32) {
        if self.visual.mesh.is_some() {
            return;
        }
        let handle = scene.add(Sphere {
            position: self.position,
            radius,
            color: self.visual.color,
            opacity: self.visual.opacity,
        });
        self.visual.mesh = Some(handle);
    }

    /// Push position and opacity into the scene.
    pub fn sync(&self, scene: &mut Scene) {
        if let Some(handle) = self.visual.mesh {
            scene.set_transform(handle, self.position, self.visual.opacity);
        }
    }

    /// Remove this particle's sphere from the scene.
    ///
    /// Returns `true` only on the call that actually removed it.
    pub fn detach(&mut self, scene: &mut Scene) -> bool {
        match self.visual.mesh.take() {
            Some(handle) => scene.remove(handle),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_applies_gravity_before_integration() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 2.0, Vec3::ONE);
        p.advance(0.5, 9.8 * 0.5);

        assert!((p.velocity.y - 7.55).abs() < 1e-5);
        assert!((p.position.y - 3.775).abs() < 1e-5);
        assert!((p.visual.opacity - 0.75).abs() < 1e-5);
        assert!((p.age - 0.5).abs() < 1e-6);
        assert!(p.is_alive());
    }

    #[test]
    fn test_opacity_at_birth() {
        let p = Particle::new(Vec3::ZERO, Vec3::X, 1.5, Vec3::ONE);
        assert_eq!(p.visual.opacity, 1.0);
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn test_expired_particle_stops_and_fades() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0, Vec3::ONE);
        p.advance(0.4, 4.9);
        let position = p.position;

        p.advance(1.0, 4.9);
        assert!(!p.is_alive());
        assert_eq!(p.position, position);
        assert_eq!(p.visual.opacity, 0.0);
    }

    #[test]
    fn test_opacity_stays_in_range() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::Y, 2.0, Vec3::ONE);
        let mut last_age = p.age;
        for _ in 0..50 {
            p.advance(0.05, 4.9);
            assert!(p.age >= last_age);
            assert!((0.0..=1.0).contains(&p.visual.opacity));
            last_age = p.age;
        }
    }

    #[test]
    fn test_negative_delta_does_not_rewind_age() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::Y, 2.0, Vec3::ONE);
        p.advance(0.3, 4.9);
        p.advance(-0.2, 4.9);
        assert!((p.age - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_does_not_move() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(1.0, 10.0, 0.0), 2.0, Vec3::ONE);
        p.advance(0.5, 4.9);
        let position = p.position;
        let velocity = p.velocity;

        p.advance(-0.25, 4.9);
        assert_eq!(p.position, position);
        assert_eq!(p.velocity, velocity);
    }

    #[test]
    fn test_detach_exactly_once() {
        let mut scene = Scene::new();
        let mut p = Particle::new(Vec3::ZERO, Vec3::Y, 1.0, Vec3::ONE);
        p.attach(&mut scene, 0.3);
        assert_eq!(scene.len(), 1);

        assert!(p.detach(&mut scene));
        assert!(!p.detach(&mut scene));
        assert!(scene.is_empty());
        assert!(p.visual.mesh.is_none());
    }

    #[test]
    fn test_sync_moves_sphere() {
        let mut scene = Scene::new();
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 3.0, Vec3::ONE);
        p.attach(&mut scene, 0.3);
        p.advance(0.5, 0.0);
        p.sync(&mut scene);

        let sphere = scene.get(p.visual.mesh.unwrap()).unwrap();
        assert!((sphere.position.x - 1.0).abs() < 1e-6);
        assert!((sphere.opacity - p.visual.opacity).abs() < 1e-6);
    }
}
