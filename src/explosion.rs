//! A single firework burst.

use crate::config::FireworksConfig;
use crate::particle::Particle;
use crate::scene::Scene;
use crate::spawn::{random_direction, random_hue};
use glam::Vec3;
use rand::Rng;

/// A burst of particles that all start at the same origin.
///
/// Created with `config.particles_per_explosion` particles, each added to the
/// scene immediately. [`Explosion::update`] drops expired particles and
/// reports whether any remain.
#[derive(Debug, Clone)]
pub struct Explosion {
    origin: Vec3,
    gravity: f32,
    particles: Vec<Particle>,
}

impl Explosion {
    pub fn new<R: Rng + ?Sized>(
        origin: Vec3,
        config: &FireworksConfig,
        rng: &mut R,
        scene: &mut Scene,
    ) -> Self {
        let particles = (0..config.particles_per_explosion)
            .map(|_| {
                let speed = rng.gen_range(config.speed.clone());
                let velocity = random_direction(rng) * speed;
                let color = random_hue(rng);
                let max_lifetime = rng.gen_range(config.lifetime.clone());

                let mut particle = Particle::new(origin, velocity, max_lifetime, color);
                particle.attach(scene, config.particle_radius);
                particle
            })
            .collect();

        Self {
            origin,
            gravity: config.effective_gravity(),
            particles,
        }
    }

    /// Advance every particle and retire the expired ones.
    ///
    /// Returns `false` once no particle is left; the explosion should then be
    /// dropped by its owner.
    pub fn update(&mut self, delta_time: f32, scene: &mut Scene) -> bool {
        for particle in &mut self.particles {
            particle.advance(delta_time, self.gravity);
            if particle.is_alive() {
                particle.sync(scene);
            } else {
                particle.detach(scene);
            }
        }

        self.particles.retain(Particle::is_alive);
        !self.particles.is_empty()
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for tools and tests that need to adjust particle state.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Detach every remaining particle from the scene.
    pub fn clear(&mut self, scene: &mut Scene) {
        for particle in &mut self.particles {
            particle.detach(scene);
        }
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn burst(seed: u64, scene: &mut Scene) -> Explosion {
        let mut rng = SmallRng::seed_from_u64(seed);
        Explosion::new(Vec3::new(1.0, 2.0, 3.0), &FireworksConfig::default(), &mut rng, scene)
    }

    #[test]
    fn test_new_explosion_shape() {
        let mut scene = Scene::new();
        let explosion = burst(5, &mut scene);

        assert_eq!(explosion.len(), 100);
        assert_eq!(scene.len(), 100);
        for p in explosion.particles() {
            assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(p.age, 0.0);
            assert!(p.max_lifetime >= 1.0 && p.max_lifetime < 3.0);
            let speed = p.velocity.length();
            assert!(speed >= 5.0 - 1e-3 && speed < 15.0 + 1e-3, "speed {}", speed);
            assert!(p.visual.mesh.is_some());
        }
    }

    #[test]
    fn test_update_reports_alive() {
        let mut scene = Scene::new();
        let mut explosion = burst(6, &mut scene);
        assert!(explosion.update(0.1, &mut scene));
        assert_eq!(explosion.len(), 100);
    }

    #[test]
    fn test_update_expires_everything() {
        let mut scene = Scene::new();
        let mut explosion = burst(7, &mut scene);
        for p in explosion.particles_mut() {
            p.age = p.max_lifetime + 1.0;
        }

        assert!(!explosion.update(0.016, &mut scene));
        assert!(explosion.is_empty());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_partial_expiry_removes_only_dead() {
        let mut scene = Scene::new();
        let mut explosion = burst(8, &mut scene);
        for p in explosion.particles_mut().iter_mut().take(40) {
            p.age = p.max_lifetime;
        }

        assert!(explosion.update(0.0, &mut scene));
        assert_eq!(explosion.len(), 60);
        assert_eq!(scene.len(), 60);
    }

    #[test]
    fn test_runs_out_within_max_lifetime() {
        let mut scene = Scene::new();
        let mut explosion = burst(9, &mut scene);
        let mut frames = 0;
        while explosion.update(0.1, &mut scene) {
            frames += 1;
            assert!(frames <= 30);
        }
        assert!(scene.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene::new();
        let mut explosion = burst(10, &mut scene);
        explosion.clear(&mut scene);
        assert!(explosion.is_empty());
        assert!(scene.is_empty());
    }
}
