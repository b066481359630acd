//! Integration tests for the headless simulation.
//!
//! These drive the public API the same way the viewer does, without a
//! window or GPU.

use fireworks::prelude::*;
use fireworks::input::screen_to_ndc;
use fireworks::{Particle, Scene};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn quiet_config(seed: u64) -> FireworksConfig {
    FireworksConfig::default()
        .with_ambient_probability(0.0)
        .with_seed(seed)
}

// ============================================================================
// Particle
// ============================================================================

#[test]
fn test_particle_half_second_step() {
    let config = FireworksConfig::default();
    let mut p = Particle::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 2.0, Vec3::ONE);
    p.advance(0.5, config.effective_gravity());

    assert!((p.velocity.y - 7.55).abs() < 1e-5);
    assert!((p.position.y - 3.775).abs() < 1e-5);
    assert!((p.visual.opacity - 0.75).abs() < 1e-5);
}

#[test]
fn test_particle_invariants_over_lifetime() {
    let mut fireworks = Fireworks::new(quiet_config(21));
    fireworks.spawn_at(Vec3::ZERO);

    for _ in 0..200 {
        fireworks.step(1.0 / 60.0);
        for explosion in fireworks.explosions() {
            for p in explosion.particles() {
                assert!(p.age >= 0.0);
                assert!(p.is_alive());
                assert!((0.0..=1.0).contains(&p.visual.opacity));
            }
        }
    }
}

// ============================================================================
// Explosion
// ============================================================================

#[test]
fn test_explosion_starts_with_hundred_particles() {
    let mut fireworks = Fireworks::new(quiet_config(22));
    fireworks.spawn_at(Vec3::new(3.0, 4.0, 5.0));

    let explosion = &fireworks.explosions()[0];
    assert_eq!(explosion.len(), 100);
    assert_eq!(explosion.origin(), Vec3::new(3.0, 4.0, 5.0));
    for p in explosion.particles() {
        let speed = p.velocity.length();
        assert!((5.0 - 1e-3..15.0 + 1e-3).contains(&speed));
        assert!((1.0..3.0).contains(&p.max_lifetime));
        assert_eq!(p.position, explosion.origin());
    }
}

#[test]
fn test_expired_explosion_reports_dead() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut scene = Scene::new();
    let mut explosion = Explosion::new(Vec3::ZERO, &FireworksConfig::default(), &mut rng, &mut scene);
    assert_eq!(scene.len(), 100);

    for p in explosion.particles_mut() {
        p.age = p.max_lifetime + 0.5;
    }

    assert!(!explosion.update(0.016, &mut scene));
    assert!(explosion.is_empty());
    assert!(scene.is_empty());

    // Updating a spent explosion again stays dead and touches nothing.
    assert!(!explosion.update(0.016, &mut scene));
    assert!(scene.is_empty());
}

#[test]
fn test_dead_explosions_are_retired() {
    let mut fireworks = Fireworks::new(quiet_config(24));
    fireworks.spawn_at(Vec3::ZERO);
    fireworks.spawn_at(Vec3::X);

    for p in fireworks.explosions_mut()[0].particles_mut() {
        p.age = p.max_lifetime;
    }
    fireworks.step(0.016);

    assert_eq!(fireworks.explosion_count(), 1);
    assert_eq!(fireworks.explosions()[0].origin(), Vec3::X);
    assert_eq!(fireworks.scene().len(), 100);
}

// ============================================================================
// Spawning
// ============================================================================

#[test]
fn test_click_center_spawns_on_view_axis() {
    let mut fireworks = Fireworks::new(quiet_config(25));
    let mut camera = Camera::new(fireworks.config());
    camera.set_viewport(1920, 1080);

    let ndc = screen_to_ndc(Vec2::new(960.0, 540.0), (1920, 1080)).unwrap();
    let origin = fireworks.spawn_at_pointer(&camera, ndc).unwrap();

    assert!(origin.x.abs() < 1e-2);
    assert!(origin.y.abs() < 1e-2);
    assert_eq!(fireworks.explosion_count(), 1);
}

#[test]
fn test_click_top_right_spawns_up_and_right() {
    let mut fireworks = Fireworks::new(quiet_config(26));
    let mut camera = Camera::new(fireworks.config());
    camera.set_viewport(800, 600);

    let ndc = screen_to_ndc(Vec2::new(700.0, 100.0), (800, 600)).unwrap();
    let origin = fireworks.spawn_at_pointer(&camera, ndc).unwrap();

    assert!(origin.x > 0.0);
    assert!(origin.y > 0.0);
    assert!(origin.z.abs() < 1e-3);
}

#[test]
fn test_ambient_spawns_accumulate() {
    let mut fireworks = Fireworks::new(
        FireworksConfig::default()
            .with_ambient_probability(0.02)
            .with_seed(27),
    );
    // One simulated minute at 60 fps; expect roughly 72 bursts.
    let mut spawned = 0;
    for _ in 0..3600 {
        if fireworks.spawn_ambient().is_some() {
            spawned += 1;
        }
    }
    assert!((30..130).contains(&spawned), "{} spawns", spawned);
    assert_eq!(fireworks.explosion_count(), spawned);
}

#[test]
fn test_steady_state_is_bounded() {
    let mut fireworks = Fireworks::new(
        FireworksConfig::default()
            .with_ambient_probability(0.02)
            .with_seed(28),
    );
    for _ in 0..6000 {
        fireworks.step(1.0 / 60.0);
    }
    // Explosions live at most 3 s = 180 frames, at 2% that is a handful.
    assert!(fireworks.explosion_count() < 20);
    assert_eq!(fireworks.scene().len(), fireworks.particle_count());
}
