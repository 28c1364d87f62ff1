// Host-side tests for the mote field.

use glam::{Vec2, Vec3};
use hero_scene::constants::*;
use hero_scene::core::particles::*;

#[test]
fn attributes_are_packed_for_instancing() {
    assert_eq!(std::mem::size_of::<ParticleAttributes>(), 32);
}

#[test]
fn scatter_respects_ranges() {
    let motes = scatter(PARTICLE_COUNT, PARTICLE_SEED);
    assert_eq!(motes.len(), PARTICLE_COUNT as usize);
    let half = PARTICLE_SPREAD_XZ * 0.5;
    for m in &motes {
        let [x, y, z] = m.position;
        assert!(x >= -half && x <= half);
        assert!(z >= -half && z <= half);
        assert!(y >= PARTICLE_MIN_Y && y <= PARTICLE_MIN_Y + PARTICLE_SPAN_Y);
        assert!(m.scale >= 0.2 && m.scale <= 0.7);
        assert!(m.speed >= 0.15 && m.speed <= 0.45);
        assert!(m.phase >= 0.0 && m.phase < 1.0);
    }
}

#[test]
fn scatter_is_seeded() {
    assert_eq!(scatter(50, 9), scatter(50, 9));
    assert_ne!(scatter(50, 9), scatter(50, 10));
    assert!(scatter(0, 9).is_empty());
}

#[test]
fn motion_is_recomputed_from_the_base_position() {
    let motes = scatter(8, 3);
    let pointer = Vec2::new(0.4, 0.1);
    let wind = Vec2::new(0.05, -0.02);
    for m in &motes {
        let a = animated_position(m, 12.0, pointer, wind);
        // Visiting other times in between changes nothing.
        let _ = animated_position(m, 1.0, Vec2::ZERO, Vec2::ZERO);
        let b = animated_position(m, 12.0, pointer, wind);
        assert_eq!(a, b);
        // Offsets stay small relative to the field.
        assert!((a - Vec3::from(m.position)).length() < 3.0);
    }
}

#[test]
fn wind_drifts_motes_downwind() {
    let m = scatter(1, 21)[0];
    let calm = animated_position(&m, 5.0, Vec2::splat(5.0), Vec2::ZERO);
    let windy = animated_position(&m, 5.0, Vec2::splat(5.0), Vec2::new(0.2, 0.0));
    assert!(windy.x > calm.x);
}

#[test]
fn sprites_shrink_with_distance() {
    let near = sprite_size_px(1.0, 2.0, PARTICLE_SIZE_ATTENUATION);
    assert!((near - PARTICLE_BASE_SIZE * 2.0).abs() < 1e-4);
    let far = sprite_size_px(1.0, 2.0, PARTICLE_SIZE_ATTENUATION * 2.0);
    assert!((far - near * 0.5).abs() < 1e-4);
    assert!(sprite_size_px(1.0, 1.0, 0.0).is_finite());
}

#[test]
fn fade_envelope() {
    assert_eq!(fade(Vec3::new(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(fade(Vec3::new(0.0, 3.0, 0.0)), 1.0);
    assert_eq!(fade(Vec3::new(40.0, 10.0, 0.0)), 0.0);
    let mid = fade(Vec3::new(25.0, 10.0, 0.0));
    assert!(mid > 0.0 && mid < 1.0);
}
