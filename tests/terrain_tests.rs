// Host-side tests for the dune height field and the sky dome.

use glam::{Vec2, Vec3};
use hero_scene::constants::*;
use hero_scene::core::noise::noise3;
use hero_scene::core::sky;
use hero_scene::core::terrain::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn grid_has_expected_topology() {
    let g = grid(10.0, 4);
    assert_eq!(g.vertex_count(), 25);
    assert_eq!(g.index_count(), 4 * 4 * 6);
    let first = g.vertices[0].position;
    let last = g.vertices[24].position;
    assert_eq!(first, [-5.0, 0.0, -5.0]);
    assert_eq!(last, [5.0, 0.0, 5.0]);
    assert_eq!(g.vertices[0].uv, [0.0, 1.0]);
    assert_eq!(g.vertices[24].uv, [1.0, 0.0]);
}

#[test]
fn full_terrain_grid_size() {
    let g = grid(TERRAIN_SIZE, TERRAIN_SEGMENTS);
    let row = (TERRAIN_SEGMENTS + 1) as usize;
    assert_eq!(g.vertex_count(), row * row);
}

#[test]
fn noise_is_deterministic_and_bounded() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut max = 0.0_f32;
    for _ in 0..200_000 {
        let p = Vec3::new(
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
            rng.gen_range(-500.0..500.0),
        );
        let a = noise3(p);
        assert_eq!(a.to_bits(), noise3(p).to_bits());
        assert!(a.is_finite());
        max = max.max(a.abs());
    }
    assert!(max <= 1.05, "noise out of range: {max}");
    assert!(max > 0.3, "noise looks flat");
}

#[test]
fn noise_is_continuous() {
    let p = Vec3::new(1.3, -2.7, 0.4);
    let d = noise3(p) - noise3(p + Vec3::splat(1e-4));
    assert!(d.abs() < 1e-2);
}

#[test]
fn normals_match_finite_differences_of_height() {
    let pointer = Vec2::new(0.2, -0.4);
    let eps = TERRAIN_NORMAL_EPSILON;
    for (x, z, t) in [(0.0, 0.0, 0.0), (12.5, -7.0, 3.0), (-30.0, 22.0, 40.0)] {
        let n = normal(x, z, t, pointer, eps);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(n.y > 0.0);
        let expected = Vec3::new(
            height(x - eps, z, t, pointer) - height(x + eps, z, t, pointer),
            2.0 * eps,
            height(x, z - eps, t, pointer) - height(x, z + eps, t, pointer),
        )
        .normalize();
        assert!((n - expected).length() < 1e-6);
    }
}

#[test]
fn pointer_bump_peaks_under_pointer() {
    let pointer = Vec2::new(0.5, -0.25);
    let center = pointer * TERRAIN_POINTER_SPREAD;
    let peak = pointer_bump(center.x, center.y, pointer);
    assert!((peak - TERRAIN_POINTER_HEIGHT).abs() < 1e-6);
    let away = pointer_bump(center.x + 20.0, center.y, pointer);
    assert!(away < peak);
    assert!(away > 0.0);
}

#[test]
fn height_includes_the_bump() {
    let p = Vec2::new(-0.3, 0.6);
    let (x, z, t) = (4.0, 9.0, 2.5);
    let total = height(x, z, t, p);
    assert!((total - dune_height(x, z, t) - pointer_bump(x, z, p)).abs() < 1e-6);
}

#[test]
fn sky_dome_is_a_closed_sphere() {
    let (ws, hs) = (16, 8);
    let d = sky::dome(SKY_RADIUS, ws, hs);
    assert_eq!(d.vertex_count(), ((ws + 1) * (hs + 1)) as usize);
    assert_eq!(d.index_count(), 6 * ws * (hs - 1));
    for v in &d.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - SKY_RADIUS).abs() < 1e-2);
        // Inward facing.
        assert!(Vec3::from(v.normal).dot(p) < 0.0);
    }
}

#[test]
fn sky_darkens_toward_zenith() {
    let horizon = sky::gradient(Vec3::new(1.0, 0.0, 0.0));
    let zenith = sky::gradient(Vec3::Y);
    assert!(zenith.element_sum() < horizon.element_sum());
    assert_eq!(sky::star_mask(0.0), 0.0);
    assert_eq!(sky::star_mask(1.0), 1.0);
    // No stars below the horizon band.
    let below = Vec3::new(0.3, -0.2, 0.9).normalize();
    assert!((sky::sky_color(below, 4.0) - sky::gradient(below)).length() < 1e-6);
}
