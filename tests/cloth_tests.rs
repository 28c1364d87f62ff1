// Host-side tests for the skirt drapery field.

use glam::Vec2;
use hero_scene::constants::{CLOTH_WAISTLINE_Y, FIGURE_CURVE_TOLERANCE, FIGURE_DEPTH};
use hero_scene::core::cloth::*;
use hero_scene::core::mesh::Vertex;
use hero_scene::core::silhouette::build_figure;

fn skirt() -> Vec<Vertex> {
    build_figure(FIGURE_DEPTH, FIGURE_CURVE_TOLERANCE)
        .expect("figure builds")
        .skirt
        .vertices
}

#[test]
fn displacement_is_a_pure_function() {
    let rest_vertices = skirt();
    let rest = ClothRestPose::capture(&rest_vertices);
    let wind = Vec2::new(0.13, -0.04);

    let mut a = rest_vertices.clone();
    let mut b = rest_vertices.clone();
    displace(&rest, 7.25, wind, &mut a);
    // Run b through other times first; the result must not depend on history.
    displace(&rest, 1.0, Vec2::ZERO, &mut b);
    displace(&rest, 99.0, Vec2::ONE, &mut b);
    displace(&rest, 7.25, wind, &mut b);

    for (va, vb) in a.iter().zip(&b) {
        for k in 0..3 {
            assert_eq!(va.position[k].to_bits(), vb.position[k].to_bits());
        }
    }
}

#[test]
fn depth_axis_is_never_touched() {
    let rest_vertices = skirt();
    let rest = ClothRestPose::capture(&rest_vertices);
    let mut out = rest_vertices.clone();
    displace(&rest, 3.3, Vec2::new(0.2, 0.1), &mut out);
    for (r, o) in rest.positions().iter().zip(&out) {
        assert_eq!(r[2], o.position[2]);
    }
}

#[test]
fn vertices_at_or_above_waist_stay_put() {
    for y in [CLOTH_WAISTLINE_Y, 0.1, 0.8] {
        let rest = [0.37, y, 0.15];
        for t in [0.0, 1.7, 12.0] {
            assert_eq!(displace_point(rest, t, Vec2::new(0.2, -0.1)), rest);
        }
    }
}

#[test]
fn hem_moves_more_than_waist() {
    assert_eq!(hang_depth(0.0), 0.0);
    assert_eq!(hang_depth(0.5), 0.0);
    assert!((hang_depth(-0.44) - 0.88).abs() < 1e-6);
    assert!(hang_depth(-0.4) > hang_depth(-0.1));
}

#[test]
fn offsets_stay_bounded() {
    let wind = Vec2::new(-0.2, 0.12);
    let strength = wind_strength(wind);
    assert!((strength - (0.03 + 0.2 * 0.12)).abs() < 1e-6);
    for i in 0..200 {
        let t = i as f32 * 0.37;
        let rest = [0.25, -0.44, 0.0];
        let [x, y, _] = displace_point(rest, t, wind);
        let depth = hang_depth(rest[1]);
        let max_dx = (strength + wind.x.abs() * 0.2) * depth;
        assert!((x - rest[0]).abs() <= max_dx + 1e-5);
        assert!((y - rest[1]).abs() <= 0.006 * depth + 1e-5);
    }
}

#[test]
fn normals_and_uvs_survive_displacement() {
    let rest_vertices = skirt();
    let rest = ClothRestPose::capture(&rest_vertices);
    assert_eq!(rest.len(), rest_vertices.len());
    assert!(!rest.is_empty());
    let mut out = rest_vertices.clone();
    displace(&rest, 2.0, Vec2::new(0.1, 0.0), &mut out);
    for (a, b) in rest_vertices.iter().zip(&out) {
        assert_eq!(a.normal, b.normal);
        assert_eq!(a.uv, b.uv);
    }
}
