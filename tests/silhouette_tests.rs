// Host-side tests for outline flattening and extrusion.

use hero_scene::constants::{FIGURE_CURVE_TOLERANCE, FIGURE_DEPTH};
use hero_scene::core::mesh::Mesh;
use hero_scene::core::silhouette::*;
use hero_scene::core::SceneError;

fn assert_well_formed(mesh: &Mesh) {
    assert!(mesh.vertex_count() > 0);
    assert!(mesh.index_count() > 0);
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
    assert!(mesh.positions().flatten().all(f32::is_finite));
}

#[test]
fn figure_meshes_are_well_formed() {
    let fig = build_figure(FIGURE_DEPTH, FIGURE_CURVE_TOLERANCE).expect("figure builds");
    assert_well_formed(&fig.body);
    assert_well_formed(&fig.skirt);
}

#[test]
fn extrusion_spans_the_requested_depth() {
    let fig = build_figure(FIGURE_DEPTH, FIGURE_CURVE_TOLERANCE).expect("figure builds");
    let half = FIGURE_DEPTH * 0.5;
    for mesh in [&fig.body, &fig.skirt] {
        let (mut lo, mut hi) = (f32::MAX, f32::MIN);
        for [_, _, z] in mesh.positions() {
            lo = lo.min(z);
            hi = hi.max(z);
        }
        assert!((lo + half).abs() < 1e-6);
        assert!((hi - half).abs() < 1e-6);
    }
}

#[test]
fn skirt_hangs_below_the_waist() {
    let fig = build_figure(FIGURE_DEPTH, FIGURE_CURVE_TOLERANCE).expect("figure builds");
    for [x, y, _] in fig.skirt.positions() {
        assert!(y <= 1e-5, "skirt vertex above waist: {y}");
        assert!(y >= -0.45);
        assert!(x.abs() <= 0.61);
    }
}

#[test]
fn flattened_outline_is_closed() {
    let segs = flatten(SKIRT_OUTLINE, FIGURE_CURVE_TOLERANCE);
    assert!(segs.len() > 8);
    let first = segs.first().expect("segments").0;
    let last = segs.last().expect("segments").1;
    assert!(first.distance(last) < 1e-5);
    for w in segs.windows(2) {
        assert!(w[0].1.distance(w[1].0) < 1e-5);
    }
}

#[test]
fn tighter_tolerance_adds_segments() {
    let coarse = flatten(BODY_OUTLINE, 0.05).len();
    let fine = flatten(BODY_OUTLINE, 0.001).len();
    assert!(fine > coarse);
}

#[test]
fn square_cap_covers_its_area() {
    use PathCommand::*;
    let square = [
        MoveTo([0.0, 0.0]),
        LineTo([1.0, 0.0]),
        LineTo([1.0, 1.0]),
        LineTo([0.0, 1.0]),
    ];
    let mesh = extrude(&square, 0.2, 0.01).expect("square extrudes");
    let front_area: f32 = mesh
        .indices
        .chunks_exact(3)
        .map(|t| {
            let a = mesh.vertices[t[0] as usize];
            let b = mesh.vertices[t[1] as usize];
            let c = mesh.vertices[t[2] as usize];
            (a, b, c)
        })
        .filter(|(a, b, c)| a.normal[2] > 0.5 && b.normal[2] > 0.5 && c.normal[2] > 0.5)
        .map(|(a, b, c)| {
            let ab = [b.position[0] - a.position[0], b.position[1] - a.position[1]];
            let ac = [c.position[0] - a.position[0], c.position[1] - a.position[1]];
            0.5 * (ab[0] * ac[1] - ab[1] * ac[0]).abs()
        })
        .sum();
    assert!((front_area - 1.0).abs() < 1e-4);
    // Four walls of two triangles each.
    let walls = mesh
        .vertices
        .iter()
        .filter(|v| v.normal[2] == 0.0)
        .count();
    assert_eq!(walls, 16);
}

#[test]
fn outline_without_area_is_a_geometry_error() {
    use PathCommand::*;
    assert!(matches!(extrude(&[], 0.3, 0.01), Err(SceneError::Geometry(_))));
    let point_only = [MoveTo([0.5, 0.5])];
    assert!(matches!(
        extrude(&point_only, 0.3, 0.01),
        Err(SceneError::Geometry(_))
    ));
}
