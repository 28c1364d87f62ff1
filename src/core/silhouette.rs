//! The figure silhouette as a fixed outline asset, and its extrusion.
//!
//! Outlines are stored as path commands in figure-local units (hem at y = 0,
//! crown at y ≈ 1.88). Bump [`SILHOUETTE_VERSION`] whenever the control
//! points change so cached meshes and snapshot tests can notice.

use glam::Vec2;
use lyon_path::iterator::PathIterator;
use lyon_path::math::{point, Point};
use lyon_path::{Path, PathEvent};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use super::error::SceneError;
use super::mesh::{Mesh, Vertex};

pub const SILHOUETTE_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    QuadTo([f32; 2], [f32; 2]),
    CubicTo([f32; 2], [f32; 2], [f32; 2]),
}

use PathCommand::{CubicTo as C, LineTo as L, MoveTo as M, QuadTo as Q};

/// Standing figure in a long gown, hair falling down the back.
pub const BODY_OUTLINE: &[PathCommand] = &[
    M([-0.48, 0.0]),
    // left hem and skirt
    Q([-0.50, 0.10], [-0.46, 0.22]),
    C([-0.40, 0.45], [-0.30, 0.68], [-0.20, 0.84]),
    // left waist, ribcage, shoulder
    C([-0.15, 0.94], [-0.12, 1.00], [-0.10, 1.06]),
    C([-0.11, 1.14], [-0.13, 1.22], [-0.14, 1.28]),
    C([-0.16, 1.34], [-0.17, 1.38], [-0.16, 1.41]),
    // left arm down to the hand and back up
    C([-0.19, 1.40], [-0.21, 1.36], [-0.22, 1.28]),
    C([-0.23, 1.18], [-0.22, 1.06], [-0.21, 0.96]),
    C([-0.205, 0.92], [-0.195, 0.90], [-0.19, 0.92]),
    C([-0.185, 0.98], [-0.18, 1.08], [-0.17, 1.18]),
    C([-0.16, 1.26], [-0.15, 1.32], [-0.14, 1.37]),
    // neck, face, head
    C([-0.10, 1.42], [-0.07, 1.46], [-0.06, 1.52]),
    C([-0.07, 1.56], [-0.08, 1.61], [-0.09, 1.66]),
    C([-0.10, 1.72], [-0.10, 1.77], [-0.09, 1.81]),
    C([-0.06, 1.86], [-0.02, 1.88], [0.02, 1.88]),
    C([0.06, 1.88], [0.10, 1.86], [0.12, 1.82]),
    C([0.14, 1.78], [0.15, 1.73], [0.15, 1.68]),
    // hair down the back to its tip and back up
    C([0.16, 1.58], [0.18, 1.46], [0.20, 1.34]),
    C([0.22, 1.20], [0.23, 1.06], [0.22, 0.94]),
    C([0.21, 0.86], [0.19, 0.82], [0.17, 0.80]),
    C([0.16, 0.84], [0.15, 0.92], [0.14, 1.02]),
    C([0.13, 1.14], [0.12, 1.26], [0.11, 1.34]),
    // nape and back of the head
    C([0.10, 1.40], [0.09, 1.44], [0.08, 1.48]),
    C([0.08, 1.54], [0.08, 1.60], [0.07, 1.64]),
    C([0.07, 1.58], [0.07, 1.52], [0.07, 1.46]),
    // right shoulder and arm
    C([0.09, 1.40], [0.12, 1.38], [0.15, 1.36]),
    C([0.18, 1.34], [0.20, 1.28], [0.21, 1.18]),
    C([0.22, 1.06], [0.21, 0.96], [0.20, 0.90]),
    C([0.195, 0.87], [0.185, 0.86], [0.18, 0.88]),
    C([0.175, 0.94], [0.17, 1.04], [0.16, 1.14]),
    C([0.155, 1.22], [0.15, 1.28], [0.14, 1.32]),
    // right torso, waist, skirt, hem
    C([0.12, 1.24], [0.11, 1.16], [0.10, 1.06]),
    C([0.12, 1.00], [0.15, 0.94], [0.20, 0.84]),
    C([0.30, 0.68], [0.40, 0.45], [0.46, 0.22]),
    Q([0.50, 0.10], [0.48, 0.0]),
    L([-0.48, 0.0]),
];

/// Dress train hanging below the hem; this is the animated cloth mesh.
pub const SKIRT_OUTLINE: &[PathCommand] = &[
    M([-0.48, 0.0]),
    C([-0.52, -0.06], [-0.58, -0.18], [-0.60, -0.32]),
    C([-0.58, -0.40], [-0.50, -0.44], [-0.38, -0.44]),
    L([0.38, -0.44]),
    C([0.50, -0.44], [0.58, -0.40], [0.60, -0.32]),
    C([0.58, -0.18], [0.52, -0.06], [0.48, 0.0]),
    L([-0.48, 0.0]),
];

#[inline]
fn p(v: [f32; 2]) -> Point {
    point(v[0], v[1])
}

/// Build a closed lyon path from an outline. Commands before the first
/// `MoveTo` are ignored.
pub fn build_path(commands: &[PathCommand]) -> Path {
    let mut builder = Path::builder();
    let mut open = false;
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(to) => {
                if open {
                    builder.end(true);
                }
                builder.begin(p(to));
                open = true;
            }
            PathCommand::LineTo(to) if open => {
                builder.line_to(p(to));
            }
            PathCommand::QuadTo(ctrl, to) if open => {
                builder.quadratic_bezier_to(p(ctrl), p(to));
            }
            PathCommand::CubicTo(c1, c2, to) if open => {
                builder.cubic_bezier_to(p(c1), p(c2), p(to));
            }
            _ => {}
        }
    }
    if open {
        builder.end(true);
    }
    builder.build()
}

/// Outline flattened to line segments, with zero-length segments dropped.
pub fn flatten(commands: &[PathCommand], tolerance: f32) -> Vec<(Vec2, Vec2)> {
    let path = build_path(commands);
    let mut segments = Vec::new();
    for event in path.iter().flattened(tolerance) {
        let (from, to) = match event {
            PathEvent::Line { from, to } => (from, to),
            PathEvent::End {
                last,
                first,
                close: true,
            } => (last, first),
            _ => continue,
        };
        let a = Vec2::new(from.x, from.y);
        let b = Vec2::new(to.x, to.y);
        if a.distance_squared(b) > 1e-12 {
            segments.push((a, b));
        }
    }
    segments
}

/// Extrude an outline along z into a closed solid spanning `[-depth/2, depth/2]`.
///
/// Cap uvs are the planar xy coordinates; wall uvs run along the dominant
/// axis of each edge, so a repeating texture tiles in figure units.
pub fn extrude(commands: &[PathCommand], depth: f32, tolerance: f32) -> Result<Mesh, SceneError> {
    let path = build_path(commands);
    let mut caps: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    FillTessellator::new()
        .tessellate_path(
            &path,
            &FillOptions::tolerance(tolerance).with_fill_rule(FillRule::NonZero),
            &mut BuffersBuilder::new(&mut caps, |v: FillVertex| v.position().to_array()),
        )
        .map_err(|e| SceneError::Geometry(format!("outline tessellation failed: {e:?}")))?;
    if caps.indices.is_empty() {
        return Err(SceneError::Geometry("outline encloses no area".into()));
    }

    let front = depth * 0.5;
    let back = -front;
    let mut mesh = Mesh::default();

    for (z, nz) in [(front, 1.0), (back, -1.0)] {
        let base = mesh.vertices.len() as u32;
        mesh.vertices.extend(
            caps.vertices
                .iter()
                .map(|&[x, y]| Vertex::new([x, y, z], [0.0, 0.0, nz], [x, y])),
        );
        for tri in caps.indices.chunks_exact(3) {
            if nz > 0.0 {
                mesh.indices.extend_from_slice(&[base + tri[0], base + tri[1], base + tri[2]]);
            } else {
                mesh.indices.extend_from_slice(&[base + tri[0], base + tri[2], base + tri[1]]);
            }
        }
    }

    for (a, b) in flatten(commands, tolerance) {
        let edge = b - a;
        let n = Vec2::new(edge.y, -edge.x).normalize_or_zero();
        let along_x = edge.y.abs() < edge.x.abs();
        let u = |v: Vec2| if along_x { v.x } else { v.y };
        let base = mesh.vertices.len() as u32;
        let normal = [n.x, n.y, 0.0];
        mesh.vertices.extend_from_slice(&[
            Vertex::new([a.x, a.y, back], normal, [u(a), 1.0]),
            Vertex::new([b.x, b.y, back], normal, [u(b), 1.0]),
            Vertex::new([b.x, b.y, front], normal, [u(b), 1.0 - depth]),
            Vertex::new([a.x, a.y, front], normal, [u(a), 1.0 - depth]),
        ]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Ok(mesh)
}

/// Static body and animated skirt, in figure-local space.
#[derive(Clone, Debug)]
pub struct FigureMeshes {
    pub body: Mesh,
    pub skirt: Mesh,
}

pub fn build_figure(depth: f32, tolerance: f32) -> Result<FigureMeshes, SceneError> {
    Ok(FigureMeshes {
        body: extrude(BODY_OUTLINE, depth, tolerance)?,
        skirt: extrude(SKIRT_OUTLINE, depth, tolerance)?,
    })
}
