//! Dune field: flat grid geometry plus the height field the terrain vertex
//! stage applies to it.
//!
//! The grid is static; displacement happens on the GPU every frame. The
//! functions here mirror `shaders/terrain.wgsl` so the field can be probed on
//! the host (camera clearance checks, tests).

use glam::{Vec2, Vec3};

use super::mesh::{Mesh, Vertex};
use super::noise::noise3;
use crate::constants::{
    TERRAIN_POINTER_FALLOFF, TERRAIN_POINTER_HEIGHT, TERRAIN_POINTER_SPREAD,
};

/// Square grid in the XZ plane centered on the origin, `segments` quads per side.
pub fn grid(size: f32, segments: u32) -> Mesh {
    let segments = segments.max(1);
    let row = segments + 1;
    let half = size * 0.5;
    let step = size / segments as f32;
    let mut mesh = Mesh {
        vertices: Vec::with_capacity((row * row) as usize),
        indices: Vec::with_capacity((segments * segments * 6) as usize),
    };
    for iz in 0..=segments {
        let z = -half + iz as f32 * step;
        for ix in 0..=segments {
            let x = -half + ix as f32 * step;
            mesh.vertices.push(Vertex::new(
                [x, 0.0, z],
                [0.0, 1.0, 0.0],
                [ix as f32 / segments as f32, 1.0 - iz as f32 / segments as f32],
            ));
        }
    }
    for iz in 0..segments {
        for ix in 0..segments {
            let a = iz * row + ix;
            let b = (iz + 1) * row + ix;
            let c = (iz + 1) * row + ix + 1;
            let d = iz * row + ix + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Layered dune height at grid coordinate `(x, z)` and time `t`, before the
/// pointer bump.
pub fn dune_height(x: f32, z: f32, t: f32) -> f32 {
    let breath = (t * 0.2).sin() * 0.03;
    let h1 = noise3(Vec3::new(x * 0.06, z * 0.06, t * 0.02)) * 1.4;
    let h2 = noise3(Vec3::new(x * 0.14, z * 0.10, t * 0.03)) * 0.4;
    let h3 = noise3(Vec3::new(x * 0.28 + t * 0.008, z * 0.22, 0.0)) * 0.15;
    let ridge = noise3(Vec3::new(x * 0.09, z * 0.11, t * 0.015))
        .abs()
        .powf(0.8)
        * 0.7;
    h1 + h2 + h3 + ridge + breath
}

/// Gaussian-like rise centered under the pointer, projected onto the ground.
pub fn pointer_bump(x: f32, z: f32, pointer: Vec2) -> f32 {
    let d = (Vec2::new(x, z) - pointer * TERRAIN_POINTER_SPREAD).length();
    (-d * TERRAIN_POINTER_FALLOFF).exp() * TERRAIN_POINTER_HEIGHT
}

/// Total displacement applied to the grid vertex at `(x, z)`.
pub fn height(x: f32, z: f32, t: f32, pointer: Vec2) -> f32 {
    dune_height(x, z, t) + pointer_bump(x, z, pointer)
}

/// Surface normal by central differences of [`height`] at `±eps`.
pub fn normal(x: f32, z: f32, t: f32, pointer: Vec2, eps: f32) -> Vec3 {
    let h_l = height(x - eps, z, t, pointer);
    let h_r = height(x + eps, z, t, pointer);
    let h_d = height(x, z - eps, t, pointer);
    let h_u = height(x, z + eps, t, pointer);
    Vec3::new(h_l - h_r, 2.0 * eps, h_d - h_u).normalize()
}
