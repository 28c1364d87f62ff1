//! Sky dome geometry and a host-side reference of the sky shading.
//!
//! `sky_color` follows `shaders/sky.wgsl` term for term; the renderer never
//! calls it, it exists so the gradient, glow and star thresholds can be
//! checked without a GPU.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::mesh::{Mesh, Vertex};
use super::noise::noise3;
use super::smoothstep;

pub const ZENITH: Vec3 = Vec3::new(0.008, 0.031, 0.125);
pub const UPPER: Vec3 = Vec3::new(0.004, 0.051, 0.431);
pub const MID: Vec3 = Vec3::new(0.0, 0.259, 0.686);
pub const HORIZON: Vec3 = Vec3::new(0.102, 0.310, 0.749);
pub const GOLD: Vec3 = Vec3::new(0.83, 0.77, 0.0);
pub const WARM: Vec3 = Vec3::new(0.75, 0.72, 0.25);

/// UV sphere centered on the origin. Normals point inward; the camera always
/// sits inside the dome so it is drawn without face culling.
pub fn dome(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = Mesh::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let dir = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.vertices.push(Vertex::new(
                (dir * radius).to_array(),
                (-dir).to_array(),
                [u, 1.0 - v],
            ));
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a single triangle per quad.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Four-stop vertical gradient plus horizon glow, no stars.
pub fn gradient(dir: Vec3) -> Vec3 {
    let dir = dir.normalize_or_zero();
    let y = dir.y;
    let t = y * 0.5 + 0.5;

    let mut sky = HORIZON.lerp(MID, smoothstep(0.0, 0.12, t));
    sky = sky.lerp(UPPER, smoothstep(0.12, 0.40, t));
    sky = sky.lerp(ZENITH, smoothstep(0.40, 0.90, t));

    let band = (-(y * 8.0).powi(2)).exp();
    sky += Vec3::new(0.06, 0.12, 0.35) * band;

    let center = (-(y * 6.0).powi(2)).exp() * (-dir.x.abs() * 1.5).exp();
    sky += Vec3::new(0.08, 0.15, 0.40) * center;

    let scatter = (-y.abs() * 8.0).exp() * 0.08;
    sky + Vec3::new(0.03, 0.06, 0.16) * scatter
}

/// Stars only appear above this elevation ramp.
pub fn star_mask(y: f32) -> f32 {
    smoothstep(0.03, 0.25, y)
}

/// Full sky color along `dir` at `time`.
pub fn sky_color(dir: Vec3, time: f32) -> Vec3 {
    let dir = dir.normalize_or_zero();
    let mut sky = gradient(dir);

    let s1 = noise3(dir * 220.0);
    let s2 = noise3(dir * 380.0 + Vec3::splat(50.0));
    let s3 = noise3(dir * 140.0 + Vec3::splat(100.0));
    let star1 = smoothstep(0.965, 0.98, s1);
    let star2 = smoothstep(0.975, 0.99, s2);
    let star3 = smoothstep(0.982, 0.995, s3);
    let mask = star_mask(dir.y);
    let tw1 = (time + s1 * 80.0).sin() * 0.25 + 0.75;
    let tw2 = (time * 0.7 + s2 * 60.0).cos() * 0.2 + 0.8;

    sky += GOLD * star1 * tw1 * mask * 0.55;
    sky += WARM * star2 * tw2 * mask * 0.35;
    sky += GOLD * star3 * mask * 0.2;

    let orb1 = smoothstep(0.991, 0.997, noise3(dir * 42.0 + Vec3::splat(7.0)));
    let orb2 = smoothstep(0.993, 0.998, noise3(dir * 58.0 + Vec3::splat(33.0)));
    sky += GOLD * orb1 * mask * 0.7;
    sky + Vec3::new(0.75, 0.70, 0.1) * orb2 * mask * 0.5
}
