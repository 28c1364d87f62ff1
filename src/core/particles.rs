//! Mote field: immutable per-particle attributes plus a host-side reference
//! of the motion the particle vertex stage computes from them.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use super::noise::noise3;
use super::smoothstep;
use crate::constants::*;

/// Per-instance record uploaded once. Never mutated after construction.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleAttributes {
    pub position: [f32; 3],
    pub scale: f32,
    pub speed: f32,
    pub phase: f32,
    pub _pad: [f32; 2],
}

/// Scatter `count` particles over the field with a seeded RNG.
pub fn scatter(count: u32, seed: u64) -> Vec<ParticleAttributes> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| ParticleAttributes {
            position: [
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
                rng.gen::<f32>() * PARTICLE_SPAN_Y + PARTICLE_MIN_Y,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XZ,
            ],
            scale: rng.gen::<f32>() * 0.5 + 0.2,
            speed: rng.gen::<f32>() * 0.3 + 0.15,
            phase: rng.gen::<f32>(),
            _pad: [0.0; 2],
        })
        .collect()
}

/// World position of a particle at `time`, recomputed from its base position.
pub fn animated_position(p: &ParticleAttributes, time: f32, pointer: Vec2, wind: Vec2) -> Vec3 {
    let base = Vec3::from(p.position);
    let wx = noise3(Vec3::new(base.x * 0.06, base.y * 0.06, time * 0.1 + p.phase));
    let wy = noise3(Vec3::new(base.y * 0.06, base.z * 0.06, time * 0.07 + p.phase)) * 0.3;
    let wz = noise3(Vec3::new(base.z * 0.06, base.x * 0.06, time * 0.08 + p.phase)) * 0.8;

    let mut pos = base;
    pos.x += wx * p.speed + wind.x * PARTICLE_WIND_DRIFT * p.speed;
    pos.y += wy * p.speed + (time * 0.3 + p.phase * std::f32::consts::TAU).sin() * 0.15;
    pos.z += wz * p.speed + wind.y * PARTICLE_WIND_DRIFT * p.speed;

    let center = pointer * PARTICLE_POINTER_SPREAD;
    let d = (Vec2::new(pos.x, pos.z) - center).length();
    let influence = (-d * PARTICLE_POINTER_FALLOFF).exp();
    pos.x += (pos.x - center.x) * influence * PARTICLE_POINTER_PUSH;
    pos
}

/// Opacity envelope: fades near the ground and away from the scene center.
pub fn fade(pos: Vec3) -> f32 {
    smoothstep(0.5, 3.0, pos.y) * (1.0 - smoothstep(18.0, 40.0, Vec2::new(pos.x, pos.z).length()))
}

/// Sprite diameter in physical pixels for a particle `view_depth` units away.
pub fn sprite_size_px(scale: f32, pixel_ratio: f32, view_depth: f32) -> f32 {
    scale * PARTICLE_BASE_SIZE * pixel_ratio * (PARTICLE_SIZE_ATTENUATION / view_depth.max(1e-3))
}
