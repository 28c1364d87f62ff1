//! Closed-form drapery field for the figure's skirt.
//!
//! Every frame the skirt vertices are rewritten as `rest + offset(t, wind)`.
//! Nothing is integrated, so the result depends only on the rest pose, the
//! simulated time and the filtered wind vector.

use glam::Vec2;

use super::mesh::Vertex;
use crate::constants::*;

/// Immutable copy of the skirt's vertex positions taken at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothRestPose {
    positions: Box<[[f32; 3]]>,
}

impl ClothRestPose {
    pub fn capture(vertices: &[Vertex]) -> Self {
        Self {
            positions: vertices.iter().map(|v| v.position).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }
}

/// How far below the waistline a rest vertex hangs, scaled; 0 at or above it.
#[inline]
pub fn hang_depth(rest_y: f32) -> f32 {
    ((CLOTH_WAISTLINE_Y - rest_y) * CLOTH_DEPTH_GAIN).max(0.0)
}

/// Sway amplitude for the current wind.
#[inline]
pub fn wind_strength(wind: Vec2) -> f32 {
    CLOTH_BASE_STRENGTH + wind.x.abs() * CLOTH_WIND_GAIN
}

/// Displaced position of a single rest vertex.
#[inline]
pub fn displace_point(rest: [f32; 3], time: f32, wind: Vec2) -> [f32; 3] {
    let [x, y, z] = rest;
    let depth = hang_depth(y);
    let sway = (time * CLOTH_SWAY_TIME + y * CLOTH_SWAY_Y + x * CLOTH_SWAY_X).sin()
        * wind_strength(wind)
        * depth;
    let drag = wind.x * depth * CLOTH_WIND_DRAG;
    let ripple = (time * CLOTH_RIPPLE_TIME + x * CLOTH_RIPPLE_X).sin() * CLOTH_RIPPLE_AMP * depth;
    [x + sway + drag, y + ripple, z]
}

/// Rewrite `out` positions from `rest`; normals and uvs are left untouched.
///
/// `out` must hold the same vertex count as the rest pose; extra entries on
/// either side are ignored.
pub fn displace(rest: &ClothRestPose, time: f32, wind: Vec2, out: &mut [Vertex]) {
    for (dst, src) in out.iter_mut().zip(rest.positions.iter()) {
        dst.position = displace_point(*src, time, wind);
    }
}
