//! 3D simplex gradient noise.
//!
//! This is the host-side twin of `shaders/noise.wgsl`; both follow the same
//! arithmetic step for step (mod-289 permutation polynomial, 7x7 gradient
//! ring) so the terrain height queried on the CPU matches what the vertex
//! stage displaces. Output lies in roughly [-1, 1].

use glam::{Vec3, Vec3Swizzles, Vec4, Vec4Swizzles};

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

// GLSL/WGSL `step(edge, x)`: 0 where x < edge, 1 otherwise.
#[inline]
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::select(x.cmplt(edge), Vec3::ZERO, Vec3::ONE)
}

#[inline]
fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::select(x.cmplt(edge), Vec4::ZERO, Vec4::ONE)
}

/// Sample 3D simplex noise at `v`. Pure and stateless.
pub fn noise3(v: Vec3) -> f32 {
    const C: [f32; 2] = [1.0 / 6.0, 1.0 / 3.0];

    // Skew into simplex space and find the containing cell.
    let mut i = (v + Vec3::splat(v.dot(Vec3::splat(C[1])))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C[0])));

    // Rank the corner offsets.
    let g = step3(x0.yzx(), x0);
    let l = Vec3::ONE - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + Vec3::splat(C[0]);
    let x2 = x0 - i2 + Vec3::splat(C[1]);
    let x3 = x0 - Vec3::splat(0.5);

    i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients on a 7x7 ring mapped onto an octahedron.
    let n_ = 0.142_857_15_f32;
    let ns = Vec3::new(2.0 * n_, 0.5 * n_ - 1.0, n_);

    let j = p - 49.0 * (p * ns.z * ns.z).floor();
    let x_ = (j * ns.z).floor();
    let y_ = (j - 7.0 * x_).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);
    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = b0.xzyw() + s0.xzyw() * sh.xxyy();
    let a1 = b1.xzyw() + s1.xzyw() * sh.zzww();

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    let norm = taylor_inv_sqrt(Vec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Radial falloff per corner.
    let m = (Vec4::splat(0.6) - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
        .max(Vec4::ZERO);
    let m = m * m;
    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_matches_shader_semantics() {
        let s = step4(Vec4::splat(0.5), Vec4::new(0.0, 0.5, 0.7, -1.0));
        assert_eq!(s, Vec4::new(0.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn corner_ranking_covers_every_octant() {
        for v in [
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.3, 0.2, 0.1),
            Vec3::new(0.2, 0.3, 0.1),
            Vec3::new(-0.4, 0.9, 0.05),
        ] {
            assert!(noise3(v).is_finite());
        }
    }
}
