use rand::prelude::*;

const BASE: [u8; 3] = [0x06, 0x06, 0x1a];
const DOT: [f32; 3] = [254.0, 241.0, 208.0];

/// Square RGBA8 texture: a dark base scattered with soft cream dots.
///
/// Dots have radius 1.0..3.2 px and opacity 0.5..1.0 and are composited with
/// a one-pixel anti-aliased rim. The same `seed` always yields the same bytes.
pub fn dot_texture(size: u32, dots: u32, seed: u64) -> Vec<u8> {
    let size = size.max(1);
    let mut px = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        px.extend_from_slice(&[BASE[0], BASE[1], BASE[2], 255]);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let extent = size as f32;
    for _ in 0..dots {
        let cx = rng.gen::<f32>() * extent;
        let cy = rng.gen::<f32>() * extent;
        let r = rng.gen::<f32>() * 2.2 + 1.0;
        let alpha = rng.gen::<f32>() * 0.5 + 0.5;

        let x0 = (cx - r - 1.0).floor().max(0.0) as u32;
        let y0 = (cy - r - 1.0).floor().max(0.0) as u32;
        let x1 = ((cx + r + 1.0).ceil() as u32).min(size - 1);
        let y1 = ((cy + r + 1.0).ceil() as u32).min(size - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let coverage = (r + 0.5 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let a = coverage * alpha;
                let i = ((y * size + x) * 4) as usize;
                for c in 0..3 {
                    let dst = px[i + c] as f32;
                    px[i + c] = (dst + (DOT[c] - dst) * a).round() as u8;
                }
            }
        }
    }
    px
}
