pub mod cloth;
pub mod error;
pub mod materials;
pub mod mesh;
pub mod noise;
pub mod particles;
pub mod rig;
pub mod scene;
pub mod silhouette;
pub mod sky;
pub mod state;
pub mod supervisor;
pub mod terrain;
pub mod texture;

pub use error::SceneError;
pub use scene::{ElementKind, Scene, SceneConfig, Viewport};
pub use supervisor::{FrameDriver, FrameSupervisor, Tick};

// Shaders bundled as string constants; every program gets the shared scene
// block and the noise library ahead of its own stages.
pub static SKY_WGSL: &str = concat!(
    include_str!("../../shaders/common.wgsl"),
    include_str!("../../shaders/noise.wgsl"),
    include_str!("../../shaders/sky.wgsl"),
);
pub static TERRAIN_WGSL: &str = concat!(
    include_str!("../../shaders/common.wgsl"),
    include_str!("../../shaders/noise.wgsl"),
    include_str!("../../shaders/terrain.wgsl"),
);
pub static PARTICLES_WGSL: &str = concat!(
    include_str!("../../shaders/common.wgsl"),
    include_str!("../../shaders/noise.wgsl"),
    include_str!("../../shaders/particles.wgsl"),
);
pub static FIGURE_WGSL: &str = concat!(
    include_str!("../../shaders/common.wgsl"),
    include_str!("../../shaders/figure.wgsl"),
);

/// Cubic Hermite ramp from 0 at `e0` to 1 at `e1`, as in WGSL.
#[inline]
pub(crate) fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
