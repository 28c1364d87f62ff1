//! Uniform blocks for the scene's shading programs.
//!
//! Each material gets its own `#[repr(C)]` struct naming every value its
//! WGSL program reads, laid out to match the WGSL declaration (16-byte rows).
//! Group 0 is always [`SceneUniforms`]; group 1 is the material block.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// xyz camera position, w simulated time.
    pub camera_pos: [f32; 4],
    /// rgb fog color, a exp2 fog density.
    pub fog: [f32; 4],
    /// rgb ambient light, a unused.
    pub ambient: [f32; 4],
    /// surface width/height in physical px, pixel ratio, unused.
    pub resolution: [f32; 4],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        let ambient = Vec3::from(AMBIENT_COLOR) * AMBIENT_INTENSITY;
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: CAMERA_BASE.extend(0.0).to_array(),
            fog: Vec3::from(FOG_COLOR).extend(FOG_DENSITY_BASE).to_array(),
            ambient: ambient.extend(0.0).to_array(),
            resolution: [1.0, 1.0, 1.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyUniforms {
    pub time: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainUniforms {
    /// Smoothed pointer in NDC.
    pub pointer: [f32; 2],
    pub time: f32,
    /// World-space height of the undisplaced grid.
    pub origin_y: f32,
    /// xyz unit light direction, w unused.
    pub light_dir: [f32; 4],
    /// rgb distance fog color, a unused.
    pub fog_color: [f32; 4],
    /// near/far of the distance fog ramp, normal epsilon, unused.
    pub fog_range: [f32; 4],
}

impl Default for TerrainUniforms {
    fn default() -> Self {
        Self {
            pointer: [0.0, 0.0],
            time: 0.0,
            origin_y: TERRAIN_ORIGIN_Y,
            light_dir: TERRAIN_LIGHT_DIR.normalize().extend(0.0).to_array(),
            fog_color: Vec3::from(TERRAIN_FOG_COLOR).extend(0.0).to_array(),
            fog_range: [TERRAIN_FOG_NEAR, TERRAIN_FOG_FAR, TERRAIN_NORMAL_EPSILON, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub pointer: [f32; 2],
    pub wind: [f32; 2],
    pub time: f32,
    pub pixel_ratio: f32,
    pub _pad: [f32; 2],
}

impl Default for ParticleUniforms {
    fn default() -> Self {
        Self {
            pointer: [0.0, 0.0],
            wind: [0.0, 0.0],
            time: 0.0,
            pixel_ratio: 1.0,
            _pad: [0.0; 2],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FigureUniforms {
    pub model: [[f32; 4]; 4],
    pub uv_repeat: [f32; 2],
    pub _pad: [f32; 2],
}

impl Default for FigureUniforms {
    fn default() -> Self {
        Self {
            model: figure_model_matrix().to_cols_array_2d(),
            uv_repeat: FIGURE_UV_REPEAT,
            _pad: [0.0; 2],
        }
    }
}

/// Local-to-world transform of the figure group.
pub fn figure_model_matrix() -> Mat4 {
    Mat4::from_translation(FIGURE_POSITION) * Mat4::from_scale(Vec3::splat(FIGURE_SCALE))
}

/// Uniform state for the whole composition, rewritten once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialSet {
    pub scene: SceneUniforms,
    pub sky: SkyUniforms,
    pub terrain: TerrainUniforms,
    pub particles: ParticleUniforms,
    pub figure: FigureUniforms,
}

impl MaterialSet {
    pub fn set_time(&mut self, time: f32) {
        self.scene.camera_pos[3] = time;
        self.sky.time = time;
        self.terrain.time = time;
        self.particles.time = time;
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.terrain.pointer = pointer.to_array();
        self.particles.pointer = pointer.to_array();
    }

    pub fn set_wind(&mut self, wind: Vec2) {
        self.particles.wind = wind.to_array();
    }
}
