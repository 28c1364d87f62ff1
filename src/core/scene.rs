//! Host-side composition of the hero scene.
//!
//! `Scene` owns everything that is not a GPU handle: geometry for the four
//! visual elements, the cloth rest pose, the particle attributes, the camera
//! rig, and the uniform blocks for every material. The renderer reads it once
//! per frame; nothing here touches the DOM or wgpu.

use glam::Vec2;

use super::cloth::{self, ClothRestPose};
use super::error::SceneError;
use super::materials::MaterialSet;
use super::mesh::Mesh;
use super::particles::{self, ParticleAttributes};
use super::rig::{self, CameraRig};
use super::silhouette;
use super::sky;
use super::state::SceneState;
use super::terrain;
use super::texture;
use crate::constants::*;

/// Host-tunable knobs. Everything else is a named constant.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: u32,
    pub particle_seed: u64,
    pub texture_seed: u64,
    pub max_pixel_ratio: f64,
    pub clear_color: [f64; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_seed: PARTICLE_SEED,
            texture_seed: PARTICLE_SEED ^ 0xD07,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            clear_color: CLEAR_COLOR,
        }
    }
}

/// Window-sized drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at `max_pixel_ratio` and floored at 1.
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, max_pixel_ratio.max(1.0))
        } else {
            1.0
        };
        Self {
            css_width: css_width.max(1.0) as f32,
            css_height: css_height.max(1.0) as f32,
            pixel_ratio: dpr as f32,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.css_width / self.css_height
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            ((self.css_width * self.pixel_ratio) as u32).max(1),
            ((self.css_height * self.pixel_ratio) as u32).max(1),
        )
    }
}

/// The four visual elements, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Sky,
    Terrain,
    Figure,
    Particles,
}

impl ElementKind {
    pub const DRAW_ORDER: [ElementKind; 4] = [
        ElementKind::Sky,
        ElementKind::Terrain,
        ElementKind::Figure,
        ElementKind::Particles,
    ];
}

pub struct Scene {
    config: SceneConfig,
    state: SceneState,
    rig: CameraRig,
    viewport: Viewport,
    sky: Mesh,
    terrain: Mesh,
    figure_body: Mesh,
    skirt: Mesh,
    skirt_rest: ClothRestPose,
    particles: Vec<ParticleAttributes>,
    dot_texture: Vec<u8>,
    materials: MaterialSet,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, SceneError> {
        let figure = silhouette::build_figure(FIGURE_DEPTH, FIGURE_CURVE_TOLERANCE)?;
        let skirt_rest = ClothRestPose::capture(&figure.skirt.vertices);
        let particles = particles::scatter(config.particle_count, config.particle_seed);
        let dot_texture = texture::dot_texture(DOT_TEXTURE_SIZE, DOT_TEXTURE_DOTS, config.texture_seed);

        let mut scene = Self {
            state: SceneState::new(),
            rig: CameraRig::new(viewport.aspect()),
            viewport,
            sky: sky::dome(SKY_RADIUS, SKY_WIDTH_SEGMENTS, SKY_HEIGHT_SEGMENTS),
            terrain: terrain::grid(TERRAIN_SIZE, TERRAIN_SEGMENTS),
            figure_body: figure.body,
            skirt: figure.skirt,
            skirt_rest,
            particles,
            dot_texture,
            materials: MaterialSet::default(),
            config,
        };
        scene.sync_uniforms();
        log::debug!(
            "[scene] built: sky={}v terrain={}v body={}v skirt={}v particles={}",
            scene.sky.vertex_count(),
            scene.terrain.vertex_count(),
            scene.figure_body.vertex_count(),
            scene.skirt.vertex_count(),
            scene.particles.len()
        );
        Ok(scene)
    }

    pub fn set_scroll(&mut self, progress: f32) {
        self.state.set_scroll(progress);
    }

    pub fn set_pointer_target(&mut self, ndc: Vec2) {
        self.state.set_pointer_target(ndc);
    }

    /// Feed a raw pointer position in window client coordinates.
    pub fn set_pointer_client(&mut self, client_x: f32, client_y: f32) {
        let ndc = rig::normalize_pointer(
            client_x,
            client_y,
            self.viewport.css_width,
            self.viewport.css_height,
        );
        self.state.set_pointer_target(ndc);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.state.is_disposed() {
            return;
        }
        self.viewport = viewport;
        self.rig.set_aspect(viewport.aspect());
    }

    /// Advance one frame: clock, filters, camera, cloth, uniforms.
    ///
    /// `dt` is capped at `MAX_FRAME_DT`; non-finite values count as zero.
    pub fn update(&mut self, dt: f32) {
        if self.state.is_disposed() {
            return;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.state.advance(dt);
        let time = self.state.time();
        self.rig
            .update(time, dt, self.state.pointer(), self.state.scroll_progress());
        cloth::displace(&self.skirt_rest, time, self.state.wind(), &mut self.skirt.vertices);
        self.sync_uniforms();
    }

    pub fn dispose(&mut self) {
        self.state.dispose();
    }

    fn sync_uniforms(&mut self) {
        let (w, h) = self.viewport.physical_size();
        let m = &mut self.materials;
        m.scene.view_proj = self.rig.view_proj().to_cols_array_2d();
        m.scene.view = self.rig.view_matrix().to_cols_array_2d();
        let eye = self.rig.position();
        m.scene.camera_pos = [eye.x, eye.y, eye.z, self.state.time()];
        m.scene.fog[3] = rig::fog_density(self.state.scroll_progress());
        m.scene.resolution = [w as f32, h as f32, self.viewport.pixel_ratio, 0.0];
        m.set_time(self.state.time());
        m.set_pointer(self.state.pointer());
        m.set_wind(self.state.wind());
        m.particles.pixel_ratio = self.viewport.pixel_ratio;
    }

    pub fn fog_density(&self) -> f32 {
        self.materials.scene.fog[3]
    }

    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mesh(&self, kind: ElementKind) -> Option<&Mesh> {
        match kind {
            ElementKind::Sky => Some(&self.sky),
            ElementKind::Terrain => Some(&self.terrain),
            ElementKind::Figure => Some(&self.figure_body),
            ElementKind::Particles => None,
        }
    }

    /// The cloth mesh as displaced by the latest `update`.
    pub fn skirt(&self) -> &Mesh {
        &self.skirt
    }

    pub fn skirt_rest(&self) -> &ClothRestPose {
        &self.skirt_rest
    }

    pub fn particles(&self) -> &[ParticleAttributes] {
        &self.particles
    }

    pub fn dot_texture(&self) -> &[u8] {
        &self.dot_texture
    }

    pub fn materials(&self) -> &MaterialSet {
        &self.materials
    }
}
