use glam::Vec3;

// Shared tuning constants for the hero scene.

// Camera
pub const CAMERA_BASE: Vec3 = Vec3::new(0.0, 5.0, 24.0);
pub const CAMERA_LOOK_TARGET: Vec3 = Vec3::new(0.0, 2.2, -8.0);
pub const CAMERA_FOV_Y_DEGREES: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 600.0;
pub const CAMERA_MIN_Y: f32 = 1.5; // floor applied to the camera target height

// Idle sway (two out-of-phase sinusoids)
pub const SWAY_X_FREQ: f32 = 0.15;
pub const SWAY_X_AMP: f32 = 0.05;
pub const SWAY_Y_FREQ: f32 = 0.11;
pub const SWAY_Y_AMP: f32 = 0.025;

// Pointer parallax
pub const PARALLAX_X: f32 = 1.0;
pub const PARALLAX_Y: f32 = 0.5;
pub const PARALLAX_Y_HEIGHT_SCALE: f32 = 0.2;
pub const LOOK_POINTER_X: f32 = 0.4;
pub const LOOK_POINTER_Y: f32 = 0.2;

// Scroll dolly, linear in scroll progress
pub const DOLLY_Z_SPAN: f32 = 20.0;
pub const DOLLY_Y_SPAN: f32 = 2.5;

// Fog
pub const FOG_DENSITY_BASE: f32 = 0.007;
pub const FOG_DENSITY_SCROLL: f32 = 0.015;
pub const FOG_COLOR: [f32; 3] = [0.039, 0.157, 0.439]; // #0A2870

// Frame-rate independent smoothing: factor = 1 - base^dt
pub const POINTER_SMOOTHING_BASE: f32 = 0.02;
pub const CAMERA_SMOOTHING_BASE: f32 = 0.03;
// 1.2% per frame at 60 fps, expressed per second
pub const WIND_SMOOTHING_BASE: f32 = 0.4847;
pub const WIND_POINTER_X: f32 = 0.2;
pub const WIND_POINTER_Z: f32 = 0.12;

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.05;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const FRAME_ERROR_LOG_EVERY: u32 = 120;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.004, 0.051, 0.431]; // #010D6E

// Lighting
pub const AMBIENT_COLOR: [f32; 3] = [0.039, 0.102, 0.416]; // #0A1A6A
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const TERRAIN_LIGHT_DIR: Vec3 = Vec3::new(0.2, 0.35, -0.5);

// Sky dome
pub const SKY_RADIUS: f32 = 250.0;
pub const SKY_WIDTH_SEGMENTS: u32 = 64;
pub const SKY_HEIGHT_SEGMENTS: u32 = 40;

// Terrain
pub const TERRAIN_SIZE: f32 = 100.0;
pub const TERRAIN_SEGMENTS: u32 = 180;
pub const TERRAIN_ORIGIN_Y: f32 = -2.0;
pub const TERRAIN_NORMAL_EPSILON: f32 = 0.6;
pub const TERRAIN_POINTER_SPREAD: f32 = 18.0; // NDC pointer -> world xz
pub const TERRAIN_POINTER_FALLOFF: f32 = 0.03;
pub const TERRAIN_POINTER_HEIGHT: f32 = 0.4;
pub const TERRAIN_FOG_NEAR: f32 = 14.0;
pub const TERRAIN_FOG_FAR: f32 = 55.0;
pub const TERRAIN_FOG_COLOR: [f32; 3] = [0.02, 0.05, 0.28];

// Figure
pub const FIGURE_SCALE: f32 = 1.6;
pub const FIGURE_POSITION: Vec3 = Vec3::new(0.0, -1.6, 2.0);
pub const FIGURE_DEPTH: f32 = 0.3;
pub const FIGURE_CURVE_TOLERANCE: f32 = 0.002;
pub const FIGURE_UV_REPEAT: [f32; 2] = [2.0, 3.0];
pub const DOT_TEXTURE_SIZE: u32 = 512;
pub const DOT_TEXTURE_DOTS: u32 = 320;

// Cloth drapery field
pub const CLOTH_WAISTLINE_Y: f32 = 0.0;
pub const CLOTH_DEPTH_GAIN: f32 = 2.0;
pub const CLOTH_BASE_STRENGTH: f32 = 0.03;
pub const CLOTH_WIND_GAIN: f32 = 0.12;
pub const CLOTH_WIND_DRAG: f32 = 0.2;
pub const CLOTH_SWAY_TIME: f32 = 1.0;
pub const CLOTH_SWAY_Y: f32 = 4.0;
pub const CLOTH_SWAY_X: f32 = 2.5;
pub const CLOTH_RIPPLE_TIME: f32 = 1.5;
pub const CLOTH_RIPPLE_X: f32 = 5.0;
pub const CLOTH_RIPPLE_AMP: f32 = 0.006;

// Particles
pub const PARTICLE_COUNT: u32 = 120;
pub const PARTICLE_SEED: u64 = 0x5EED_D05E;
pub const PARTICLE_SPREAD_XZ: f32 = 80.0;
pub const PARTICLE_MIN_Y: f32 = 1.0;
pub const PARTICLE_SPAN_Y: f32 = 20.0;
pub const PARTICLE_POINTER_SPREAD: f32 = 12.0;
pub const PARTICLE_POINTER_FALLOFF: f32 = 0.05;
pub const PARTICLE_POINTER_PUSH: f32 = 0.03;
pub const PARTICLE_WIND_DRIFT: f32 = 2.0;
pub const PARTICLE_BASE_SIZE: f32 = 12.0;
pub const PARTICLE_SIZE_ATTENUATION: f32 = 200.0;
