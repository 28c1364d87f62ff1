//! Camera rig and input smoothing.
//!
//! All filters use the frame-rate independent blend `1 - base^dt`: after a
//! total of `T` simulated seconds the remaining error is `base^T` no matter
//! how those seconds were split into frames.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::*;

/// Blend factor that moves a value `1 - base^dt` of the way to its target.
#[inline]
pub fn smoothing_factor(base: f32, dt: f32) -> f32 {
    1.0 - base.powf(dt.max(0.0))
}

/// Map window client coordinates to [-1, 1] x [-1, 1], y up.
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
    .clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Linear fog density for a scroll progress in [0, 1].
#[inline]
pub fn fog_density(scroll: f32) -> f32 {
    FOG_DENSITY_BASE + scroll * FOG_DENSITY_SCROLL
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
}

impl PointerState {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn step(&mut self, dt: f32) {
        let k = smoothing_factor(POINTER_SMOOTHING_BASE, dt);
        self.current += (self.target - self.current) * k;
    }
}

/// Second, slower low-pass over the smoothed pointer. `x` drives lateral
/// sway, `y` is the depth (z) component.
#[inline]
pub fn step_wind(wind: Vec2, pointer: Vec2, dt: f32) -> Vec2 {
    let k = smoothing_factor(WIND_SMOOTHING_BASE, dt);
    let target = Vec2::new(pointer.x * WIND_POINTER_X, pointer.y * WIND_POINTER_Z);
    wind + (target - wind) * k
}

/// Perspective camera whose position drifts toward a scroll/pointer driven target.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    base: Vec3,
    look_base: Vec3,
    position: Vec3,
    look_at: Vec3,
    aspect: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            base: CAMERA_BASE,
            look_base: CAMERA_LOOK_TARGET,
            position: CAMERA_BASE,
            look_at: CAMERA_LOOK_TARGET,
            aspect: sanitize_aspect(aspect),
        }
    }

    pub fn base(&self) -> Vec3 {
        self.base
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Where the camera wants to be: base + idle sway + parallax + dolly.
    pub fn target_position(&self, time: f32, pointer: Vec2, scroll: f32) -> Vec3 {
        let sway_x = (time * SWAY_X_FREQ).sin() * SWAY_X_AMP;
        let sway_y = (time * SWAY_Y_FREQ).cos() * SWAY_Y_AMP;
        let px = pointer.x * PARALLAX_X;
        let py = pointer.y * PARALLAX_Y;
        let dolly_z = self.base.z - scroll * DOLLY_Z_SPAN;
        let dolly_y = self.base.y - scroll * DOLLY_Y_SPAN;
        Vec3::new(
            self.base.x + px + sway_x,
            (dolly_y + sway_y + py * PARALLAX_Y_HEIGHT_SCALE).max(CAMERA_MIN_Y),
            dolly_z,
        )
    }

    pub fn target_look_at(&self, pointer: Vec2) -> Vec3 {
        self.look_base + Vec3::new(pointer.x * LOOK_POINTER_X, pointer.y * LOOK_POINTER_Y, 0.0)
    }

    /// Advance one frame. `time` is the already-advanced simulated clock.
    pub fn update(&mut self, time: f32, dt: f32, pointer: Vec2, scroll: f32) {
        let target = self.target_position(time, pointer, scroll);
        let k = smoothing_factor(CAMERA_SMOOTHING_BASE, dt);
        self.position = self.position.lerp(target, k);
        self.look_at = self.target_look_at(pointer);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_Y_DEGREES.to_radians(),
            self.aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
