//! Mutable per-canvas state: the simulated clock and the two external signals.

use glam::Vec2;

use super::rig::{step_wind, PointerState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    time: f32,
    scroll_progress: f32,
    pointer: PointerState,
    wind: Vec2,
    disposed: bool,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a clamped scroll progress for the next frame. NaN reads as 0.
    pub fn set_scroll(&mut self, progress: f32) {
        if self.disposed {
            return;
        }
        self.scroll_progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    pub fn set_pointer_target(&mut self, target: Vec2) {
        if self.disposed {
            return;
        }
        self.pointer.set_target(target);
    }

    /// Advance the clock and both input filters by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        let dt = dt.max(0.0);
        self.time += dt;
        self.pointer.step(dt);
        self.wind = step_wind(self.wind, self.pointer.current, dt);
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.current
    }

    pub fn pointer_target(&self) -> Vec2 {
        self.pointer.target
    }

    pub fn wind(&self) -> Vec2 {
        self.wind
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
