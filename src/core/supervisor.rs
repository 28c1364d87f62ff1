//! Fail-soft frame supervision: catch, log, reschedule.

use super::error::SceneError;
use crate::constants::FRAME_ERROR_LOG_EVERY;

/// One schedulable unit of per-frame work.
pub trait FrameDriver {
    fn is_disposed(&self) -> bool;
    /// True once the driver can never produce a frame, e.g. no GPU.
    fn is_inert(&self) -> bool {
        false
    }
    fn update(&mut self, dt: f32) -> Result<(), SceneError>;
    fn draw(&mut self) -> Result<(), SceneError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Schedule another frame.
    Continue,
    /// The driver is disposed or inert; schedule nothing further.
    Stop,
}

/// Runs frames so that a failing frame never ends the loop.
#[derive(Debug, Default)]
pub struct FrameSupervisor {
    frames: u64,
    failures: u64,
    consecutive_failures: u32,
}

impl FrameSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick<D: FrameDriver + ?Sized>(&mut self, driver: &mut D, dt: f32) -> Tick {
        if driver.is_disposed() || driver.is_inert() {
            return Tick::Stop;
        }
        self.frames += 1;
        match driver.update(dt).and_then(|()| driver.draw()) {
            Ok(()) => {
                if self.consecutive_failures > 0 {
                    log::info!(
                        "[frame] recovered after {} failed frame(s)",
                        self.consecutive_failures
                    );
                }
                self.consecutive_failures = 0;
            }
            Err(e) => {
                if self.consecutive_failures % FRAME_ERROR_LOG_EVERY == 0 {
                    log::error!(
                        "[frame] {} (frame {}, {} consecutive)",
                        e,
                        self.frames,
                        self.consecutive_failures + 1
                    );
                }
                self.failures += 1;
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            }
        }
        Tick::Continue
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
