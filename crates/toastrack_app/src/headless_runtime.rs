//! Headless frame loop for deterministic toast runs.

use anyhow::{bail, Result};
use std::time::Duration;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    /// Logical time at the start of this frame
    pub elapsed_ms: u64,
    pub dt: Duration,
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget in headless mode.
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext),
    {
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        for frame in 0..cfg.max_frames {
            on_frame(&HeadlessContext {
                frame_index: frame,
                elapsed_ms: cfg.tick_ms.saturating_mul(frame as u64),
                dt: cfg.tick(),
            });
        }

        Ok(())
    }
}
