//! Frame hosts
//!
//! Something outside the simulation decides when a frame happens: the
//! browser's animation-frame callback, or a plain loop in headless runs.
//! A host supplies the held keys and consumes the resulting frame.

use super::input::HeldKeys;
use crate::renderer::Frame;

/// The scheduler/presentation seam around [`crate::Game::run_frame`]
pub trait FrameHost {
    /// Keys held at the moment the frame starts
    fn held_keys(&self) -> &HeldKeys;

    /// Show the finished frame
    fn present(&mut self, frame: &Frame);
}

/// Headless host replaying a fixed key script, one entry per frame
#[derive(Debug, Default)]
pub struct ScriptedHost {
    script: Vec<HeldKeys>,
    /// Returned once the script runs out
    idle: HeldKeys,
    presented: usize,
    last_frame: Option<Frame>,
}

impl ScriptedHost {
    pub fn new(script: Vec<HeldKeys>) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Frames presented so far
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Frames left in the script
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.presented)
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

impl FrameHost for ScriptedHost {
    fn held_keys(&self) -> &HeldKeys {
        self.script.get(self.presented).unwrap_or(&self.idle)
    }

    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
    }
}
