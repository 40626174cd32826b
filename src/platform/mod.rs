//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held-key set, interpreted into tick directives)
//! - Frame scheduling (hosts that drive one tick per display frame)

pub mod host;
pub mod input;

pub use host::{FrameHost, ScriptedHost};
pub use input::{HeldKeys, Key};
