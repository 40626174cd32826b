//! Presentation module
//!
//! The simulation emits a flat list of fill commands; the canvas presenter
//! (web only) draws them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;

pub use draw::{Color, DrawCommand, Frame, build_frame, palette};
