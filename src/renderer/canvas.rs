//! Canvas 2D presenter (WASM only)
//!
//! Replays a [`Frame`] onto a `CanvasRenderingContext2d` and pushes the HUD
//! text into the page.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::draw::{DrawCommand, Frame};

/// Owns the 2D context of the game canvas
pub struct CanvasPresenter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasPresenter {
    /// Attach to the canvas element with the given id
    pub fn attach(document: &Document, canvas_id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw every command in order
    pub fn present(&self, frame: &Frame) {
        for command in &frame.commands {
            match command {
                DrawCommand::Clear => self.ctx.clear_rect(0.0, 0.0, self.width, self.height),
                DrawCommand::FillRect { rect, color } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.fill_rect(
                        rect.pos.x as f64,
                        rect.pos.y as f64,
                        rect.size.x as f64,
                        rect.size.y as f64,
                    );
                }
            }
        }
    }
}

/// Update the score and message elements
pub fn update_hud(document: &Document, frame: &Frame) {
    if let Some(el) = document.get_element_by_id("score") {
        el.set_text_content(Some(&frame.hud_text));
    }
    if let Some(el) = document.get_element_by_id("message") {
        el.set_text_content(Some(frame.message.as_deref().unwrap_or("")));
    }
}
