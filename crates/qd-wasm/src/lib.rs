//! WASM bridge for QD: exposes the diagram engine to JavaScript.
//!
//! The host page translates DOM pointer events into canvas coordinates and
//! forwards them here; every change is redrawn to the canvas immediately.

mod render2d;

use qd_editor::{Diagram, Modifiers};
use qd_render::{Frame, Theme, render_svg};
use render2d::Canvas2dRenderer;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
#[wasm_bindgen]
pub struct QdCanvas {
    diagram: Diagram<Canvas2dRenderer>,
}

#[wasm_bindgen]
impl QdCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        let mut diagram = Diagram::new(Canvas2dRenderer::new(ctx, width, height));
        diagram.render();
        Self { diagram }
    }

    /// Add a shape (`rect`, `ellipse`, `circle`, `arrow`). Returns its id.
    pub fn add_shape(
        &mut self,
        kind: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &str,
    ) -> Result<f64, JsValue> {
        self.diagram
            .add_shape_named(kind, x, y, width, height, color)
            .map(|id| id.get() as f64)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear_shapes(&mut self) {
        self.diagram.clear_shapes();
    }

    /// Returns true if the surface was redrawn.
    pub fn handle_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        self.diagram.pointer_down(x, y, modifiers(shift, ctrl, alt, meta))
    }

    pub fn handle_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        self.diagram.pointer_move(x, y, modifiers(shift, ctrl, alt, meta))
    }

    pub fn handle_pointer_up(
        &mut self,
        x: f32,
        y: f32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        self.diagram.pointer_up(x, y, modifiers(shift, ctrl, alt, meta))
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.diagram.pointer_leave()
    }

    /// CSS cursor keyword for the position.
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.diagram.cursor_at(x, y).as_css().to_string()
    }

    pub fn selected_count(&self) -> usize {
        self.diagram.selection_len()
    }

    /// Scene snapshot as a JSON array of shapes.
    pub fn shapes_json(&self) -> String {
        serde_json::to_string(self.diagram.scene().shapes()).unwrap_or_else(|e| {
            log::warn!("shapes_json: {e}");
            "[]".to_string()
        })
    }

    /// Current frame as a standalone SVG document.
    pub fn render_svg(&self) -> String {
        let r = self.diagram.renderer();
        let frame = Frame {
            shapes: self.diagram.scene().shapes(),
            marquee: self.diagram.marquee_rect(),
        };
        render_svg(&frame, &r.theme, r.width, r.height)
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.diagram.renderer_mut().theme = if is_dark { Theme::dark() } else { Theme::light() };
        self.diagram.render();
    }

    /// Apply a theme given as JSON. Missing fields take light defaults.
    /// Returns `false` and keeps the current theme on parse error.
    pub fn set_theme_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Theme>(json) {
            Ok(theme) => {
                self.diagram.renderer_mut().theme = theme;
                self.diagram.render();
                true
            }
            Err(e) => {
                log::warn!("set_theme_json: {e}");
                false
            }
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let r = self.diagram.renderer_mut();
        r.width = width;
        r.height = height;
        self.diagram.render();
    }

    pub fn render(&mut self) {
        self.diagram.render();
    }
}

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("QD WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
