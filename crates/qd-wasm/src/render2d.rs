//! Canvas2D renderer.
//!
//! Draws frames to an HTML `<canvas>` via `CanvasRenderingContext2d`,
//! tracing the same kurbo outlines the SVG renderer uses.

use kurbo::{BezPath, PathEl};
use qd_core::{Shape, ShapeKind};
use qd_render::paint::{arrow_head, handle_marks, marquee_rect, shape_path};
use qd_render::{Frame, Renderer, Theme};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dRenderer {
    ctx: CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
}

impl Canvas2dRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self {
            ctx,
            width,
            height,
            theme: Theme::default(),
        }
    }
}

impl Renderer for Canvas2dRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(&self.theme.background);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for shape in frame.shapes {
            draw_shape(ctx, shape, &self.theme);
        }

        if let Some(m) = frame.marquee {
            draw_marquee(ctx, &m, &self.theme);
        }
    }
}

fn trace(ctx: &CanvasRenderingContext2d, path: &BezPath) {
    ctx.begin_path();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            PathEl::QuadTo(c, p) => ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
            PathEl::CurveTo(c1, c2, p) => ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, theme: &Theme) {
    let selected = shape.is_selected();
    let (stroke, line_width) = theme.stroke_for(selected);
    let body = shape_path(shape);
    ctx.set_line_width(line_width);

    match shape.kind() {
        ShapeKind::Rectangle | ShapeKind::Ellipse => {
            trace(ctx, &body);
            ctx.set_fill_style_str(&theme.fill_for(&shape.color, selected));
            ctx.fill();
            ctx.set_stroke_style_str(stroke);
            ctx.stroke();
        }
        ShapeKind::Arrow => {
            let color = if selected { stroke } else { shape.color.as_str() };
            ctx.set_stroke_style_str(color);
            ctx.set_fill_style_str(color);
            trace(ctx, &body);
            ctx.stroke();
            if let Some(head) = arrow_head(shape) {
                trace(ctx, &head);
                ctx.fill();
                ctx.stroke();
            }
        }
    }

    let marks = handle_marks(shape);
    if !marks.is_empty() {
        ctx.set_fill_style_str(&theme.handle_fill);
        ctx.set_stroke_style_str(&theme.handle_stroke);
        ctx.set_line_width(1.0);
        for mark in marks {
            trace(ctx, &mark.path());
            ctx.fill();
            ctx.stroke();
        }
    }
}

fn draw_marquee(ctx: &CanvasRenderingContext2d, m: &qd_core::Rect, theme: &Theme) {
    let r = marquee_rect(m);
    ctx.save();
    ctx.set_fill_style_str(&theme.marquee_fill);
    ctx.fill_rect(r.x0, r.y0, r.width(), r.height());
    ctx.set_stroke_style_str(&theme.marquee_stroke);
    ctx.set_line_width(1.0);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(
        &JsValue::from_f64(theme.marquee_dash),
        &JsValue::from_f64(theme.marquee_dash),
    ));
    ctx.stroke_rect(r.x0, r.y0, r.width(), r.height());
    ctx.restore();
}
