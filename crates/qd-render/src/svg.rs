//! SVG output.
//!
//! Produces a standalone `<svg>` document for a frame. Handy for previews,
//! snapshots, and headless hosts that cannot draw to a canvas.

use crate::paint::{arrow_head, handle_marks, marquee_rect, shape_path};
use crate::theme::Theme;
use crate::{Frame, Renderer};
use qd_core::{SelectionMode, Shape, ShapeKind};
use std::fmt::Write;

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn mode_attr(mode: SelectionMode) -> &'static str {
    match mode {
        SelectionMode::None => "none",
        SelectionMode::Direct => "direct",
        SelectionMode::Box => "box",
    }
}

/// Render one frame to an SVG document of the given size.
pub fn render_svg(frame: &Frame<'_>, theme: &Theme, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        escape_attr(&theme.background)
    );

    for shape in frame.shapes {
        write_shape(&mut out, shape, theme);
    }

    if let Some(m) = frame.marquee {
        let r = marquee_rect(&m);
        let _ = writeln!(
            out,
            r#"  <rect class="marquee" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1" stroke-dasharray="{dash} {dash}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            escape_attr(&theme.marquee_fill),
            escape_attr(&theme.marquee_stroke),
            dash = theme.marquee_dash,
        );
    }

    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape, theme: &Theme) {
    let selected = shape.is_selected();
    let (stroke, stroke_width) = theme.stroke_for(selected);
    let d = shape_path(shape).to_svg();
    let id = shape.id.get();
    let kind = shape.kind();
    let mode = mode_attr(shape.selection_mode());
    log::trace!("SVG {kind} {} selection={mode}", shape.id);

    match kind {
        ShapeKind::Rectangle | ShapeKind::Ellipse => {
            let fill = theme.fill_for(&shape.color, selected);
            let _ = writeln!(
                out,
                r#"  <path data-id="{id}" data-kind="{kind}" data-selection="{mode}" d="{d}" fill="{}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                escape_attr(&fill),
                escape_attr(stroke),
            );
        }
        ShapeKind::Arrow => {
            // Arrows are line art: the shape color strokes the shaft unless
            // the selection outline takes over.
            let color = if selected { stroke } else { shape.color.as_str() };
            let color = escape_attr(color);
            let _ = writeln!(
                out,
                r#"  <path data-id="{id}" data-kind="{kind}" data-selection="{mode}" d="{d}" fill="none" stroke="{color}" stroke-width="{stroke_width}"/>"#,
            );
            if let Some(head) = arrow_head(shape) {
                let _ = writeln!(
                    out,
                    r#"  <path data-head="{id}" d="{}" fill="{color}" stroke="{color}" stroke-width="{stroke_width}"/>"#,
                    head.to_svg(),
                );
            }
        }
    }

    for mark in handle_marks(shape) {
        let _ = writeln!(
            out,
            r#"  <path class="handle" d="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            mark.path().to_svg(),
            escape_attr(&theme.handle_fill),
            escape_attr(&theme.handle_stroke),
        );
    }
}

/// Renderer that keeps the SVG of the last frame.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
    last: String,
    frames: usize,
}

impl SvgRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            theme: Theme::default(),
            width,
            height,
            last: String::new(),
            frames: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// SVG of the most recent frame (empty before the first render).
    pub fn svg(&self) -> &str {
        &self.last
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.last = render_svg(frame, &self.theme, self.width, self.height);
        self.frames += 1;
    }
}
