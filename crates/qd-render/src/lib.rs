//! Renderer capability for QD diagrams.
//!
//! The editor calls a [`Renderer`] once after every event that changed the
//! scene, the selection, or the marquee. A renderer only reads the frame.

pub mod paint;
pub mod svg;
pub mod theme;

pub use svg::{SvgRenderer, render_svg};
pub use theme::Theme;

use qd_core::{Rect, Shape};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Shapes in paint order (first is bottom-most).
    pub shapes: &'a [Shape],
    /// Normalized marquee rectangle while a box selection is in progress.
    pub marquee: Option<Rect>,
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}
