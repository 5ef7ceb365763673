//! Shape → kurbo outlines.
//!
//! Both the SVG renderer and the canvas bridge draw from these paths, so
//! the two backends agree on arrow heads and handle placement.

use kurbo::{BezPath, Circle, Ellipse, Line, Point, Rect, Shape as _, Vec2};
use qd_core::{ARROW_HEAD_SIZE, Geometry, HANDLE_SIZE, Handle, SelectionMode, Shape};

/// Flattening tolerance for curved outlines.
const TOLERANCE: f64 = 0.1;

/// Half-angle between the shaft and each arrow-head barb.
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

fn pt(p: qd_core::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

fn rect(r: &qd_core::Rect) -> Rect {
    Rect::new(
        r.x as f64,
        r.y as f64,
        (r.x + r.width) as f64,
        (r.y + r.height) as f64,
    )
}

/// Outline of the shape body. Arrows yield their shaft.
pub fn shape_path(shape: &Shape) -> BezPath {
    match &shape.geometry {
        Geometry::Rectangle(r) => rect(r).to_path(TOLERANCE),
        Geometry::Ellipse(r) => {
            let kr = rect(r);
            Ellipse::from_rect(kr).to_path(TOLERANCE)
        }
        Geometry::Arrow { start, end } => Line::new(pt(*start), pt(*end)).to_path(TOLERANCE),
    }
}

/// Closed triangle at the arrow tip. `None` for box shapes and for
/// zero-length arrows, which have no direction.
pub fn arrow_head(shape: &Shape) -> Option<BezPath> {
    let (start, end) = shape.endpoints()?;
    let (start, end) = (pt(start), pt(end));
    let dir: Vec2 = end - start;
    if dir.hypot() == 0.0 {
        return None;
    }
    let angle = dir.y.atan2(dir.x);
    let size = ARROW_HEAD_SIZE as f64;
    let barb = |offset: f64| {
        let a = angle + offset;
        end - Vec2::new(size * a.cos(), size * a.sin())
    };

    let mut head = BezPath::new();
    head.move_to(end);
    head.line_to(barb(-ARROW_HEAD_ANGLE));
    head.line_to(barb(ARROW_HEAD_ANGLE));
    head.close_path();
    Some(head)
}

/// A resize handle as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleMark {
    Square(Handle, Rect),
    Circle(Handle, Circle),
}

impl HandleMark {
    pub fn path(&self) -> BezPath {
        match self {
            HandleMark::Square(_, r) => r.to_path(TOLERANCE),
            HandleMark::Circle(_, c) => c.to_path(TOLERANCE),
        }
    }
}

/// Handles to draw for `shape`: corners for box shapes, endpoint circles
/// for arrows, nothing unless the shape is the direct selection.
pub fn handle_marks(shape: &Shape) -> Vec<HandleMark> {
    if shape.selection_mode() != SelectionMode::Direct {
        return Vec::new();
    }
    let size = HANDLE_SIZE as f64;
    match &shape.geometry {
        Geometry::Rectangle(r) | Geometry::Ellipse(r) => {
            let b = rect(r);
            let corners = [
                (Handle::TopLeft, Point::new(b.x0, b.y0)),
                (Handle::TopRight, Point::new(b.x1, b.y0)),
                (Handle::BottomRight, Point::new(b.x1, b.y1)),
                (Handle::BottomLeft, Point::new(b.x0, b.y1)),
            ];
            corners
                .into_iter()
                .map(|(h, c)| HandleMark::Square(h, Rect::from_center_size(c, (size, size))))
                .collect()
        }
        Geometry::Arrow { start, end } => vec![
            HandleMark::Circle(Handle::Start, Circle::new(pt(*start), size / 2.0)),
            HandleMark::Circle(Handle::End, Circle::new(pt(*end), size / 2.0)),
        ],
    }
}

/// Marquee rectangle in kurbo space.
pub fn marquee_rect(r: &qd_core::Rect) -> Rect {
    rect(r)
}
