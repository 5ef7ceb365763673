//! Shapes on the diagram surface.
//!
//! A shape is a rectangle, an ellipse, or an arrow, plus a fill color and
//! its selection state. Selection state is written only by
//! [`Selection`](crate::Selection) so that the selected flag and the
//! selection set cannot drift apart.

use crate::error::ShapeError;
use crate::geometry::{Geometry, Point, Rect};
use crate::id::ShapeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the square corner handles; arrow handles use half of it as radius.
pub const HANDLE_SIZE: f32 = 8.0;

/// Length of the arrow-head barbs.
pub const ARROW_HEAD_SIZE: f32 = 15.0;

/// Box shapes refuse a resize step that would bring an axis to this size
/// or below.
pub const MIN_SHAPE_SIZE: f32 = 20.0;

// ─── Kind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Arrow,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Arrow => "arrow",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Accepts the short names used by toolbars (`rect`, `circle`) as well
    /// as the full names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(ShapeKind::Rectangle),
            "ellipse" | "circle" => Ok(ShapeKind::Ellipse),
            "arrow" => Ok(ShapeKind::Arrow),
            _ => Err(ShapeError::InvalidShapeKind(s.to_string())),
        }
    }
}

// ─── Selection mode ──────────────────────────────────────────────────────

/// How a shape came to be selected.
///
/// `Direct` is the single click-selected shape and the only mode that shows
/// resize handles. `Box` shapes were swept by a marquee or are part of a
/// multi-selection; they move with the group but cannot be resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    #[default]
    None,
    Direct,
    Box,
}

// ─── Handles ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    /// Arrow tail.
    Start,
    /// Arrow tip.
    End,
}

impl Handle {
    /// Corner test order for box shapes.
    pub const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomRight,
        Handle::BottomLeft,
    ];

    pub fn cursor(&self) -> CursorHint {
        match self {
            Handle::TopLeft | Handle::BottomRight => CursorHint::NwseResize,
            Handle::TopRight | Handle::BottomLeft => CursorHint::NeswResize,
            Handle::Start | Handle::End => CursorHint::Move,
        }
    }
}

/// Cursor the host should show. Presentation is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    NwseResize,
    NeswResize,
}

impl CursorHint {
    /// CSS `cursor` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Move => "move",
            CursorHint::NwseResize => "nwse-resize",
            CursorHint::NeswResize => "nesw-resize",
        }
    }
}

/// A handle found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleHit {
    pub handle: Handle,
    pub cursor: CursorHint,
}

// ─── Shape ───────────────────────────────────────────────────────────────

/// Serialize-only: a shape's selection mode is owned by [`Selection`] and
/// cannot be restored from outside it.
///
/// [`Selection`]: crate::selection::Selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    /// Opaque fill color token, typically a CSS hex color.
    pub color: String,
    selection_mode: SelectionMode,
}

impl Shape {
    /// Build a shape from a bounding box.
    ///
    /// Box shapes with negative extents are normalized. Arrows run from
    /// `(x, y)` to `(x + width, y + height)` and keep their direction.
    pub fn new(
        kind: ShapeKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: impl Into<String>,
    ) -> Result<Self, ShapeError> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(ShapeError::InvalidDimensions {
                x,
                y,
                width,
                height,
            });
        }
        let bounds = Rect::new(x, y, width, height).normalized();
        let geometry = match kind {
            ShapeKind::Rectangle => Geometry::Rectangle(bounds),
            ShapeKind::Ellipse => Geometry::Ellipse(bounds),
            ShapeKind::Arrow => Geometry::Arrow {
                start: Point::new(x, y),
                end: Point::new(x + width, y + height),
            },
        };
        Ok(Self {
            id: ShapeId::next(),
            geometry,
            color: color.into(),
            selection_mode: SelectionMode::None,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Arrow { .. } => ShapeKind::Arrow,
        }
    }

    pub fn x(&self) -> f32 {
        self.origin().x
    }

    pub fn y(&self) -> f32 {
        self.origin().y
    }

    /// Box origin, or the arrow's start point.
    pub fn origin(&self) -> Point {
        match self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => Point::new(r.x, r.y),
            Geometry::Arrow { start, .. } => start,
        }
    }

    /// Box size, or `end - start` for arrows (may be negative).
    pub fn width(&self) -> f32 {
        match self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => r.width,
            Geometry::Arrow { start, end } => end.x - start.x,
        }
    }

    pub fn height(&self) -> f32 {
        match self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => r.height,
            Geometry::Arrow { start, end } => end.y - start.y,
        }
    }

    /// Arrow endpoints; `None` for box shapes.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.geometry {
            Geometry::Arrow { start, end } => Some((start, end)),
            _ => None,
        }
    }

    /// Normalized axis-aligned bounds.
    pub fn bounds(&self) -> Rect {
        match self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => r,
            Geometry::Arrow { start, end } => Rect::from_corners(start, end),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selection_mode != SelectionMode::None
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub(crate) fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection_mode = mode;
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        self.geometry.contains_point(px, py)
    }

    pub fn intersects_box(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> bool {
        self.geometry.intersects_box(x1, y1, x2, y2)
    }

    /// The resize handle under (px, py), if any.
    ///
    /// Only a `Direct` selection exposes handles. Corners are tested in
    /// [`Handle::CORNERS`] order; arrows test start before end.
    pub fn handle_at(&self, px: f32, py: f32) -> Option<HandleHit> {
        if self.selection_mode != SelectionMode::Direct {
            return None;
        }
        let half = HANDLE_SIZE / 2.0;
        let handle = match self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => Handle::CORNERS.into_iter().find(|h| {
                let c = corner(&r, *h);
                (px - c.x).abs() <= half && (py - c.y).abs() <= half
            }),
            Geometry::Arrow { start, end } => {
                let p = Point::new(px, py);
                [(Handle::Start, start), (Handle::End, end)]
                    .into_iter()
                    .find(|(_, at)| p.distance_squared(*at) <= half * half)
                    .map(|(h, _)| h)
            }
        }?;
        Some(HandleHit {
            handle,
            cursor: handle.cursor(),
        })
    }

    /// Translate the shape. Only selected shapes move.
    ///
    /// Returns `false` when the call was ignored.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        if !self.is_selected() {
            return false;
        }
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => {
                r.x += dx;
                r.y += dy;
            }
            Geometry::Arrow { start, end } => {
                *start = start.offset(dx, dy);
                *end = end.offset(dx, dy);
            }
        }
        true
    }

    /// Drag `handle` by (dx, dy). Only a `Direct` selection resizes.
    ///
    /// Box shapes apply each axis independently and drop an axis whose new
    /// size would be at or below [`MIN_SHAPE_SIZE`]. Arrows move the chosen
    /// endpoint with no minimum. A handle that does not belong to the
    /// shape's kind is ignored. Returns `true` when any geometry changed.
    pub fn resize(&mut self, handle: Handle, dx: f32, dy: f32) -> bool {
        if self.selection_mode != SelectionMode::Direct {
            return false;
        }
        match &mut self.geometry {
            Geometry::Rectangle(r) | Geometry::Ellipse(r) => resize_box(r, handle, dx, dy),
            Geometry::Arrow { start, end } => match handle {
                Handle::Start => {
                    *start = start.offset(dx, dy);
                    true
                }
                Handle::End => {
                    *end = end.offset(dx, dy);
                    true
                }
                _ => false,
            },
        }
    }
}

fn corner(r: &Rect, handle: Handle) -> Point {
    match handle {
        Handle::TopLeft => Point::new(r.left(), r.top()),
        Handle::TopRight => Point::new(r.right(), r.top()),
        Handle::BottomRight => Point::new(r.right(), r.bottom()),
        Handle::BottomLeft => Point::new(r.left(), r.bottom()),
        Handle::Start | Handle::End => Point::new(r.x, r.y),
    }
}

fn resize_box(r: &mut Rect, handle: Handle, dx: f32, dy: f32) -> bool {
    // (moves origin, size sign) per axis
    let (horizontal, vertical) = match handle {
        Handle::TopLeft => ((true, -1.0), (true, -1.0)),
        Handle::TopRight => ((false, 1.0), (true, -1.0)),
        Handle::BottomRight => ((false, 1.0), (false, 1.0)),
        Handle::BottomLeft => ((true, -1.0), (false, 1.0)),
        Handle::Start | Handle::End => return false,
    };

    let mut changed = false;
    let new_width = r.width + horizontal.1 * dx;
    if new_width > MIN_SHAPE_SIZE {
        if horizontal.0 {
            r.x += dx;
        }
        r.width = new_width;
        changed |= dx != 0.0;
    }
    let new_height = r.height + vertical.1 * dy;
    if new_height > MIN_SHAPE_SIZE {
        if vertical.0 {
            r.y += dy;
        }
        r.height = new_height;
        changed |= dy != 0.0;
    }
    changed
}
