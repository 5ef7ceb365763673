//! Geometry kernel: point-in-shape, shape-vs-box, and segment tests.
//!
//! Everything here is pure. Shapes delegate to these functions; the
//! selection sweep and the pointer hit test both go through them.
//!
//! Marquee boxes may be given in any corner order; they are normalized
//! with min/max before testing. Degenerate geometry (zero-length arrows,
//! zero-size boxes) never divides by zero.

use serde::{Deserialize, Serialize};

/// Half-width of the band around an arrow's shaft that counts as a hit.
pub const ARROW_HIT_TOLERANCE: f32 = 5.0;

/// Below this determinant two segments are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-10;

// ─── Primitives ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle: origin at the top-left, non-negative size once
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the rectangle spanned by two corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Flip negative extents so that width and height are non-negative.
    pub fn normalized(mut self) -> Self {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
        self
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment: points on the border are inside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// AABB overlap. Rectangles that only touch along an edge overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }

    /// The four edges, clockwise from the top.
    pub fn edges(&self) -> [Segment; 4] {
        let tl = Point::new(self.left(), self.top());
        let tr = Point::new(self.right(), self.top());
        let br = Point::new(self.right(), self.bottom());
        let bl = Point::new(self.left(), self.bottom());
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

// ─── Shape geometry ──────────────────────────────────────────────────────

/// Type-specific geometry of a shape.
///
/// Box shapes store their bounding box directly. Arrows store their two
/// endpoints; their origin and size are derived (`end = start + size`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle(Rect),
    Ellipse(Rect),
    Arrow { start: Point, end: Point },
}

impl Geometry {
    /// Is (px, py) inside the shape?
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        match self {
            Geometry::Rectangle(r) => r.contains(px, py),
            Geometry::Ellipse(r) => ellipse_contains(r, px, py),
            Geometry::Arrow { start, end } => {
                segment_near_point(Segment::new(*start, *end), Point::new(px, py))
            }
        }
    }

    /// Does the shape overlap the box spanned by (x1, y1) and (x2, y2)?
    pub fn intersects_box(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> bool {
        let bx = Rect::from_corners(Point::new(x1, y1), Point::new(x2, y2));
        match self {
            Geometry::Rectangle(r) => r.intersects(&bx),
            Geometry::Ellipse(r) => ellipse_intersects_box(r, &bx),
            Geometry::Arrow { start, end } => {
                segment_intersects_box(Segment::new(*start, *end), &bx)
            }
        }
    }
}

fn ellipse_contains(r: &Rect, px: f32, py: f32) -> bool {
    let rx = r.width / 2.0;
    let ry = r.height / 2.0;
    if rx == 0.0 || ry == 0.0 {
        return false;
    }
    let c = r.center();
    let nx = (px - c.x) / rx;
    let ny = (py - c.y) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Center-in-box, else nearest box point against the normalized ellipse
/// equation. This over-approximates near the box corners.
fn ellipse_intersects_box(r: &Rect, bx: &Rect) -> bool {
    let c = r.center();
    if bx.contains(c.x, c.y) {
        return true;
    }
    let rx = r.width / 2.0;
    let ry = r.height / 2.0;
    if rx == 0.0 || ry == 0.0 {
        return false;
    }
    let closest_x = c.x.clamp(bx.left(), bx.right());
    let closest_y = c.y.clamp(bx.top(), bx.bottom());
    let dx = c.x - closest_x;
    let dy = c.y - closest_y;
    (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= 1.0
}

/// Distance from `p` to the segment is within [`ARROW_HIT_TOLERANCE`].
fn segment_near_point(seg: Segment, p: Point) -> bool {
    let dx = seg.b.x - seg.a.x;
    let dy = seg.b.y - seg.a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return false;
    }
    let (ux, uy) = (dx / len, dy / len);
    let t = ((p.x - seg.a.x) * ux + (p.y - seg.a.y) * uy).clamp(0.0, len);
    let nearest = Point::new(seg.a.x + ux * t, seg.a.y + uy * t);
    p.distance_squared(nearest) <= ARROW_HIT_TOLERANCE * ARROW_HIT_TOLERANCE
}

fn segment_intersects_box(seg: Segment, bx: &Rect) -> bool {
    if bx.contains(seg.a.x, seg.a.y) || bx.contains(seg.b.x, seg.b.y) {
        return true;
    }
    bx.edges().iter().any(|edge| segments_intersect(seg, *edge))
}

/// Do two closed segments cross?
///
/// Solves `a1 + t1·d1 = a2 + t2·d2` with Cramer's rule. Parallel and
/// collinear pairs (|det| below [`PARALLEL_EPSILON`]) never intersect.
pub fn segments_intersect(s1: Segment, s2: Segment) -> bool {
    let d1 = (s1.b.x - s1.a.x, s1.b.y - s1.a.y);
    let d2 = (s2.b.x - s2.a.x, s2.b.y - s2.a.y);
    let det = d1.0 * d2.1 - d1.1 * d2.0;
    if det.abs() < PARALLEL_EPSILON {
        return false;
    }
    let r = (s2.a.x - s1.a.x, s2.a.y - s1.a.y);
    let t1 = (r.0 * d2.1 - r.1 * d2.0) / det;
    let t2 = (r.0 * d1.1 - r.1 * d1.0) / det;
    (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let g = Geometry::Rectangle(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(g.contains_point(15.0, 15.0));
        assert!(g.contains_point(30.0, 30.0));
        assert!(g.contains_point(10.0, 10.0));
        assert!(!g.contains_point(35.0, 35.0));
        assert!(!g.contains_point(9.9, 15.0));
    }

    #[test]
    fn ellipse_contains_center_and_boundary() {
        let g = Geometry::Ellipse(Rect::new(0.0, 0.0, 40.0, 20.0));
        assert!(g.contains_point(20.0, 10.0));
        assert!(g.contains_point(20.0, 0.0));
        assert!(g.contains_point(0.0, 10.0));
        assert!(!g.contains_point(20.0, -1.0));
        // Bounding-box corner is outside the ellipse.
        assert!(!g.contains_point(1.0, 1.0));
    }

    #[test]
    fn zero_size_ellipse_contains_nothing() {
        let g = Geometry::Ellipse(Rect::new(5.0, 5.0, 0.0, 10.0));
        assert!(!g.contains_point(5.0, 10.0));
    }

    #[test]
    fn arrow_contains_within_tolerance() {
        let g = Geometry::Arrow {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 0.0),
        };
        assert!(g.contains_point(50.0, 0.0));
        assert!(g.contains_point(50.0, 5.0));
        assert!(!g.contains_point(50.0, 5.1));
        // Projection clamps to the endpoints.
        assert!(g.contains_point(-3.0, 0.0));
        assert!(!g.contains_point(-6.0, 0.0));
        assert!(g.contains_point(103.0, 4.0));
        assert!(!g.contains_point(104.0, 4.0));
    }

    #[test]
    fn zero_length_arrow_contains_nothing() {
        let p = Point::new(7.0, 7.0);
        let g = Geometry::Arrow { start: p, end: p };
        assert!(!g.contains_point(7.0, 7.0));
    }

    #[test]
    fn rect_box_overlap_any_corner_order() {
        let g = Geometry::Rectangle(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(g.intersects_box(0.0, 0.0, 15.0, 15.0));
        assert!(g.intersects_box(15.0, 15.0, 0.0, 0.0));
        assert!(g.intersects_box(30.0, 30.0, 40.0, 40.0)); // touching corner
        assert!(!g.intersects_box(31.0, 0.0, 40.0, 40.0));
        assert!(g.intersects_box(0.0, 0.0, 100.0, 100.0)); // fully covered
    }

    #[test]
    fn ellipse_box_center_inside() {
        let g = Geometry::Ellipse(Rect::new(0.0, 0.0, 40.0, 20.0));
        assert!(g.intersects_box(15.0, 5.0, 25.0, 15.0));
    }

    #[test]
    fn ellipse_box_nearest_point() {
        let g = Geometry::Ellipse(Rect::new(0.0, 0.0, 40.0, 20.0));
        // Box left edge at x=35: dx=15 → 225/400 < 1.
        assert!(g.intersects_box(35.0, 5.0, 50.0, 15.0));
        // Box left edge at x=41: dx=21 → 441/400 > 1.
        assert!(!g.intersects_box(41.0, 5.0, 50.0, 15.0));
    }

    #[test]
    fn ellipse_box_diagonal_corner() {
        let g = Geometry::Ellipse(Rect::new(0.0, 0.0, 40.0, 20.0));
        // Nearest box corner (35, 18): (15/20)² + (8/10)² = 1.2025
        assert!(!g.intersects_box(35.0, 18.0, 60.0, 60.0));
        // Nearest box corner (34, 16): (14/20)² + (6/10)² = 0.85
        assert!(g.intersects_box(34.0, 16.0, 60.0, 60.0));
    }

    #[test]
    fn arrow_box_endpoint_inside() {
        let g = Geometry::Arrow {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 100.0),
        };
        assert!(g.intersects_box(90.0, 90.0, 110.0, 110.0));
        assert!(g.intersects_box(-5.0, -5.0, 5.0, 5.0));
    }

    #[test]
    fn arrow_box_crossing_without_endpoints() {
        let g = Geometry::Arrow {
            start: Point::new(0.0, 50.0),
            end: Point::new(100.0, 50.0),
        };
        assert!(g.intersects_box(40.0, 40.0, 60.0, 60.0));
        assert!(g.intersects_box(60.0, 60.0, 40.0, 40.0));
        assert!(!g.intersects_box(40.0, 51.0, 60.0, 60.0));
    }

    #[test]
    fn segments_crossing() {
        assert!(segments_intersect(
            seg(0.0, 0.0, 10.0, 10.0),
            seg(0.0, 10.0, 10.0, 0.0)
        ));
    }

    #[test]
    fn segments_touching_at_endpoint() {
        assert!(segments_intersect(
            seg(0.0, 0.0, 10.0, 0.0),
            seg(10.0, -5.0, 10.0, 5.0)
        ));
    }

    #[test]
    fn segments_disjoint() {
        assert!(!segments_intersect(
            seg(0.0, 0.0, 10.0, 0.0),
            seg(11.0, -5.0, 11.0, 5.0)
        ));
    }

    #[test]
    fn parallel_segments_never_intersect() {
        assert!(!segments_intersect(
            seg(0.0, 0.0, 10.0, 0.0),
            seg(0.0, 1.0, 10.0, 1.0)
        ));
        // Collinear overlap is also reported as parallel.
        assert!(!segments_intersect(
            seg(0.0, 0.0, 10.0, 0.0),
            seg(5.0, 0.0, 15.0, 0.0)
        ));
    }

    #[test]
    fn rect_from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(30.0, 40.0), Point::new(10.0, 5.0));
        assert_eq!(r, Rect::new(10.0, 5.0, 20.0, 35.0));
        assert_eq!(Rect::new(10.0, 10.0, -5.0, -5.0).normalized(), Rect::new(5.0, 5.0, 5.0, 5.0));
    }
}
