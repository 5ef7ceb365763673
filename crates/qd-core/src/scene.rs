//! The scene: every shape on the surface, in creation order.
//!
//! Creation order is also paint order (later shapes are drawn on top).
//! Hit testing walks the same order and returns the first match, so the
//! earliest-created shape under the pointer wins.

use crate::error::ShapeError;
use crate::geometry::Point;
use crate::id::ShapeId;
use crate::shape::{Shape, ShapeKind};

#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, unselected shape.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: impl Into<String>,
    ) -> Result<ShapeId, ShapeError> {
        let shape = Shape::new(kind, x, y, width, height, color)?;
        let id = shape.id;
        log::debug!("scene: add {kind} {id} at ({x}, {y}) size {width}x{height}");
        self.shapes.push(shape);
        Ok(id)
    }

    /// Drop every shape. Callers holding a selection must reset it too.
    pub fn clear(&mut self) {
        log::debug!("scene: clear {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// First shape, in creation order, containing (px, py).
    pub fn hit_test(&self, px: f32, py: f32) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| s.contains_point(px, py))
            .map(|s| s.id)
    }

    /// Every shape overlapping the box spanned by two corners.
    pub fn hit_test_box(&self, a: Point, b: Point) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.intersects_box(a.x, a.y, b.x, b.y))
            .map(|s| s.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shapes_keep_creation_order() {
        let mut scene = Scene::new();
        let a = scene.add_shape(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0, "red").unwrap();
        let b = scene.add_shape(ShapeKind::Ellipse, 0.0, 0.0, 10.0, 10.0, "blue").unwrap();
        let ids: Vec<_> = scene.shapes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn hit_test_prefers_earliest_shape() {
        let mut scene = Scene::new();
        let under = scene.add_shape(ShapeKind::Rectangle, 0.0, 0.0, 100.0, 100.0, "red").unwrap();
        let _over = scene.add_shape(ShapeKind::Rectangle, 25.0, 25.0, 50.0, 50.0, "blue").unwrap();
        assert_eq!(scene.hit_test(50.0, 50.0), Some(under));
        assert_eq!(scene.hit_test(150.0, 150.0), None);
    }

    #[test]
    fn hit_test_box_collects_overlaps() {
        let mut scene = Scene::new();
        let a = scene.add_shape(ShapeKind::Rectangle, 0.0, 0.0, 50.0, 50.0, "red").unwrap();
        let _b = scene.add_shape(ShapeKind::Rectangle, 100.0, 100.0, 50.0, 50.0, "red").unwrap();
        let c = scene.add_shape(ShapeKind::Arrow, 60.0, 0.0, 0.0, 80.0, "black").unwrap();
        let hits = scene.hit_test_box(Point::new(70.0, 40.0), Point::new(-10.0, 30.0));
        assert_eq!(hits, vec![a, c]);
    }

    #[test]
    fn invalid_shape_is_not_added() {
        let mut scene = Scene::new();
        assert!(scene.add_shape(ShapeKind::Ellipse, f32::INFINITY, 0.0, 1.0, 1.0, "red").is_err());
        assert!(scene.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut scene = Scene::new();
        let id = scene.add_shape(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0, "red").unwrap();
        scene.clear();
        assert_eq!(scene.len(), 0);
        assert!(scene.get(id).is_none());
    }
}
