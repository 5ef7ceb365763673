//! Selection set.
//!
//! Holds the ids of the selected shapes, in the order they were selected,
//! and is the only writer of each shape's selection mode. After every
//! operation a shape is flagged selected exactly when its id is in the set.
//!
//! Mode policy: a lone selected shape is `Direct` (resize handles), and
//! every member of a selection of two or more is `Box` (group move only).
//! `normalize_modes` enforces this after multi-shape changes.

use crate::geometry::Point;
use crate::id::ShapeId;
use crate::scene::Scene;
use crate::shape::{SelectionMode, Shape};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: SmallVec<[ShapeId; 4]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    /// The selected shape when exactly one is selected.
    pub fn sole(&self) -> Option<ShapeId> {
        match self.ids.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Mark `shape` selected with `mode`. Selecting an already selected
    /// shape only updates its mode. `SelectionMode::None` deselects.
    pub fn select(&mut self, shape: &mut Shape, mode: SelectionMode) {
        if mode == SelectionMode::None {
            self.deselect(shape);
            return;
        }
        shape.set_selection_mode(mode);
        if !self.ids.contains(&shape.id) {
            self.ids.push(shape.id);
        }
    }

    pub fn deselect(&mut self, shape: &mut Shape) {
        shape.set_selection_mode(SelectionMode::None);
        self.ids.retain(|id| *id != shape.id);
    }

    /// Flip membership. Returns whether the shape is selected afterwards.
    pub fn toggle(&mut self, shape: &mut Shape, mode_if_adding: SelectionMode) -> bool {
        if self.contains(shape.id) {
            self.deselect(shape);
            false
        } else {
            self.select(shape, mode_if_adding);
            shape.is_selected()
        }
    }

    /// Deselect every selected shape.
    pub fn clear_all(&mut self, scene: &mut Scene) {
        for shape in scene.shapes_mut() {
            if self.ids.contains(&shape.id) {
                shape.set_selection_mode(SelectionMode::None);
            }
        }
        self.ids.clear();
    }

    /// Forget every id without touching shapes. Used when the scene itself
    /// has been emptied.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Marquee sweep from `start` to `current` (any corner order).
    ///
    /// Intersecting shapes are selected in `Box` mode. Non-intersecting
    /// shapes are deselected unless `additive`, in which case they are left
    /// as they were. Modes are then normalized, so a sweep that leaves a
    /// single shape selected makes it `Direct`.
    pub fn sweep_box(&mut self, scene: &mut Scene, start: Point, current: Point, additive: bool) {
        let hits = scene.hit_test_box(start, current);
        for shape in scene.shapes_mut() {
            if hits.contains(&shape.id) {
                self.select(shape, SelectionMode::Box);
            } else if !additive {
                self.deselect(shape);
            }
        }
        self.normalize_modes(scene);
        log::trace!(
            "selection: sweep ({}, {})..({}, {}) additive={additive} -> {} selected",
            start.x,
            start.y,
            current.x,
            current.y,
            self.len()
        );
    }

    /// Apply the mode policy: one shape → `Direct`, several → all `Box`.
    pub fn normalize_modes(&mut self, scene: &mut Scene) {
        let mode = if self.ids.len() == 1 {
            SelectionMode::Direct
        } else {
            SelectionMode::Box
        };
        for shape in scene.shapes_mut() {
            if self.ids.contains(&shape.id) {
                shape.set_selection_mode(mode);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use pretty_assertions::assert_eq;

    fn scene_with(n: usize) -> (Scene, Vec<ShapeId>) {
        let mut scene = Scene::new();
        let ids = (0..n)
            .map(|i| {
                let x = i as f32 * 100.0;
                scene
                    .add_shape(ShapeKind::Rectangle, x, 0.0, 50.0, 50.0, "#cccccc")
                    .unwrap()
            })
            .collect();
        (scene, ids)
    }

    fn consistent(scene: &Scene, selection: &Selection) -> bool {
        scene.shapes().iter().all(|s| {
            s.is_selected() == selection.contains(s.id)
                && (s.selection_mode() == SelectionMode::None) == !s.is_selected()
        }) && selection.ids().iter().all(|id| scene.get(*id).is_some())
    }

    #[test]
    fn select_is_idempotent() {
        let (mut scene, ids) = scene_with(1);
        let mut sel = Selection::new();
        let shape = scene.get_mut(ids[0]).unwrap();
        sel.select(shape, SelectionMode::Direct);
        let once = (sel.ids().to_vec(), shape.clone());
        sel.select(shape, SelectionMode::Direct);
        assert_eq!((sel.ids().to_vec(), shape.clone()), once);
        assert!(consistent(&scene, &sel));
    }

    #[test]
    fn select_then_deselect_round_trips() {
        let (mut scene, ids) = scene_with(2);
        let mut sel = Selection::new();
        sel.select(scene.get_mut(ids[0]).unwrap(), SelectionMode::Box);
        let before = sel.ids().to_vec();

        let s = scene.get_mut(ids[1]).unwrap();
        sel.select(s, SelectionMode::Direct);
        sel.deselect(s);
        assert!(!s.is_selected());
        assert_eq!(s.selection_mode(), SelectionMode::None);
        assert_eq!(sel.ids(), before.as_slice());
        assert!(consistent(&scene, &sel));
    }

    #[test]
    fn deselect_is_idempotent() {
        let (mut scene, ids) = scene_with(1);
        let mut sel = Selection::new();
        let s = scene.get_mut(ids[0]).unwrap();
        sel.deselect(s);
        sel.deselect(s);
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let (mut scene, ids) = scene_with(1);
        let mut sel = Selection::new();
        let s = scene.get_mut(ids[0]).unwrap();
        assert!(sel.toggle(s, SelectionMode::Direct));
        assert_eq!(s.selection_mode(), SelectionMode::Direct);
        assert!(!sel.toggle(s, SelectionMode::Direct));
        assert!(sel.is_empty());
        assert!(consistent(&scene, &sel));
    }

    #[test]
    fn clear_all_deselects_everything() {
        let (mut scene, ids) = scene_with(3);
        let mut sel = Selection::new();
        for id in &ids {
            sel.select(scene.get_mut(*id).unwrap(), SelectionMode::Box);
        }
        sel.clear_all(&mut scene);
        assert!(sel.is_empty());
        assert!(scene.shapes().iter().all(|s| !s.is_selected()));
    }

    #[test]
    fn sweep_replaces_selection() {
        let (mut scene, ids) = scene_with(2);
        let mut sel = Selection::new();
        sel.select(scene.get_mut(ids[1]).unwrap(), SelectionMode::Direct);

        sel.sweep_box(&mut scene, Point::new(-10.0, -10.0), Point::new(60.0, 60.0), false);
        assert_eq!(sel.ids(), &[ids[0]]);
        assert!(consistent(&scene, &sel));
    }

    #[test]
    fn additive_sweep_keeps_outside_selection() {
        let (mut scene, ids) = scene_with(2);
        let mut sel = Selection::new();
        sel.select(scene.get_mut(ids[1]).unwrap(), SelectionMode::Direct);

        sel.sweep_box(&mut scene, Point::new(-10.0, -10.0), Point::new(60.0, 60.0), true);
        assert_eq!(sel.ids(), &[ids[1], ids[0]]);
        assert!(scene.shapes().iter().all(|s| s.selection_mode() == SelectionMode::Box));
        assert!(consistent(&scene, &sel));
    }

    #[test]
    fn sweep_of_single_shape_promotes_to_direct() {
        let (mut scene, ids) = scene_with(3);
        let mut sel = Selection::new();
        sel.sweep_box(&mut scene, Point::new(60.0, 60.0), Point::new(-5.0, 10.0), false);
        assert_eq!(sel.ids(), &[ids[0]]);
        assert_eq!(scene.get(ids[0]).unwrap().selection_mode(), SelectionMode::Direct);
    }

    #[test]
    fn sweep_over_several_shapes_uses_box_mode() {
        let (mut scene, ids) = scene_with(3);
        let mut sel = Selection::new();
        sel.select(scene.get_mut(ids[0]).unwrap(), SelectionMode::Direct);
        sel.sweep_box(&mut scene, Point::new(0.0, 0.0), Point::new(160.0, 10.0), false);
        assert_eq!(sel.ids(), &[ids[0], ids[1]]);
        for id in &ids[..2] {
            assert_eq!(scene.get(*id).unwrap().selection_mode(), SelectionMode::Box);
        }
        assert!(!scene.get(ids[2]).unwrap().is_selected());
    }

    #[test]
    fn zero_area_sweep_on_empty_space_selects_nothing() {
        let (mut scene, _ids) = scene_with(2);
        let mut sel = Selection::new();
        let p = Point::new(75.0, 25.0);
        sel.sweep_box(&mut scene, p, p, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn normalize_demotes_and_promotes() {
        let (mut scene, ids) = scene_with(2);
        let mut sel = Selection::new();
        sel.select(scene.get_mut(ids[0]).unwrap(), SelectionMode::Direct);
        sel.select(scene.get_mut(ids[1]).unwrap(), SelectionMode::Box);
        sel.normalize_modes(&mut scene);
        assert_eq!(scene.get(ids[0]).unwrap().selection_mode(), SelectionMode::Box);

        sel.deselect(scene.get_mut(ids[1]).unwrap());
        sel.normalize_modes(&mut scene);
        assert_eq!(scene.get(ids[0]).unwrap().selection_mode(), SelectionMode::Direct);
    }
}
