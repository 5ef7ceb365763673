//! Diagram facade.
//!
//! A `Diagram` owns one scene, its selection, the interaction state
//! machine, and a renderer. Hosts feed it pointer events and shape
//! commands; it redraws through the renderer after every change. Each
//! document gets its own `Diagram`, nothing is shared between them.

use crate::input::{InputEvent, Modifiers};
use crate::interaction::{Interaction, InteractionState};
use qd_core::{CursorHint, Rect, Scene, Selection, Shape, ShapeError, ShapeId, ShapeKind};
use qd_render::{Frame, Renderer};

pub struct Diagram<R: Renderer> {
    scene: Scene,
    selection: Selection,
    interaction: Interaction,
    renderer: R,
}

impl<R: Renderer> Diagram<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            scene: Scene::new(),
            selection: Selection::new(),
            interaction: Interaction::new(),
            renderer,
        }
    }

    /// Append a shape and redraw.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &str,
    ) -> Result<ShapeId, ShapeError> {
        let id = self.scene.add_shape(kind, x, y, width, height, color)?;
        self.render();
        Ok(id)
    }

    /// Like [`add_shape`](Self::add_shape) with the kind given by name
    /// (`rect`, `rectangle`, `ellipse`, `circle`, `arrow`).
    pub fn add_shape_named(
        &mut self,
        kind: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &str,
    ) -> Result<ShapeId, ShapeError> {
        let kind: ShapeKind = kind.parse()?;
        self.add_shape(kind, x, y, width, height, color)
    }

    /// Remove every shape, drop the selection, end any gesture, redraw.
    pub fn clear_shapes(&mut self) {
        self.scene.clear();
        self.selection.reset();
        self.interaction.cancel();
        self.render();
    }

    /// Process one pointer event. Redraws and returns `true` if anything
    /// visible changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let changed = self
            .interaction
            .handle(&event, &mut self.scene, &mut self.selection);
        if changed {
            self.render();
        }
        changed
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, modifiers: Modifiers) -> bool {
        self.handle(InputEvent::from_pointer_down(x, y, modifiers))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, modifiers: Modifiers) -> bool {
        self.handle(InputEvent::from_pointer_move(x, y, modifiers))
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, modifiers: Modifiers) -> bool {
        self.handle(InputEvent::from_pointer_up(x, y, modifiers))
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.handle(InputEvent::PointerLeave)
    }

    pub fn cursor_at(&self, x: f32, y: f32) -> CursorHint {
        self.interaction.cursor_at(&self.scene, &self.selection, x, y)
    }

    /// Draw the current state.
    pub fn render(&mut self) {
        let frame = Frame {
            shapes: self.scene.shapes(),
            marquee: self.interaction.marquee_rect(),
        };
        self.renderer.render(&frame);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selected_ids(&self) -> &[ShapeId] {
        self.selection.ids()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.scene.get(id)
    }

    /// Normalized marquee while a box selection is in progress.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.interaction.marquee_rect()
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
