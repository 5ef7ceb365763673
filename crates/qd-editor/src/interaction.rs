//! Pointer interaction state machine.
//!
//! Translates pointer events into selection changes and shape mutations.
//! Exactly one gesture is active at a time:
//!
//! | State          | Entered on pointer-down                    | Pointer-move                   |
//! |----------------|--------------------------------------------|--------------------------------|
//! | `Resizing`     | on a handle of the sole selected shape     | resize that shape by the delta |
//! | `Dragging`     | on a shape (after click/shift-click rules) | move every selected shape      |
//! | `BoxSelecting` | on empty space                             | grow the marquee and sweep     |
//! | `Idle`         | shift-click that removes a shape           | nothing (cursor lookup only)   |
//!
//! Pointer-up and pointer-leave end any gesture.

use crate::input::{InputEvent, Modifiers};
use qd_core::{CursorHint, Handle, Point, Rect, Scene, Selection, SelectionMode};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Marquee from `anchor` (pointer-down) to `current`.
    BoxSelecting { anchor: Point, current: Point },
    Dragging,
    Resizing { handle: Handle },
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
    /// Last pointer position seen; deltas are measured from here.
    last: Point,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Normalized marquee while box-selecting.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self.state {
            InteractionState::BoxSelecting { anchor, current } => {
                Some(Rect::from_corners(anchor, current))
            }
            _ => None,
        }
    }

    /// Abandon the current gesture without touching the scene.
    pub fn cancel(&mut self) {
        self.transition(InteractionState::Idle);
    }

    /// Process one event. Returns `true` when the scene, the selection, or
    /// the marquee changed and the surface needs a redraw.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        scene: &mut Scene,
        selection: &mut Selection,
    ) -> bool {
        match *event {
            InputEvent::PointerDown { x, y, modifiers } => {
                self.pointer_down(Point::new(x, y), modifiers, scene, selection)
            }
            InputEvent::PointerMove { x, y, modifiers } => {
                self.pointer_move(Point::new(x, y), modifiers, scene, selection)
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.pointer_up(),
        }
    }

    fn pointer_down(
        &mut self,
        p: Point,
        modifiers: Modifiers,
        scene: &mut Scene,
        selection: &mut Selection,
    ) -> bool {
        self.last = p;

        // Grab a handle of the lone (direct) selection.
        if let Some(id) = selection.sole()
            && let Some(hit) = scene.get(id).and_then(|s| s.handle_at(p.x, p.y))
        {
            self.transition(InteractionState::Resizing { handle: hit.handle });
            return true;
        }

        if let Some(hit_id) = scene.hit_test(p.x, p.y) {
            if modifiers.shift {
                // Shift+click: toggle in/out of the selection
                let mode = if selection.is_empty() {
                    SelectionMode::Direct
                } else {
                    SelectionMode::Box
                };
                let added = scene
                    .get_mut(hit_id)
                    .is_some_and(|shape| selection.toggle(shape, mode));
                selection.normalize_modes(scene);
                if !added {
                    // Removing a shape never starts a drag.
                    self.transition(InteractionState::Idle);
                    return true;
                }
            } else if !selection.contains(hit_id) {
                // Click on unselected shape: replace selection
                selection.clear_all(scene);
                if let Some(shape) = scene.get_mut(hit_id) {
                    selection.select(shape, SelectionMode::Direct);
                }
            }
            // Clicking an already-selected shape keeps the selection for the drag.
            self.transition(InteractionState::Dragging);
        } else {
            if !modifiers.shift {
                selection.clear_all(scene);
            }
            self.transition(InteractionState::BoxSelecting {
                anchor: p,
                current: p,
            });
            selection.sweep_box(scene, p, p, modifiers.shift);
        }
        true
    }

    fn pointer_move(
        &mut self,
        p: Point,
        modifiers: Modifiers,
        scene: &mut Scene,
        selection: &mut Selection,
    ) -> bool {
        let dx = p.x - self.last.x;
        let dy = p.y - self.last.y;
        self.last = p;

        match self.state {
            InteractionState::Idle => false,
            InteractionState::Resizing { handle } => {
                let resized = selection
                    .sole()
                    .and_then(|id| scene.get_mut(id))
                    .is_some_and(|shape| shape.resize(handle, dx, dy));
                log::trace!("interaction: resize {handle:?} by ({dx}, {dy}) applied={resized}");
                resized
            }
            InteractionState::BoxSelecting { anchor, .. } => {
                self.state = InteractionState::BoxSelecting { anchor, current: p };
                selection.sweep_box(scene, anchor, p, modifiers.shift);
                true
            }
            InteractionState::Dragging => {
                let mut moved = false;
                for shape in scene.shapes_mut().filter(|s| selection.contains(s.id)) {
                    moved |= shape.move_by(dx, dy);
                }
                moved
            }
        }
    }

    fn pointer_up(&mut self) -> bool {
        let was_active = self.state != InteractionState::Idle;
        self.transition(InteractionState::Idle);
        was_active
    }

    /// Cursor to show at (x, y). Never mutates anything.
    pub fn cursor_at(&self, scene: &Scene, selection: &Selection, x: f32, y: f32) -> CursorHint {
        match self.state {
            InteractionState::Resizing { handle } => handle.cursor(),
            InteractionState::Dragging => CursorHint::Move,
            InteractionState::BoxSelecting { .. } => CursorHint::Default,
            InteractionState::Idle => {
                let handle = selection
                    .sole()
                    .and_then(|id| scene.get(id))
                    .and_then(|s| s.handle_at(x, y));
                match handle {
                    Some(hit) => hit.cursor,
                    None if scene.hit_test(x, y).is_some() => CursorHint::Move,
                    None => CursorHint::Default,
                }
            }
        }
    }

    fn transition(&mut self, next: InteractionState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            log::debug!("interaction: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}
