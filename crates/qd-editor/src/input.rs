//! Input abstraction layer.
//!
//! Pointer events arrive already translated into scene coordinates; the
//! host is responsible for mapping device or screen positions.

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed.
    PointerDown { x: f32, y: f32, modifiers: Modifiers },

    PointerMove { x: f32, y: f32, modifiers: Modifiers },

    /// Button released.
    PointerUp { x: f32, y: f32, modifiers: Modifiers },

    /// Pointer left the surface. Ends any gesture like a release.
    PointerLeave,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self::PointerDown { x, y, modifiers }
    }

    pub fn from_pointer_move(x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self::PointerMove { x, y, modifiers }
    }

    pub fn from_pointer_up(x: f32, y: f32, modifiers: Modifiers) -> Self {
        Self::PointerUp { x, y, modifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors_build_matching_variants() {
        assert_eq!(
            InputEvent::from_pointer_down(1.0, 2.0, Modifiers::NONE),
            InputEvent::PointerDown {
                x: 1.0,
                y: 2.0,
                modifiers: Modifiers::NONE
            }
        );
        assert_eq!(
            InputEvent::from_pointer_move(3.0, 4.0, Modifiers::SHIFT),
            InputEvent::PointerMove {
                x: 3.0,
                y: 4.0,
                modifiers: Modifiers::SHIFT
            }
        );
    }

    #[test]
    fn shift_constant_sets_only_shift() {
        assert!(Modifiers::SHIFT.shift);
        assert!(!Modifiers::SHIFT.ctrl && !Modifiers::SHIFT.alt && !Modifiers::SHIFT.meta);
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
