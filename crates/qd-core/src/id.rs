use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier for a shape in a scene.
/// Unique for the lifetime of the process, never reused after a clear.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Allocate the next free id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ShapeId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = ShapeId::next();
        let b = ShapeId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn display_uses_hash_prefix() {
        let id = ShapeId::next();
        assert_eq!(id.to_string(), format!("#{}", id.get()));
    }
}
