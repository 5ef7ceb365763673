//! Errors raised while building shapes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The requested kind is not one of rectangle, ellipse, or arrow.
    #[error("invalid shape kind: {0:?}")]
    InvalidShapeKind(String),

    /// Position or size contained NaN or an infinity.
    #[error("invalid shape geometry: x={x}, y={y}, width={width}, height={height}")]
    InvalidDimensions {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}
