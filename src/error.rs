use thiserror::Error;

use crate::math::index::{Column, Row};

pub type Result<T> = std::result::Result<T, Error>;

/// Everything the kernel can refuse to do.
/// None of these are transient: they point at bad input or bad geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("matrix index ({row}, {column}) is outside of a {rows}x{columns} matrix")]
    MatrixIndexOutOfBounds {
        row: Row,
        column: Column,
        rows: usize,
        columns: usize,
    },
    #[error("canvas index (column {column}, row {row}) is outside of a {width}x{height} canvas")]
    CanvasIndexOutOfBounds {
        column: Column,
        row: Row,
        width: usize,
        height: usize,
    },
    #[error("point ({x}, {y}) does not map onto the canvas")]
    PointOffCanvas { x: f64, y: f64 },
    #[error("cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
    #[error("matrix with zero determinant is not invertible")]
    NonInvertibleMatrix,
    #[error("intersection index {index} is out of range, only {count} intersections recorded")]
    IntersectionIndexOutOfBounds { index: usize, count: usize },
    #[error("invalid scene: {0}")]
    InvalidScene(String),
}
