//! Error types with diagnostics using miette
//!
//! Canvas operations never panic on a bad index. They leave the canvas
//! untouched and report one of these instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::shapes::CanvasShape;

/// Errors from positional canvas operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("index {index} is out of range for a canvas of {len} shapes")]
    #[diagnostic(
        code(canvaslist::index_out_of_range),
        help("valid positions are 0 up to but not including {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

/// An `insert_after` that could not be carried out.
///
/// The canvas never adopted the shape, so it is handed back here.
#[derive(Error, Diagnostic, Debug)]
#[error("shape was not inserted")]
#[diagnostic(
    code(canvaslist::insert_rejected),
    help("the shape is still yours; take it back with `into_shape`")
)]
pub struct InsertRejected {
    #[source]
    pub error: CanvasError,
    pub shape: CanvasShape,
}

impl InsertRejected {
    pub(crate) fn out_of_range(index: usize, len: usize, shape: CanvasShape) -> Self {
        Self {
            error: CanvasError::IndexOutOfRange { index, len },
            shape,
        }
    }

    /// Recover the shape the canvas refused
    pub fn into_shape(self) -> CanvasShape {
        self.shape
    }
}
