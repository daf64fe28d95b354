//! An ordered canvas of shapes.
//!
//! [`CanvasList`] is a singly linked chain in which every node owns one
//! [`CanvasShape`]. Shapes are handed in by value and handed back by value
//! when popped; everything still on the canvas is destroyed with it.
//!
//! ```
//! use canvaslist::{CanvasList, Circle, Rect, Shape};
//!
//! let mut canvas = CanvasList::new();
//! canvas.push_back(Rect::new(5, 5, 4, 6));
//! canvas.push_front(Circle::new(9, 1, 8));
//! assert_eq!(canvas.find(5, 5), Some(1));
//! assert_eq!(canvas.shape_at(0).map(|s| s.x()), Some(9));
//! ```

pub mod canvas;
pub mod errors;
mod log;
pub mod shapes;

pub use canvas::{CanvasList, ShapeNode};
pub use errors::{CanvasError, InsertRejected};
pub use shapes::{BasicShape, CanvasShape, Circle, Rect, RightTriangle, Shape};
