//! Shape types held by a canvas
//!
//! Each shape is its own type that knows how to:
//! - Report and move its position
//! - Describe itself in a fixed, human-readable format
//!
//! The closed family is gathered in [`CanvasShape`], which dispatches the
//! [`Shape`] trait to the concrete variant without boxing.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::{IVec2, ivec2};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Position of the shape on the canvas
    fn position(&self) -> IVec2;

    /// Move the shape to a new position
    fn set_position(&mut self, position: IVec2);

    /// Human-readable summary, e.g. `It's a Circle at x: 9, y: 1, radius: 8`
    fn describe(&self) -> String;

    fn x(&self) -> i32 {
        self.position().x
    }

    fn y(&self) -> i32 {
        self.position().y
    }

    fn set_x(&mut self, x: i32) {
        let y = self.y();
        self.set_position(ivec2(x, y));
    }

    fn set_y(&mut self, y: i32) {
        let x = self.x();
        self.set_position(ivec2(x, y));
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A shape with nothing but a position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicShape {
    pub position: IVec2,
}

impl BasicShape {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: ivec2(x, y),
        }
    }
}

impl Shape for BasicShape {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    fn describe(&self) -> String {
        format!("It's a Shape at x: {}, y: {}", self.position.x, self.position.y)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub position: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: ivec2(x, y),
            width,
            height,
        }
    }

    /// A rectangle at the origin
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}

impl Shape for Rect {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    fn describe(&self) -> String {
        format!(
            "It's a Rectangle at x: {}, y: {} with width: {} and height: {}",
            self.position.x, self.position.y, self.width, self.height
        )
    }
}

/// A circle, positioned by its center
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle {
    pub position: IVec2,
    pub radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            position: ivec2(x, y),
            radius,
        }
    }

    pub fn with_radius(radius: i32) -> Self {
        Self::new(0, 0, radius)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }
}

impl Shape for Circle {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    fn describe(&self) -> String {
        format!(
            "It's a Circle at x: {}, y: {}, radius: {}",
            self.position.x, self.position.y, self.radius
        )
    }
}

/// A right triangle described by the lengths of its two legs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RightTriangle {
    pub position: IVec2,
    pub base: i32,
    pub height: i32,
}

impl RightTriangle {
    pub fn new(x: i32, y: i32, base: i32, height: i32) -> Self {
        Self {
            position: ivec2(x, y),
            base,
            height,
        }
    }

    /// A right triangle at the origin
    pub fn with_size(base: i32, height: i32) -> Self {
        Self::new(0, 0, base, height)
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_base(&mut self, base: i32) {
        self.base = base;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}

impl Shape for RightTriangle {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    fn describe(&self) -> String {
        format!(
            "It's a Right Triangle at x: {}, y: {} with base: {} and height: {}",
            self.position.x, self.position.y, self.base, self.height
        )
    }
}

// ============================================================================
// Shape Family
// ============================================================================

/// Any shape a canvas can own.
///
/// Cloning duplicates the concrete variant with all of its fields.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasShape {
    Basic(BasicShape),
    Rect(Rect),
    Circle(Circle),
    RightTriangle(RightTriangle),
}

impl CanvasShape {
    /// Name of the concrete variant
    pub fn kind(&self) -> &'static str {
        match self {
            CanvasShape::Basic(_) => "shape",
            CanvasShape::Rect(_) => "rectangle",
            CanvasShape::Circle(_) => "circle",
            CanvasShape::RightTriangle(_) => "right triangle",
        }
    }

    pub fn as_basic(&self) -> Option<&BasicShape> {
        match self {
            CanvasShape::Basic(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            CanvasShape::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            CanvasShape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_right_triangle(&self) -> Option<&RightTriangle> {
        match self {
            CanvasShape::RightTriangle(t) => Some(t),
            _ => None,
        }
    }
}

impl Default for CanvasShape {
    fn default() -> Self {
        CanvasShape::Basic(BasicShape::default())
    }
}

impl fmt::Display for CanvasShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== BasicShape tests ====================

    #[test]
    fn basic_default_is_origin() {
        let shape = BasicShape::default();
        assert_eq!(shape.x(), 0);
        assert_eq!(shape.y(), 0);
        insta::assert_snapshot!(shape.describe(), @"It's a Shape at x: 0, y: 0");
    }

    #[test]
    fn basic_setters() {
        let mut shape = BasicShape::new(1, 2);
        shape.set_x(7);
        shape.set_y(-3);
        assert_eq!(shape.position(), ivec2(7, -3));
        insta::assert_snapshot!(shape.describe(), @"It's a Shape at x: 7, y: -3");
    }

    #[test]
    fn basic_clone_keeps_position() {
        let shape = BasicShape::new(1, 2);
        let copy = shape;
        assert_eq!(copy.x(), shape.x());
        assert_eq!(copy.y(), shape.y());
    }

    // ==================== Rect tests ====================

    #[test]
    fn rect_constructors() {
        assert_eq!(Rect::default(), Rect::new(0, 0, 0, 0));

        let sized = Rect::with_size(4, 6);
        assert_eq!(sized.position(), IVec2::ZERO);
        assert_eq!(sized.width(), 4);
        assert_eq!(sized.height(), 6);

        let placed = Rect::new(5, 5, 4, 6);
        assert_eq!((placed.x(), placed.y()), (5, 5));
    }

    #[test]
    fn rect_setters() {
        let mut rect = Rect::default();
        rect.set_width(10);
        rect.set_height(20);
        rect.set_x(3);
        assert_eq!(rect, Rect::new(3, 0, 10, 20));
    }

    #[test]
    fn rect_describe() {
        let rect = Rect::new(5, 5, 4, 6);
        insta::assert_snapshot!(
            rect.describe(),
            @"It's a Rectangle at x: 5, y: 5 with width: 4 and height: 6"
        );
    }

    // ==================== Circle tests ====================

    #[test]
    fn circle_constructors() {
        assert_eq!(Circle::default().radius(), 0);
        let sized = Circle::with_radius(8);
        assert_eq!(sized.position(), IVec2::ZERO);
        assert_eq!(sized.radius(), 8);
        assert_eq!(Circle::new(9, 1, 8).position(), ivec2(9, 1));
    }

    #[test]
    fn circle_setters() {
        let mut circle = Circle::with_radius(2);
        circle.set_radius(5);
        circle.set_y(4);
        assert_eq!(circle, Circle::new(0, 4, 5));
    }

    #[test]
    fn circle_describe() {
        let circle = Circle::new(9, 1, 8);
        insta::assert_snapshot!(circle.describe(), @"It's a Circle at x: 9, y: 1, radius: 8");
    }

    // ==================== RightTriangle tests ====================

    #[test]
    fn right_triangle_constructors() {
        assert_eq!(RightTriangle::default(), RightTriangle::new(0, 0, 0, 0));
        let sized = RightTriangle::with_size(3, 7);
        assert_eq!(sized.position(), IVec2::ZERO);
        assert_eq!((sized.base(), sized.height()), (3, 7));
    }

    #[test]
    fn right_triangle_setters() {
        let mut tri = RightTriangle::with_size(1, 1);
        tri.set_base(8);
        tri.set_height(13);
        tri.set_position(ivec2(19, 11));
        assert_eq!(tri, RightTriangle::new(19, 11, 8, 13));
    }

    #[test]
    fn right_triangle_describe() {
        let tri = RightTriangle::new(10, 11, 3, 7);
        insta::assert_snapshot!(
            tri.describe(),
            @"It's a Right Triangle at x: 10, y: 11 with base: 3 and height: 7"
        );
    }

    // ==================== CanvasShape tests ====================

    #[test]
    fn dispatch_reaches_variant() {
        let mut shape: CanvasShape = Circle::new(9, 1, 8).into();
        assert_eq!(shape.kind(), "circle");
        assert_eq!(shape.x(), 9);
        shape.set_x(2);
        assert_eq!(shape.as_circle(), Some(&Circle::new(2, 1, 8)));
        assert!(shape.as_rect().is_none());

        let basic: CanvasShape = BasicShape::new(1, 3).into();
        assert_eq!(basic.kind(), "shape");
        assert_eq!(basic.as_basic(), Some(&BasicShape::new(1, 3)));
        assert!(basic.as_circle().is_none());

        let rect: CanvasShape = Rect::new(5, 5, 4, 6).into();
        assert_eq!(rect.kind(), "rectangle");
        assert_eq!(rect.as_rect().map(Rect::width), Some(4));
        assert!(rect.as_basic().is_none());

        let tri: CanvasShape = RightTriangle::new(10, 11, 3, 7).into();
        assert_eq!(tri.kind(), "right triangle");
        assert!(tri.as_right_triangle().is_some());
        assert!(tri.as_rect().is_none());
    }

    #[test]
    fn clone_keeps_variant_and_fields() {
        let shape: CanvasShape = RightTriangle::new(10, 11, 3, 7).into();
        let copy = shape.clone();
        assert_eq!(copy, shape);
        assert_eq!(copy.as_right_triangle().map(|t| t.base()), Some(3));
    }

    #[test]
    fn display_matches_describe() {
        let shape: CanvasShape = Rect::new(1, 1, 8, 2).into();
        assert_eq!(shape.to_string(), shape.describe());
        assert_eq!(CanvasShape::default().to_string(), "It's a Shape at x: 0, y: 0");
    }
}
