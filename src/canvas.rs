//! The canvas list: an ordered, singly linked chain of owned shapes
//!
//! Every node exclusively owns its shape. Shapes enter the canvas by value
//! and leave it by value (`pop_front`/`pop_back`), so a shape is never
//! reachable from two canvases. Copying a canvas clones every shape.
//!
//! No tail pointer is kept, so anything touching the back walks the chain.
//! `len` is cached and re-established by every structural change.

use std::fmt;
use std::io;

use crate::errors::{CanvasError, InsertRejected};
use crate::log::{debug, trace};
use crate::shapes::{CanvasShape, Shape};

/// A link in the chain
#[derive(Debug)]
pub struct ShapeNode {
    shape: CanvasShape,
    next: Option<Box<ShapeNode>>,
}

impl ShapeNode {
    fn new(shape: CanvasShape, next: Option<Box<ShapeNode>>) -> Box<Self> {
        Box::new(Self { shape, next })
    }

    /// The shape owned by this node
    pub fn shape(&self) -> &CanvasShape {
        &self.shape
    }

    /// The following node, if any
    pub fn next(&self) -> Option<&ShapeNode> {
        self.next.as_deref()
    }
}

/// Ordered container of shapes
#[derive(Default)]
pub struct CanvasList {
    front: Option<Box<ShapeNode>>,
    len: usize,
}

impl CanvasList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes on the canvas
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node of the chain, without giving up ownership
    pub fn front(&self) -> Option<&ShapeNode> {
        self.front.as_deref()
    }

    /// Walk to the node at `idx`.
    fn node(&self, idx: usize) -> Option<&ShapeNode> {
        let mut cur = self.front.as_deref();
        for _ in 0..idx {
            cur = cur?.next.as_deref();
        }
        cur
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut ShapeNode> {
        let mut cur = self.front.as_deref_mut();
        for _ in 0..idx {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }

    pub fn push_front(&mut self, shape: impl Into<CanvasShape>) {
        let next = self.front.take();
        self.front = Some(ShapeNode::new(shape.into(), next));
        self.len += 1;
        debug!(len = self.len, "push_front");
    }

    pub fn push_back(&mut self, shape: impl Into<CanvasShape>) {
        let node = ShapeNode::new(shape.into(), None);
        match self.len.checked_sub(1).and_then(|last| self.node_mut(last)) {
            Some(last) => last.next = Some(node),
            None => self.front = Some(node),
        }
        self.len += 1;
        debug!(len = self.len, "push_back");
    }

    /// Insert `shape` directly after the shape at `idx`.
    ///
    /// Inserting after the last shape appends. An `idx` past the end leaves
    /// the canvas untouched and hands the shape back inside the error.
    pub fn insert_after(
        &mut self,
        idx: usize,
        shape: impl Into<CanvasShape>,
    ) -> Result<(), InsertRejected> {
        let shape = shape.into();
        let len = self.len;
        if idx >= len {
            debug!(idx, len, "insert_after rejected");
            return Err(InsertRejected::out_of_range(idx, len, shape));
        }
        let Some(prev) = self.node_mut(idx) else {
            return Err(InsertRejected::out_of_range(idx, len, shape));
        };
        let next = prev.next.take();
        prev.next = Some(ShapeNode::new(shape, next));
        self.len += 1;
        debug!(idx, len = self.len, "insert_after");
        Ok(())
    }

    /// Destroy the shape at `idx` and close the gap.
    pub fn remove_at(&mut self, idx: usize) -> Result<(), CanvasError> {
        if idx >= self.len {
            debug!(idx, len = self.len, "remove_at rejected");
            return Err(CanvasError::IndexOutOfRange {
                index: idx,
                len: self.len,
            });
        }

        let removed = match idx.checked_sub(1) {
            None => self.unlink_front(),
            Some(prev_idx) => self.node_mut(prev_idx).and_then(|prev| {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                Some(removed)
            }),
        };
        if removed.is_some() {
            self.len -= 1;
        }
        debug!(idx, len = self.len, "remove_at");
        Ok(())
    }

    /// Destroy every shape at an odd position (1, 3, 5, ...) in one pass.
    ///
    /// Survivors keep their relative order. Returns how many shapes were
    /// destroyed.
    pub fn remove_every_other(&mut self) -> usize {
        let mut removed = 0;
        let mut cur = self.front.as_deref_mut();
        while let Some(keep) = cur {
            if let Some(mut odd) = keep.next.take() {
                keep.next = odd.next.take();
                removed += 1;
            }
            cur = keep.next.as_deref_mut();
        }
        self.len -= removed;
        debug!(removed, len = self.len, "remove_every_other");
        removed
    }

    /// Detach the front node. Does not touch `len`.
    fn unlink_front(&mut self) -> Option<Box<ShapeNode>> {
        let mut node = self.front.take()?;
        self.front = node.next.take();
        Some(node)
    }

    /// Detach the first shape and hand it to the caller.
    pub fn pop_front(&mut self) -> Option<CanvasShape> {
        let node = self.unlink_front()?;
        self.len -= 1;
        debug!(len = self.len, "pop_front");
        Some(node.shape)
    }

    /// Detach the last shape and hand it to the caller.
    pub fn pop_back(&mut self) -> Option<CanvasShape> {
        let node = match self.len {
            0 => return None,
            1 => self.unlink_front()?,
            len => self.node_mut(len - 2)?.next.take()?,
        };
        self.len -= 1;
        debug!(len = self.len, "pop_back");
        Some(node.shape)
    }

    /// Position of the first shape located at (`x`, `y`)
    pub fn find(&self, x: i32, y: i32) -> Option<usize> {
        let found = self.iter().position(|shape| shape.x() == x && shape.y() == y);
        trace!(x, y, ?found, "find");
        found
    }

    /// Borrow the shape at `idx`
    pub fn shape_at(&self, idx: usize) -> Option<&CanvasShape> {
        self.node(idx).map(ShapeNode::shape)
    }

    /// Mutably borrow the shape at `idx`
    pub fn shape_at_mut(&mut self, idx: usize) -> Option<&mut CanvasShape> {
        self.node_mut(idx).map(|node| &mut node.shape)
    }

    /// Destroy every shape, leaving an empty canvas.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long chain never recurses.
        let mut cur = self.front.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        if self.len > 0 {
            debug!(cleared = self.len, "clear");
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.front.as_deref(),
            remaining: self.len,
        }
    }

    /// Print every shape's description to stdout, one per line.
    pub fn draw(&self) -> io::Result<()> {
        self.draw_to(&mut io::stdout().lock())
    }

    /// Write every shape's description to `out`, one per line.
    pub fn draw_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for shape in self {
            writeln!(out, "{}", shape.describe())?;
        }
        Ok(())
    }

    /// Diagnostic report of where each node and its shape live in memory.
    pub fn write_addresses<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut cur = self.front.as_deref();
        while let Some(node) = cur {
            writeln!(
                out,
                "Node Address: {:p}    Shape Address: {:p}",
                node, &node.shape
            )?;
            cur = node.next.as_deref();
        }
        Ok(())
    }
}

impl Drop for CanvasList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for CanvasList {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Release every shape we own, then adopt copies of `source`'s shapes.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl fmt::Debug for CanvasList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for CanvasList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shape in self {
            writeln!(f, "{shape}")?;
        }
        Ok(())
    }
}

impl Extend<CanvasShape> for CanvasList {
    /// Appends in a single walk: find the tail once, then keep building on it.
    fn extend<I: IntoIterator<Item = CanvasShape>>(&mut self, iter: I) {
        let mut shapes = iter.into_iter();
        if self.front.is_none() {
            match shapes.next() {
                Some(first) => self.push_front(first),
                None => return,
            }
        }

        let mut added = 0;
        let mut tail = self.len.checked_sub(1).and_then(|last| self.node_mut(last));
        while let Some(last) = tail {
            let Some(shape) = shapes.next() else {
                break;
            };
            tail = Some(&mut **last.next.insert(ShapeNode::new(shape, None)));
            added += 1;
        }
        self.len += added;
        debug!(added, len = self.len, "extend");
    }
}

impl FromIterator<CanvasShape> for CanvasList {
    fn from_iter<I: IntoIterator<Item = CanvasShape>>(iter: I) -> Self {
        let mut list = CanvasList::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over the shapes of a canvas, front to back
pub struct Iter<'a> {
    next: Option<&'a ShapeNode>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CanvasShape;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.shape)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CanvasList {
    type Item = &'a CanvasShape;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that pops shapes off the front
pub struct IntoIter(CanvasList);

impl Iterator for IntoIter {
    type Item = CanvasShape;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for CanvasList {
    type Item = CanvasShape;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
