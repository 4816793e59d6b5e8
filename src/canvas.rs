//! Drawing targets.
//!
//! Everything in the game draws through [`Canvas`], which only knows filled
//! circles and filled axis-aligned rectangles in play-field pixels (origin top
//! left, y down). Two targets exist:
//!
//! - [`DrawList`] records the shapes. The GPU renderer uploads one per frame,
//!   and tests compare them.
//! - `image::RgbaImage` rasterizes directly (see [`crate::raster`]).

use crate::color::Rgba8;
use glam::Vec2;

/// A surface that can draw filled shapes.
pub trait Canvas {
    /// Filled circle centered on `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba8);

    /// Filled rectangle with top-left corner `min`.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba8);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba8) {
        (**self).fill_circle(center, radius, color);
    }

    #[inline]
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba8) {
        (**self).fill_rect(min, size, color);
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32, color: Rgba8 },
    Rect { min: Vec2, size: Vec2, color: Rgba8 },
}

impl Shape {
    pub fn color(&self) -> Rgba8 {
        match self {
            Shape::Circle { color, .. } | Shape::Rect { color, .. } => *color,
        }
    }
}

/// A [`Canvas`] that records shapes in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded shapes, keeping the allocation.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba8)> + '_ {
        self.shapes.iter().filter_map(|shape| match *shape {
            Shape::Circle { center, radius, color } => Some((center, radius, color)),
            Shape::Rect { .. } => None,
        })
    }

    /// Draw every recorded shape onto another canvas, in order.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for shape in &self.shapes {
            match *shape {
                Shape::Circle { center, radius, color } => target.fill_circle(center, radius, color),
                Shape::Rect { min, size, color } => target.fill_rect(min, size, color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba8) {
        self.shapes.push(Shape::Circle { center, radius, color });
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba8) {
        self.shapes.push(Shape::Rect { min, size, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Vec2::ZERO, Vec2::splat(4.0), Rgba8::WHITE);
        list.fill_circle(Vec2::ONE, 2.0, Rgba8::RED);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.shapes()[0], Shape::Rect { .. }));
        assert_eq!(list.circles().count(), 1);
        assert_eq!(list.shapes()[1].color(), Rgba8::RED);
    }

    #[test]
    fn test_replay_copies_shapes() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::new(3.0, 4.0), 1.0, Rgba8::WHITE);
        list.fill_rect(Vec2::ZERO, Vec2::ONE, Rgba8::BLACK);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }

    #[test]
    fn test_clear() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ZERO, 1.0, Rgba8::WHITE);
        list.clear();
        assert!(list.is_empty());
    }
}
