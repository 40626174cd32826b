//! Axis-aligned rectangle geometry shared by every entity
//!
//! Screen-space convention: origin at the top-left, y grows downward, so a
//! rectangle's `top()` is its smallest y and `bottom()` its largest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if this box pokes out past either horizontal edge of `other`
    pub fn exceeds_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.left() || self.right() > other.right()
    }

    /// Move so the bottom edge sits exactly at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(5.0, 5.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_exceeds_horizontally() {
        let platform = Rect::new(300.0, 500.0, 200.0, 20.0);
        assert!(!Rect::new(300.0, 460.0, 40.0, 40.0).exceeds_horizontally(&platform));
        assert!(Rect::new(299.0, 460.0, 40.0, 40.0).exceeds_horizontally(&platform));
        assert!(Rect::new(461.0, 460.0, 40.0, 40.0).exceeds_horizontally(&platform));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(0.0, 0.0, 40.0, 40.0);
        r.set_bottom(580.0);
        assert_eq!(r.pos.y, 540.0);
        assert_eq!(r.bottom(), 580.0);
    }
}
