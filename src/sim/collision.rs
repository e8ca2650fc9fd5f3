//! Axis-aligned rectangle collision
//!
//! Every entity in both games is an integer rectangle. Rectangles that merely
//! touch along an edge count as colliding.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// True if the rectangles overlap or share an edge
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.bottom() < other.top()
            || self.right() < other.left()
            || self.top() > other.bottom()
            || self.left() > other.right())
    }

    /// True if `self` lies entirely inside `bounds`
    pub fn within(&self, bounds: &Rect) -> bool {
        self.left() >= bounds.left()
            && self.right() <= bounds.right()
            && self.top() >= bounds.top()
            && self.bottom() <= bounds.bottom()
    }
}
