use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its lower-left corner.
///
/// The rectangle occupies the half-open region
/// `[x, x + width) × [y, y + height)`: the left and bottom edges are
/// inside, the right and top edges are not. Two rectangles that only
/// share an edge therefore never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    /// Horizontal extent. Expected to be `>= 0`.
    pub width: f64,
    /// Vertical extent. Expected to be `>= 0`.
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Exclusive top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// A rectangle with zero width or height covers no points.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns `true` if the two rectangles share a region of positive area.
    ///
    /// Rectangles that merely touch along an edge or at a corner do not
    /// overlap, and neither does an empty rectangle.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Returns the intersection of two overlapping rectangles.
    ///
    /// `None` unless [`Rect::overlaps`] holds, so a returned region always
    /// has a strictly positive width and height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Rect::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.top().min(other.top()) - y,
        ))
    }

    /// Half-open point test: left/bottom edges inclusive, right/top exclusive.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.top()
    }
}
