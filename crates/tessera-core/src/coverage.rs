//! Point coverage and exact union area.
//!
//! The union is measured by coordinate decomposition: every left/right
//! edge becomes an x boundary and every bottom/top edge a y boundary.
//! Consecutive boundaries cut the plane into cells that no rectangle
//! edge crosses, so each cell is either fully covered or fully empty
//! and testing its midpoint classifies it exactly.

use crate::Rect;

/// Returns `true` if any rectangle contains the point (half-open test).
pub fn is_point_covered(rects: &[Rect], x: f64, y: f64) -> bool {
    rects.iter().any(|r| r.contains_point(x, y))
}

/// Number of rectangles containing the point.
pub fn depth_at(rects: &[Rect], x: f64, y: f64) -> usize {
    rects.iter().filter(|r| r.contains_point(x, y)).count()
}

/// Area covered by at least one rectangle, each unit counted once.
pub fn union_area(rects: &[Rect]) -> f64 {
    CellGrid::new(rects).covered_area(rects)
}

/// Sorted, deduplicated edge coordinates of a rectangle set.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// One cell `[x0, x1) × [y0, y1)` between consecutive grid boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl CellGrid {
    pub fn new(rects: &[Rect]) -> Self {
        Self {
            xs: boundaries(rects.iter().flat_map(|r| [r.x, r.right()])),
            ys: boundaries(rects.iter().flat_map(|r| [r.y, r.top()])),
        }
    }

    /// Number of cells the grid decomposes into.
    pub fn len(&self) -> usize {
        self.xs.len().saturating_sub(1) * self.ys.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums the area of every cell whose midpoint `rects` cover.
    ///
    /// Exact only when the grid was built from the same `rects`.
    pub fn covered_area(&self, rects: &[Rect]) -> f64 {
        self.cells()
            .filter(|cell| is_point_covered(rects, cell.mid_x(), cell.mid_y()))
            .map(|cell| cell.area())
            .sum()
    }

    /// Iterates cells x-major: all cells of the first column bottom to
    /// top, then the next column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.xs.windows(2).flat_map(move |xw| {
            self.ys.windows(2).map(move |yw| Cell {
                x0: xw[0],
                x1: xw[1],
                y0: yw[0],
                y1: yw[1],
            })
        })
    }
}

impl Cell {
    pub fn mid_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    pub fn area(&self) -> f64 {
        (self.x1 - self.x0) * (self.y1 - self.y0)
    }
}

fn boundaries(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}
