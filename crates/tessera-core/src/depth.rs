//! Search for the point covered by the most rectangles.
//!
//! Two strategies are available:
//!
//! - [`max_overlap_point`] walks the cells of a [`CellGrid`]. It is
//!   exact for any finite coordinates.
//! - [`max_overlap_point_on_grid`] scans every integer point of the
//!   bounding box. It only finds the true maximum when that maximum
//!   sits on an integer point, which holds for integer inputs.
//!
//! Both report the first maximum in x-major, then y, scan order. For
//! integer inputs they agree: the lower-left corner of the first
//! deepest cell is the first deepest integer point.

use serde::Serialize;

use crate::Rect;
use crate::coverage::{CellGrid, depth_at};
use crate::error::{AnalyzerError, Result};

/// A point of maximum stacking depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxOverlapPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Number of rectangles covering `(x, y)`.
    pub count: usize,
}

impl MaxOverlapPoint {
    /// Result when no point is covered at all.
    pub const NONE: Self = Self {
        x: None,
        y: None,
        count: 0,
    };

    fn at(x: f64, y: f64, count: usize) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            count,
        }
    }
}

/// Finds the deepest point by cell decomposition.
///
/// Every rectangle covering a cell also covers its lower-left corner
/// (left and bottom edges are inclusive), and no other rectangle does,
/// so the corner is reported as the witness point.
pub fn max_overlap_point(rects: &[Rect]) -> MaxOverlapPoint {
    let mut best = MaxOverlapPoint::NONE;
    for cell in CellGrid::new(rects).cells() {
        let count = depth_at(rects, cell.mid_x(), cell.mid_y());
        if count > best.count {
            best = MaxOverlapPoint::at(cell.x0, cell.y0, count);
        }
    }
    best
}

/// Finds the deepest integer point inside the bounding box.
///
/// The scan covers `floor(min_x)..=ceil(max_x)` by
/// `floor(min_y)..=ceil(max_y)`, including the exclusive right and top
/// edges themselves. Fails with [`AnalyzerError::GridTooLarge`] when the
/// box holds more than `limit` points.
pub fn max_overlap_point_on_grid(rects: &[Rect], limit: u64) -> Result<MaxOverlapPoint> {
    let Some((min_x, max_x, min_y, max_y)) = integer_bounds(rects) else {
        return Ok(MaxOverlapPoint::NONE);
    };

    let columns = (i128::from(max_x) - i128::from(min_x) + 1) as u128;
    let rows = (i128::from(max_y) - i128::from(min_y) + 1) as u128;
    let points = columns * rows;
    if points > u128::from(limit) {
        return Err(AnalyzerError::GridTooLarge { points, limit });
    }

    let mut best = MaxOverlapPoint::NONE;
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let (px, py) = (x as f64, y as f64);
            let count = depth_at(rects, px, py);
            if count > best.count {
                best = MaxOverlapPoint::at(px, py, count);
            }
        }
    }
    Ok(best)
}

fn integer_bounds(rects: &[Rect]) -> Option<(i64, i64, i64, i64)> {
    let first = rects.first()?;
    let (mut min_x, mut max_x) = (first.x, first.right());
    let (mut min_y, mut max_y) = (first.y, first.top());
    for r in &rects[1..] {
        min_x = min_x.min(r.x);
        max_x = max_x.max(r.right());
        min_y = min_y.min(r.y);
        max_y = max_y.max(r.top());
    }
    Some((
        min_x.floor() as i64,
        max_x.ceil() as i64,
        min_y.floor() as i64,
        max_y.ceil() as i64,
    ))
}
