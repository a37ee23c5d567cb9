//! Pairwise overlap detection and intersection extraction.
//!
//! Both passes are plain O(n²) scans over every unordered pair. Pairs
//! are visited with `i < j`, `i` ascending then `j` ascending, which is
//! also the order of the returned results.

use serde::Serialize;

use crate::Rect;

/// Indices `(i, j)` of two overlapping rectangles, always with `i < j`.
pub type OverlapPair = (usize, usize);

/// The intersection of one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlapRegion {
    pub rect_indices: OverlapPair,
    /// Always has a strictly positive width and height.
    pub region: Rect,
}

impl OverlapRegion {
    pub fn area(&self) -> f64 {
        self.region.area()
    }
}

/// Returns every pair of rectangles whose interiors intersect.
pub fn find_overlaps(rects: &[Rect]) -> Vec<OverlapPair> {
    pairs(rects)
        .filter(|&(i, j)| rects[i].overlaps(&rects[j]))
        .collect()
}

/// Returns the intersection rectangle of every overlapping pair.
pub fn overlap_regions(rects: &[Rect]) -> Vec<OverlapRegion> {
    pairs(rects)
        .filter_map(|(i, j)| {
            rects[i]
                .intersection(&rects[j])
                .map(|region| OverlapRegion {
                    rect_indices: (i, j),
                    region,
                })
        })
        .collect()
}

fn pairs(rects: &[Rect]) -> impl Iterator<Item = OverlapPair> {
    let n = rects.len();
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}
