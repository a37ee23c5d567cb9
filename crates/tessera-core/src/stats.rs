use serde::Serialize;

use crate::Rect;
use crate::coverage::union_area;
use crate::overlap::overlap_regions;

/// Aggregate coverage figures for a rectangle set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageStats {
    pub total_rectangles: usize,
    pub overlapping_pairs: usize,
    /// Union area: every covered unit counted once.
    pub total_area: f64,
    /// Sum of the pairwise intersection areas.
    ///
    /// Not corrected by inclusion-exclusion, so a region shared by three
    /// rectangles contributes once for each of its three pairs.
    pub overlap_area: f64,
    /// Sum of the individual rectangle areas.
    pub individual_area: f64,
    /// `total_area / individual_area`, or `0.0` when the latter is zero.
    pub coverage_efficiency: f64,
}

pub fn coverage_stats(rects: &[Rect]) -> CoverageStats {
    let regions = overlap_regions(rects);
    let total_area = union_area(rects);
    let individual_area: f64 = rects.iter().map(Rect::area).sum();
    let coverage_efficiency = if individual_area > 0.0 {
        total_area / individual_area
    } else {
        0.0
    };

    CoverageStats {
        total_rectangles: rects.len(),
        overlapping_pairs: regions.len(),
        total_area,
        overlap_area: regions.iter().map(|r| r.area()).sum(),
        individual_area,
        coverage_efficiency,
    }
}
