use crate::coverage::{self, CellGrid};
use crate::depth::{self, MaxOverlapPoint};
use crate::error::{AnalyzerError, Result};
use crate::overlap::{self, OverlapPair, OverlapRegion};
use crate::stats::{self, CoverageStats};
use crate::{Rect, log_debug};

/// Read-only queries over a fixed, ordered set of rectangles.
///
/// Rectangles are addressed by their position in the input. Every query
/// recomputes its answer from scratch, so calls can be repeated or
/// interleaved freely.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleAnalyzer {
    rects: Vec<Rect>,
}

impl RectangleAnalyzer {
    /// Creates an analyzer after validating every rectangle.
    ///
    /// Rejects non-finite values, including right or top edges that
    /// overflow, and negative widths or heights. Zero dimensions are
    /// allowed; such a rectangle covers nothing.
    pub fn new(rects: Vec<Rect>) -> Result<Self> {
        for (index, r) in rects.iter().enumerate() {
            let values = [r.x, r.y, r.width, r.height, r.right(), r.top()];
            if !values.iter().all(|v| v.is_finite()) {
                return Err(AnalyzerError::NonFinite { index });
            }
            if r.width < 0.0 || r.height < 0.0 {
                return Err(AnalyzerError::NegativeDimension {
                    index,
                    width: r.width,
                    height: r.height,
                });
            }
        }
        Ok(Self { rects })
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns every overlapping pair `(i, j)`, `i < j`, in ascending order.
    pub fn find_overlaps(&self) -> Vec<OverlapPair> {
        let pairs = overlap::find_overlaps(&self.rects);
        log_debug!(
            "overlaps: {} rectangles form {} overlapping pairs",
            self.rects.len(),
            pairs.len()
        );
        pairs
    }

    /// Returns the exact area of the union of all rectangles.
    pub fn calculate_coverage_area(&self) -> f64 {
        let grid = CellGrid::new(&self.rects);
        log_debug!("coverage: scanning {} cells", grid.len());
        grid.covered_area(&self.rects)
    }

    /// Returns the intersection rectangle of every overlapping pair,
    /// in the same order as [`Self::find_overlaps`].
    pub fn get_overlap_regions(&self) -> Vec<OverlapRegion> {
        let regions = overlap::overlap_regions(&self.rects);
        log_debug!("regions: {} intersections extracted", regions.len());
        regions
    }

    /// Returns `true` if at least one rectangle contains `(x, y)`.
    pub fn is_point_covered(&self, x: f64, y: f64) -> bool {
        coverage::is_point_covered(&self.rects, x, y)
    }

    /// Returns a point of maximum stacking depth, found exactly by cell
    /// decomposition. See [`depth::max_overlap_point`].
    pub fn find_max_overlap_point(&self) -> MaxOverlapPoint {
        let best = depth::max_overlap_point(&self.rects);
        log_debug!("max overlap (cells): depth {}", best.count);
        best
    }

    /// Returns a point of maximum stacking depth by scanning integer
    /// points only. See [`depth::max_overlap_point_on_grid`].
    pub fn find_max_overlap_point_on_grid(&self, limit: u64) -> Result<MaxOverlapPoint> {
        let best = depth::max_overlap_point_on_grid(&self.rects, limit)?;
        log_debug!("max overlap (grid): depth {}", best.count);
        Ok(best)
    }

    pub fn get_stats(&self) -> CoverageStats {
        let stats = stats::coverage_stats(&self.rects);
        log_debug!(
            "stats: {} rectangles, {} pairs, efficiency {:.4}",
            stats.total_rectangles,
            stats.overlapping_pairs,
            stats.coverage_efficiency
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(rects: &[(f64, f64, f64, f64)]) -> RectangleAnalyzer {
        let rects = rects
            .iter()
            .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
            .collect();
        RectangleAnalyzer::new(rects).unwrap()
    }

    #[test]
    fn two_rectangle_scenario() {
        // Arrange
        let a = analyzer(&[(0.0, 0.0, 4.0, 3.0), (2.0, 1.0, 3.0, 3.0)]);

        // Act / Assert
        assert_eq!(a.find_overlaps(), vec![(0, 1)]);
        assert_eq!(a.calculate_coverage_area(), 17.0);
        let regions = a.get_overlap_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].region, Rect::new(2.0, 1.0, 2.0, 2.0));
        assert_eq!(a.find_max_overlap_point().count, 2);
    }

    #[test]
    fn nested_scenario() {
        let a = analyzer(&[(0.0, 0.0, 10.0, 10.0), (2.0, 2.0, 3.0, 3.0)]);
        assert_eq!(a.find_overlaps(), vec![(0, 1)]);
        assert_eq!(a.calculate_coverage_area(), 100.0);
    }

    #[test]
    fn triple_overlap_scenario() {
        // Arrange
        let a = analyzer(&[
            (0.0, 0.0, 4.0, 3.0),
            (2.0, 1.0, 3.0, 3.0),
            (1.0, 2.0, 2.0, 4.0),
        ]);

        // Act
        let best = a.find_max_overlap_point();

        // Assert
        assert_eq!(a.find_overlaps(), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(a.calculate_coverage_area(), 22.0);
        assert_eq!(a.get_overlap_regions().len(), 3);
        assert_eq!((best.x, best.y, best.count), (Some(2.0), Some(2.0), 3));
    }

    #[test]
    fn empty_scenario() {
        // Arrange
        let a = RectangleAnalyzer::new(Vec::new()).unwrap();

        // Assert
        assert!(a.is_empty());
        assert!(a.find_overlaps().is_empty());
        assert_eq!(a.calculate_coverage_area(), 0.0);
        assert!(a.get_overlap_regions().is_empty());
        assert!(!a.is_point_covered(0.0, 0.0));
        assert!(!a.is_point_covered(-7.5, 1e9));
        assert_eq!(a.find_max_overlap_point(), MaxOverlapPoint::NONE);
        assert_eq!(a.get_stats().coverage_efficiency, 0.0);
    }

    #[test]
    fn hundred_identical_scenario() {
        let a = RectangleAnalyzer::new(vec![Rect::new(0.0, 0.0, 10.0, 10.0); 100]).unwrap();
        assert_eq!(a.find_overlaps().len(), 100 * 99 / 2);
        assert_eq!(a.calculate_coverage_area(), 100.0);
    }

    #[test]
    fn point_boundary_scenario() {
        let a = analyzer(&[(0.0, 0.0, 4.0, 3.0)]);
        assert!(a.is_point_covered(0.0, 0.0));
        assert!(!a.is_point_covered(4.0, 3.0));
    }

    #[test]
    fn union_bounded_by_individual_sum() {
        // Arrange
        let sets = [
            analyzer(&[(0.0, 0.0, 2.0, 2.0), (10.0, 10.0, 3.0, 3.0)]),
            analyzer(&[(0.0, 0.0, 4.0, 3.0), (2.0, 1.0, 3.0, 3.0)]),
            analyzer(&[(0.0, 0.0, 2.0, 2.0), (2.0, 0.0, 2.0, 2.0)]),
        ];

        for a in &sets {
            // Act
            let stats = a.get_stats();

            // Assert
            assert!(stats.total_area >= 0.0);
            assert!(stats.total_area <= stats.individual_area);
            assert_eq!(
                stats.total_area == stats.individual_area,
                a.find_overlaps().is_empty()
            );
        }
    }

    #[test]
    fn queries_are_repeatable() {
        let a = analyzer(&[
            (0.0, 0.0, 4.0, 3.0),
            (2.0, 1.0, 3.0, 3.0),
            (1.0, 2.0, 2.0, 4.0),
        ]);
        assert_eq!(a.find_overlaps(), a.find_overlaps());
        assert_eq!(a.get_overlap_regions(), a.get_overlap_regions());
        assert_eq!(a.calculate_coverage_area(), a.calculate_coverage_area());
        assert_eq!(a.find_max_overlap_point(), a.find_max_overlap_point());
        assert_eq!(a.get_stats(), a.get_stats());
    }

    #[test]
    fn grid_strategy_through_analyzer() {
        let a = analyzer(&[(0.0, 0.0, 4.0, 3.0), (2.0, 1.0, 3.0, 3.0)]);
        let best = a.find_max_overlap_point_on_grid(1_000).unwrap();
        assert_eq!(best, a.find_max_overlap_point());
    }

    #[test]
    fn rejects_negative_dimensions() {
        // Act
        let err = RectangleAnalyzer::new(vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, -2.0, 1.0),
        ])
        .unwrap_err();

        // Assert
        assert_eq!(
            err,
            AnalyzerError::NegativeDimension {
                index: 1,
                width: -2.0,
                height: 1.0
            }
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = RectangleAnalyzer::new(vec![Rect::new(f64::NAN, 0.0, 1.0, 1.0)]).unwrap_err();
        assert_eq!(err, AnalyzerError::NonFinite { index: 0 });

        let err =
            RectangleAnalyzer::new(vec![Rect::new(0.0, 0.0, f64::INFINITY, 1.0)]).unwrap_err();
        assert_eq!(err, AnalyzerError::NonFinite { index: 0 });
    }

    #[test]
    fn rejects_edges_that_overflow() {
        // Arrange: every field is finite but x + width is not
        let wide = Rect::new(1e308, 0.0, 1e308, 1.0);
        let tall = Rect::new(0.0, 1e308, 1.0, 1e308);

        // Act
        let wide_err = RectangleAnalyzer::new(vec![wide]).unwrap_err();
        let tall_err =
            RectangleAnalyzer::new(vec![Rect::new(0.0, 0.0, 1.0, 1.0), tall]).unwrap_err();

        // Assert
        assert_eq!(wide_err, AnalyzerError::NonFinite { index: 0 });
        assert_eq!(tall_err, AnalyzerError::NonFinite { index: 1 });
    }

    #[test]
    fn large_finite_rect_keeps_union_equal_to_area() {
        let a = analyzer(&[(1e300, 0.0, 1e300, 1.0)]);
        assert_eq!(a.calculate_coverage_area(), 1e300);
        assert_eq!(a.find_max_overlap_point().count, 1);
    }

    #[test]
    fn accepts_zero_dimensions() {
        let a = analyzer(&[(0.0, 0.0, 0.0, 0.0), (1.0, 1.0, 2.0, 0.0)]);
        assert_eq!(a.len(), 2);
        assert!(a.find_overlaps().is_empty());
        assert_eq!(a.calculate_coverage_area(), 0.0);
    }
}
