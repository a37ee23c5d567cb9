pub mod analyzer;
pub mod config;
pub mod coverage;
pub mod depth;
pub mod error;
pub mod input;
pub mod log;
pub mod overlap;
pub mod rect;
pub mod stats;

pub use analyzer::RectangleAnalyzer;
pub use config::{Config, DepthSearch};
pub use depth::MaxOverlapPoint;
pub use error::{AnalyzerError, LoadError};
pub use overlap::{OverlapPair, OverlapRegion};
pub use rect::Rect;
pub use stats::CoverageStats;
