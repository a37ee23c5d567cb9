use std::path::PathBuf;

/// Errors raised while validating or querying a rectangle set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    #[error("rectangle {index} has a non-finite coordinate or dimension")]
    NonFinite { index: usize },

    #[error("rectangle {index} has a negative dimension (width {width}, height {height})")]
    NegativeDimension {
        index: usize,
        width: f64,
        height: f64,
    },

    #[error("integer grid holds {points} points, more than the limit of {limit}")]
    GridTooLarge { points: u128, limit: u64 },
}

/// Errors raised while reading a rectangle set from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Invalid(#[from] AnalyzerError),
}

pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;
