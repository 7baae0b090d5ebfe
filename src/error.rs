//! Error types returned by the circle transform and the edge-map constructors.

/// Invalid transform parameters.
///
/// Every variant is detected before the accumulator is allocated, so a failed
/// call never leaves partial state behind.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("minimum radius must be at least 1")]
    ZeroMinRadius,
    #[error("invalid radius range: r_max ({r_max}) < r_min ({r_min})")]
    InvalidRadiusRange { r_min: u32, r_max: u32 },
    #[error("vote threshold must be greater than 0")]
    ZeroThreshold,
    #[error("accumulator for {width}x{height} image with r_max={r_max} does not fit in memory")]
    AccumulatorTooLarge { width: u32, height: u32, r_max: u32 },
}

/// Errors building an [`EdgeMap`](crate::EdgeMap) from raw data.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMapError {
    #[error("edge buffer of length {len} does not match {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, len: usize },
}
