//! # Hough Circle Transform Library
//!
//! This crate detects circles in binary edge images by brute-force voting in
//! the `(center_y, center_x, radius)` parameter space. Every edge pixel votes
//! for all centers it could lie on a circle around, for every radius in the
//! requested range and 360 one-degree angle samples. Cells of the accumulator
//! that collect enough votes are reported as circle candidates.
//!
//! ## Features
//!
//! - Dense 3-D accumulator in a single flat buffer
//! - Sequential and rayon-parallel voting with identical vote counts
//! - Deterministic candidate order: ascending row, column, radius
//! - Canny edge-map construction and circle overlay helpers built on `imageproc`
//! - Optional debug logging (enable with `logger` feature)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use image::open;
//! use hough_circle::{hough_circle_transform, CannyParams, EdgeMap};
//!
//! let gray = open("coins.png").unwrap().to_luma8();
//! let edges = EdgeMap::from_canny(&gray, &CannyParams::default());
//!
//! let circles = hough_circle_transform(&edges, 30, 40, 150).unwrap();
//! for c in &circles {
//!     println!("circle at ({}, {}) r={}", c.center_x, c.center_y, c.radius);
//! }
//! ```
//!
//! ## Re-thresholding
//!
//! Voting dominates the cost, so the accumulator can be kept and scanned with
//! several thresholds:
//!
//! ```rust,no_run
//! use hough_circle::{extract_peaks, transform_accumulator, EdgeMap, HoughCircleParams};
//!
//! let edges = EdgeMap::from_fn(64, 64, |x, y| {
//!     let d = ((x as f32 - 32.0).powi(2) + (y as f32 - 32.0).powi(2)).sqrt();
//!     (d - 12.0).abs() < 0.5
//! });
//! let accumulator = transform_accumulator(&edges, &HoughCircleParams::new(10, 14, 1)).unwrap();
//! let loose = extract_peaks(&accumulator, 60).unwrap();
//! let strict = extract_peaks(&accumulator, 150).unwrap();
//! assert!(strict.len() <= loose.len());
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! ```toml
//! [dependencies]
//! hough-circle = { version = "0.1.0", features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! With the feature enabled the pipeline reports its stages at debug level:
//!
//! ```text
//! DEBUG hough_circle: 412 edge pixels, radii 30..=40
//! DEBUG hough_circle::accumulator: accumulator 480x640x41 (12595200 cells)
//! DEBUG hough_circle::voting: cast 1631520 votes over 11 radii in parallel
//! DEBUG hough_circle::peaks: 7 cells reached threshold 150
//! ```

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub mod accumulator;
pub mod angle;
pub mod edge_map;
pub mod error;
pub mod params;
pub mod peaks;
pub mod visualize;
pub mod voting;

pub use accumulator::Accumulator;
pub use angle::{AngleTable, ANGLE_SAMPLES};
pub use edge_map::EdgeMap;
pub use error::{ConfigurationError, EdgeMapError};
pub use params::{CannyParams, HoughCircleParams};
pub use peaks::{extract_peaks, CircleCandidate};
pub use visualize::{visualize_circles, visualize_circles_gray};
pub use voting::{cast_votes, cast_votes_parallel};

/// Runs the full transform on `edges` and returns every circle candidate.
///
/// # Arguments
///
/// * `edges` - Binary edge map, e.g. from [`EdgeMap::from_canny`]
/// * `r_min` - Smallest radius searched, at least 1
/// * `r_max` - Largest radius searched, inclusive
/// * `threshold` - Minimum votes for a cell to be reported, at least 1
///
/// # Returns
///
/// Candidates ordered by center row, then center column, then radius. The
/// same input always produces the same sequence. Neighbouring cells of a single
/// circle are all reported.
///
/// # Errors
///
/// [`ConfigurationError`] if `r_min == 0`, `r_max < r_min` or `threshold == 0`.
/// Validation runs before the accumulator is allocated.
///
/// # Examples
///
/// ```rust
/// use hough_circle::{hough_circle_transform, ConfigurationError, EdgeMap};
///
/// let edges = EdgeMap::from_fn(32, 32, |_, _| false);
/// assert!(hough_circle_transform(&edges, 3, 8, 10).unwrap().is_empty());
///
/// assert_eq!(
///     hough_circle_transform(&edges, 10, 5, 10),
///     Err(ConfigurationError::InvalidRadiusRange { r_min: 10, r_max: 5 })
/// );
/// ```
pub fn hough_circle_transform(
    edges: &EdgeMap,
    r_min: u32,
    r_max: u32,
    threshold: u32,
) -> Result<Vec<CircleCandidate>, ConfigurationError> {
    let params = HoughCircleParams::new(r_min, r_max, threshold).with_parallel(true);
    hough_circle_transform_with_params(edges, &params)
}

/// [`hough_circle_transform`] driven by a [`HoughCircleParams`].
pub fn hough_circle_transform_with_params(
    edges: &EdgeMap,
    params: &HoughCircleParams,
) -> Result<Vec<CircleCandidate>, ConfigurationError> {
    params.validate()?;
    let accumulator = transform_accumulator(edges, params)?;
    extract_peaks(&accumulator, params.threshold)
}

/// Builds and populates the accumulator without extracting peaks.
///
/// Only the radius range of `params` is used; the threshold is ignored.
pub fn transform_accumulator(
    edges: &EdgeMap,
    params: &HoughCircleParams,
) -> Result<Accumulator, ConfigurationError> {
    let (width, height) = edges.dimensions();
    let mut accumulator = Accumulator::new(width, height, params.r_min, params.r_max)?;
    debug!(
        "{} edge pixels, radii {}..={}",
        edges.edge_count(),
        params.r_min,
        params.r_max
    );

    let angles = AngleTable::new();
    if params.parallel {
        cast_votes_parallel(edges, &mut accumulator, &angles);
    } else {
        cast_votes(edges, &mut accumulator, &angles);
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(width: u32, height: u32, cx: f64, cy: f64, r: f64) -> EdgeMap {
        EdgeMap::from_fn(width, height, |x, y| {
            ((x as f64 - cx).hypot(y as f64 - cy) - r).abs() < 0.5
        })
    }

    #[test]
    fn test_logger_feature_compilation() {
        debug!("Test debug message");
        debug!("Processing data: {}", 42);

        let edges = ring(16, 16, 8.0, 8.0, 4.0);
        let circles = hough_circle_transform(&edges, 3, 5, 1).unwrap();
        assert!(!circles.is_empty());
    }

    #[test]
    fn invalid_configuration_fails_before_voting() {
        let edges = ring(16, 16, 8.0, 8.0, 4.0);
        assert_eq!(
            hough_circle_transform(&edges, 10, 5, 1),
            Err(ConfigurationError::InvalidRadiusRange { r_min: 10, r_max: 5 })
        );
        assert_eq!(
            hough_circle_transform(&edges, 0, 5, 1),
            Err(ConfigurationError::ZeroMinRadius)
        );
        assert_eq!(
            hough_circle_transform(&edges, 1, 5, 0),
            Err(ConfigurationError::ZeroThreshold)
        );
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let edges = ring(40, 36, 19.0, 17.0, 8.0);
        let seq = HoughCircleParams::new(6, 10, 40);
        let par = seq.with_parallel(true);
        assert_eq!(
            transform_accumulator(&edges, &seq).unwrap(),
            transform_accumulator(&edges, &par).unwrap()
        );
        assert_eq!(
            hough_circle_transform_with_params(&edges, &seq).unwrap(),
            hough_circle_transform_with_params(&edges, &par).unwrap()
        );
    }

    #[test]
    fn degenerate_images_yield_nothing() {
        let empty = EdgeMap::from_fn(0, 0, |_, _| true);
        assert!(hough_circle_transform(&empty, 1, 3, 1).unwrap().is_empty());

        let blank = EdgeMap::from_fn(12, 9, |_, _| false);
        let acc = transform_accumulator(&blank, &HoughCircleParams::new(1, 4, 1)).unwrap();
        assert_eq!(acc.total_votes(), 0);
        assert_eq!(acc.len(), 12 * 9 * 5);
    }
}
