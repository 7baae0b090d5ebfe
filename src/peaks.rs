//! Threshold scan of a populated accumulator.

use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;
use crate::error::ConfigurationError;

/// A detected circle: center column, center row and radius in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CircleCandidate {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: u32,
}

impl CircleCandidate {
    pub fn new(center_x: u32, center_y: u32, radius: u32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

impl From<CircleCandidate> for (u32, u32, u32) {
    fn from(c: CircleCandidate) -> Self {
        (c.center_x, c.center_y, c.radius)
    }
}

/// Reports every cell with at least `threshold` votes.
///
/// Cells are visited in ascending `(b, a, r)` order (row, column, radius) and
/// only radii in the accumulator's voted range are considered. Neighbouring
/// cells of one circle are all reported; there is no suppression.
pub fn extract_peaks(
    accumulator: &Accumulator,
    threshold: u32,
) -> Result<Vec<CircleCandidate>, ConfigurationError> {
    if threshold == 0 {
        return Err(ConfigurationError::ZeroThreshold);
    }
    let (r_min, r_max) = accumulator.radius_range();
    let mut circles = Vec::new();
    for b in 0..accumulator.height() {
        for a in 0..accumulator.width() {
            for r in r_min..=r_max {
                if accumulator.votes(a, b, r) >= threshold {
                    circles.push(CircleCandidate::new(a, b, r));
                }
            }
        }
    }
    debug!("{} cells reached threshold {}", circles.len(), threshold);
    Ok(circles)
}
