//! Dense parameter-space vote array.

use crate::error::ConfigurationError;
use crate::params::validate_radius_range;

/// Vote counters over `(b, a, r)`: center row, center column and radius.
///
/// Stored as one flat buffer with offset `(b * width + a) * (r_max + 1) + r`.
/// Radius index 0 is allocated but never voted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    width: u32,
    height: u32,
    r_min: u32,
    r_max: u32,
    data: Vec<u32>,
}

impl Accumulator {
    /// Allocates a zeroed accumulator for a `width x height` image.
    ///
    /// The radius range is validated first; nothing is allocated on error.
    pub fn new(width: u32, height: u32, r_min: u32, r_max: u32) -> Result<Self, ConfigurationError> {
        validate_radius_range(r_min, r_max)?;
        let too_large = ConfigurationError::AccumulatorTooLarge {
            width,
            height,
            r_max,
        };
        let bins = r_max.checked_add(1).ok_or(too_large)?;
        let cells = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(bins as usize))
            .ok_or(too_large)?;
        debug!("accumulator {}x{}x{} ({} cells)", height, width, bins, cells);
        Ok(Self {
            width,
            height,
            r_min,
            r_max,
            data: vec![0; cells],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(height, width, r_max + 1)`, the shape of the parameter space.
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.height, self.width, self.r_max + 1)
    }

    /// Inclusive radius range that voting covers.
    pub fn radius_range(&self) -> (u32, u32) {
        (self.r_min, self.r_max)
    }

    /// Total number of counters, including the unused radius 0 slot.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn radius_bins(&self) -> usize {
        self.r_max as usize + 1
    }

    #[inline]
    fn offset(&self, a: u32, b: u32, r: u32) -> usize {
        (b as usize * self.width as usize + a as usize) * self.radius_bins() + r as usize
    }

    /// Votes for center `(a, b)` (column, row) at radius `r`.
    ///
    /// Returns 0 for coordinates outside the parameter space.
    pub fn votes(&self, a: u32, b: u32, r: u32) -> u32 {
        if a >= self.width || b >= self.height || r > self.r_max {
            return 0;
        }
        self.data[self.offset(a, b, r)]
    }

    /// Sum of all counters.
    pub fn total_votes(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    /// Adds one vote; callers guarantee the indices are in range.
    #[inline]
    pub(crate) fn increment(&mut self, a: usize, b: usize, r: usize) {
        let idx = (b * self.width as usize + a) * self.radius_bins() + r;
        self.data[idx] = self.data[idx].saturating_add(1);
    }

    /// Sums a row-major `width x height` vote plane into radius slot `r`.
    pub(crate) fn add_plane(&mut self, r: u32, plane: &[u32]) {
        debug_assert_eq!(plane.len(), self.width as usize * self.height as usize);
        let bins = self.radius_bins();
        let r = r as usize;
        for (pixel, &count) in plane.iter().enumerate() {
            if count != 0 {
                let idx = pixel * bins + r;
                self.data[idx] = self.data[idx].saturating_add(count);
            }
        }
    }
}
