//! Transform and edge-detection configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Parameters of the Hough circle transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughCircleParams {
    /// Smallest radius voted for (pixels, inclusive, at least 1).
    pub r_min: u32,
    /// Largest radius voted for (pixels, inclusive).
    pub r_max: u32,
    /// Minimum accumulator count for a cell to be reported.
    pub threshold: u32,
    /// Vote with rayon, one worker per radius.
    pub parallel: bool,
}

impl Default for HoughCircleParams {
    fn default() -> Self {
        Self {
            r_min: 30,
            r_max: 40,
            threshold: 150,
            parallel: true,
        }
    }
}

impl HoughCircleParams {
    /// Sequential parameters for the given radius range and threshold.
    pub fn new(r_min: u32, r_max: u32, threshold: u32) -> Self {
        Self {
            r_min,
            r_max,
            threshold,
            parallel: false,
        }
    }

    /// Same parameters with parallel voting switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of radii voted for.
    pub fn radius_count(&self) -> u32 {
        self.r_max.saturating_sub(self.r_min) + 1
    }

    /// Checks the radius range and the threshold.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_radius_range(self.r_min, self.r_max)?;
        if self.threshold == 0 {
            return Err(ConfigurationError::ZeroThreshold);
        }
        Ok(())
    }
}

pub(crate) fn validate_radius_range(r_min: u32, r_max: u32) -> Result<(), ConfigurationError> {
    if r_min < 1 {
        return Err(ConfigurationError::ZeroMinRadius);
    }
    if r_max < r_min {
        return Err(ConfigurationError::InvalidRadiusRange { r_min, r_max });
    }
    Ok(())
}

/// Hysteresis thresholds for [`EdgeMap::from_canny`](crate::EdgeMap::from_canny).
///
/// Defaults match the usual 1:3 Canny ratio (50 / 150).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert_eq!(HoughCircleParams::default().validate(), Ok(()));
        assert_eq!(HoughCircleParams::default().radius_count(), 11);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let params = HoughCircleParams::new(10, 5, 1);
        assert_eq!(
            params.validate(),
            Err(ConfigurationError::InvalidRadiusRange { r_min: 10, r_max: 5 })
        );
    }

    #[test]
    fn zero_radius_and_zero_threshold_are_rejected() {
        assert_eq!(
            HoughCircleParams::new(0, 5, 1).validate(),
            Err(ConfigurationError::ZeroMinRadius)
        );
        assert_eq!(
            HoughCircleParams::new(1, 5, 0).validate(),
            Err(ConfigurationError::ZeroThreshold)
        );
    }

    #[test]
    fn single_radius_range_is_valid() {
        let params = HoughCircleParams::new(7, 7, 3);
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.radius_count(), 1);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: HoughCircleParams =
            serde_json::from_str(r#"{ "r_min": 5, "threshold": 20 }"#).unwrap();
        assert_eq!(params.r_min, 5);
        assert_eq!(params.r_max, 40);
        assert_eq!(params.threshold, 20);
        assert!(params.parallel);

        let canny: CannyParams = serde_json::from_str("{}").unwrap();
        assert_eq!(canny, CannyParams::default());
    }
}
