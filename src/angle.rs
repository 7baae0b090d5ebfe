//! Precomputed angle samples for center projection.

/// Number of angle samples in a full turn, one per integer degree.
pub const ANGLE_SAMPLES: usize = 360;

/// Cosine and sine of every integer degree in `[0, 360)`.
///
/// Built once per transform call and only read afterwards.
#[derive(Debug, Clone)]
pub struct AngleTable {
    trig: Vec<(f64, f64)>,
}

impl AngleTable {
    pub fn new() -> Self {
        let trig = (0..ANGLE_SAMPLES)
            .map(|deg| {
                let theta = (deg as f64).to_radians();
                (theta.cos(), theta.sin())
            })
            .collect();
        Self { trig }
    }

    /// `(cos θ, sin θ)` pairs in ascending angle order.
    #[inline]
    pub fn trig(&self) -> &[(f64, f64)] {
        &self.trig
    }

    pub fn len(&self) -> usize {
        self.trig.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trig.is_empty()
    }
}

impl Default for AngleTable {
    fn default() -> Self {
        Self::new()
    }
}
