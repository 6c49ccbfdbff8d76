use serde::{Deserialize, Serialize};

/// Parameters of the gamma growth curve citations are assumed to follow.
///
/// `GammaCDF(x; shape, scale) = P(shape, x / scale)` where `P` is the
/// regularized lower incomplete gamma function.
///
/// `location` is carried with the fitted parameters but never applied:
/// the curve is evaluated at the raw age, not at `age - location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthModelParameters {
    pub shape: f64,
    pub location: f64,
    pub scale: f64,
}

impl GrowthModelParameters {
    /// Gamma fit of cumulative citations over a 10-year window
    /// (Figure 3, <https://doi.org/10.3152/147154403781776645>).
    pub const REFERENCE: Self = Self {
        shape: 3.2923,
        location: 0.2378,
        scale: 2.0036,
    };

    /// Rate parameter (`1 / scale`), as taken by rate-parameterized gamma
    /// implementations.
    pub fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

impl Default for GrowthModelParameters {
    fn default() -> Self {
        Self::REFERENCE
    }
}
