use serde::{Deserialize, Serialize};

/// Intermediate values of one projection, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionBreakdown {
    pub current_citations: f64,
    pub years_since_publication: i32,
    /// Share of the 10-year total accumulated by now.
    pub cdf_now: f64,
    /// Share accumulated by the horizon.
    pub cdf_horizon: f64,
    /// `cdf_horizon / cdf_now`.
    pub growth_ratio: f64,
    /// `current_citations * growth_ratio`.
    pub expected_citations: f64,
}

impl ProjectionBreakdown {
    /// Articles older than the horizon get a ratio below 1.
    pub fn is_past_horizon(&self) -> bool {
        self.growth_ratio < 1.0
    }
}
