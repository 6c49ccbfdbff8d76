//! Gamma cumulative distribution via the `statrs` crate.
//!
//! `GammaCDF(x; k, θ) = P(k, x / θ)`, the regularized lower incomplete gamma
//! function. `statrs` takes (shape, rate), so rate = 1 / θ.

use citegrowth_core::errors::ProjectionError;
use citegrowth_core::models::GrowthModelParameters;
use statrs::distribution::{ContinuousCDF, Gamma};

/// Cumulative share of lifetime citations reached at a given age.
#[derive(Debug, Clone)]
pub struct GammaCdf {
    dist: Gamma,
    params: GrowthModelParameters,
}

impl GammaCdf {
    /// Build the evaluator. Fails if shape or scale is not finite and positive.
    pub fn new(params: GrowthModelParameters) -> Result<Self, ProjectionError> {
        if !(params.shape.is_finite() && params.shape > 0.0) {
            return Err(ProjectionError::Distribution {
                reason: format!("shape must be finite and positive, got {}", params.shape),
            });
        }
        if !(params.scale.is_finite() && params.scale > 0.0) {
            return Err(ProjectionError::Distribution {
                reason: format!("scale must be finite and positive, got {}", params.scale),
            });
        }
        let dist = Gamma::new(params.shape, params.rate()).map_err(|e| {
            ProjectionError::Distribution {
                reason: e.to_string(),
            }
        })?;
        Ok(Self { dist, params })
    }

    /// Evaluator for the reference fit.
    pub fn reference() -> Result<Self, ProjectionError> {
        Self::new(GrowthModelParameters::REFERENCE)
    }

    pub fn params(&self) -> &GrowthModelParameters {
        &self.params
    }

    /// CDF at `years`. Location is not subtracted. Zero at or below 0.
    pub fn cdf(&self, years: f64) -> f64 {
        if years <= 0.0 {
            return 0.0;
        }
        self.dist.cdf(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_is_zero_at_origin() {
        let g = GammaCdf::reference().unwrap();
        assert_eq!(g.cdf(0.0), 0.0);
        assert_eq!(g.cdf(-3.0), 0.0);
    }

    #[test]
    fn cdf_matches_incomplete_gamma() {
        let g = GammaCdf::reference().unwrap();
        // P(3.2923, 10 / 2.0036)
        assert!((g.cdf(10.0) - 0.838_742_435).abs() < 1e-6);
        // P(3.2923, 4 / 2.0036)
        assert!((g.cdf(4.0) - 0.258_996_290).abs() < 1e-6);
    }

    #[test]
    fn cdf_is_increasing_and_bounded() {
        let g = GammaCdf::reference().unwrap();
        let mut prev = 0.0;
        for year in 1..=40 {
            let c = g.cdf(year as f64);
            assert!(c > prev, "not increasing at year {year}");
            assert!(c <= 1.0);
            prev = c;
        }
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let bad_shape = GrowthModelParameters {
            shape: 0.0,
            ..GrowthModelParameters::REFERENCE
        };
        assert!(matches!(
            GammaCdf::new(bad_shape),
            Err(ProjectionError::Distribution { .. })
        ));

        let bad_scale = GrowthModelParameters {
            scale: f64::NAN,
            ..GrowthModelParameters::REFERENCE
        };
        assert!(GammaCdf::new(bad_scale).is_err());
    }

    #[test]
    fn location_does_not_shift_evaluation() {
        let shifted = GammaCdf::new(GrowthModelParameters {
            location: 5.0,
            ..GrowthModelParameters::REFERENCE
        })
        .unwrap();
        let reference = GammaCdf::reference().unwrap();
        assert_eq!(shifted.cdf(4.0), reference.cdf(4.0));
    }
}
