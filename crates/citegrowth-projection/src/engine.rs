use citegrowth_core::constants::HORIZON_YEARS;
use citegrowth_core::errors::ProjectionError;
use citegrowth_core::models::{ArticleObservation, GrowthModelParameters, ProjectionBreakdown};
use citegrowth_core::traits::ICitationProjector;
use rayon::prelude::*;

use crate::formula;
use crate::gamma::GammaCdf;

/// Projection engine over the fixed gamma growth curve.
///
/// Holds only read-only state: the distribution and its CDF at the horizon,
/// evaluated once at construction.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    gamma: GammaCdf,
    cdf_horizon: f64,
}

impl ProjectionEngine {
    /// Create an engine over the reference fit.
    pub fn new() -> Result<Self, ProjectionError> {
        Self::with_params(GrowthModelParameters::REFERENCE)
    }

    /// Create with explicit curve parameters.
    pub fn with_params(params: GrowthModelParameters) -> Result<Self, ProjectionError> {
        let gamma = GammaCdf::new(params)?;
        let cdf_horizon = gamma.cdf(HORIZON_YEARS as f64);
        tracing::debug!(
            shape = params.shape,
            scale = params.scale,
            cdf_horizon,
            "projection engine ready"
        );
        Ok(Self { gamma, cdf_horizon })
    }

    pub fn params(&self) -> &GrowthModelParameters {
        self.gamma.params()
    }

    /// CDF at the 10-year horizon.
    pub fn cdf_horizon(&self) -> f64 {
        self.cdf_horizon
    }

    /// Project with a full breakdown of the intermediate values.
    pub fn project_breakdown(
        &self,
        current_citations: f64,
        publication_year: i32,
        current_year: i32,
    ) -> Result<ProjectionBreakdown, ProjectionError> {
        let result = formula::project_with_horizon(
            &self.gamma,
            self.cdf_horizon,
            current_citations,
            publication_year,
            current_year,
        );
        match &result {
            Ok(b) => tracing::debug!(
                current_citations,
                publication_year,
                current_year,
                growth_ratio = b.growth_ratio,
                expected = b.expected_citations,
                "projected citations"
            ),
            Err(e) => tracing::debug!(
                current_citations,
                publication_year,
                current_year,
                error = %e,
                "projection rejected"
            ),
        }
        result
    }

    /// Project a batch of observations. Each item succeeds or fails on its own.
    pub fn project_batch(
        &self,
        observations: &[ArticleObservation],
        current_year: i32,
    ) -> Vec<Result<f64, ProjectionError>> {
        observations
            .iter()
            .map(|o| self.project_observation(o, current_year))
            .collect()
    }

    /// Same as [`Self::project_batch`], spread across the rayon pool.
    /// Output order matches input order.
    pub fn project_batch_parallel(
        &self,
        observations: &[ArticleObservation],
        current_year: i32,
    ) -> Vec<Result<f64, ProjectionError>> {
        observations
            .par_iter()
            .map(|o| self.project_observation(o, current_year))
            .collect()
    }
}

impl ICitationProjector for ProjectionEngine {
    fn project(
        &self,
        current_citations: f64,
        publication_year: i32,
        current_year: i32,
    ) -> Result<f64, ProjectionError> {
        self.project_breakdown(current_citations, publication_year, current_year)
            .map(|b| b.expected_citations)
    }
}
