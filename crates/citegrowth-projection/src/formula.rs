use citegrowth_core::constants::HORIZON_YEARS;
use citegrowth_core::errors::ProjectionError;
use citegrowth_core::models::ProjectionBreakdown;

use crate::gamma::GammaCdf;
use crate::validation;

/// Growth projection to the 10-year horizon.
///
/// ```text
/// age         = currentYear - publicationYear
/// growthRatio = GammaCDF(10) / GammaCDF(age)
/// expected    = currentCitations × growthRatio
/// ```
///
/// Zero citations project to zero. An age of 0 has `GammaCDF(0) = 0` and is
/// reported as `DegenerateComputation` instead of dividing by zero.
pub fn project_citations(
    gamma: &GammaCdf,
    current_citations: f64,
    publication_year: i32,
    current_year: i32,
) -> Result<f64, ProjectionError> {
    project_breakdown(gamma, current_citations, publication_year, current_year)
        .map(|b| b.expected_citations)
}

/// Compute the projection with each intermediate value.
pub fn project_breakdown(
    gamma: &GammaCdf,
    current_citations: f64,
    publication_year: i32,
    current_year: i32,
) -> Result<ProjectionBreakdown, ProjectionError> {
    let cdf_horizon = gamma.cdf(HORIZON_YEARS as f64);
    project_with_horizon(
        gamma,
        cdf_horizon,
        current_citations,
        publication_year,
        current_year,
    )
}

/// Same as [`project_breakdown`] with the horizon CDF precomputed.
pub(crate) fn project_with_horizon(
    gamma: &GammaCdf,
    cdf_horizon: f64,
    current_citations: f64,
    publication_year: i32,
    current_year: i32,
) -> Result<ProjectionBreakdown, ProjectionError> {
    let years =
        validation::years_since_publication(current_citations, publication_year, current_year)?;

    let cdf_now = gamma.cdf(years as f64);
    if cdf_now <= 0.0 || !cdf_now.is_finite() {
        return Err(ProjectionError::DegenerateComputation {
            years_since_publication: years,
            cdf_now,
        });
    }

    let growth_ratio = cdf_horizon / cdf_now;
    let expected_citations = current_citations * growth_ratio;

    Ok(ProjectionBreakdown {
        current_citations,
        years_since_publication: years,
        cdf_now,
        cdf_horizon,
        growth_ratio,
        expected_citations,
    })
}
