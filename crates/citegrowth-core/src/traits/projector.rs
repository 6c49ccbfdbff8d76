use crate::errors::ProjectionError;
use crate::models::ArticleObservation;

/// Projects a present citation count to the fixed horizon.
pub trait ICitationProjector: Send + Sync {
    /// Expected citation count at the horizon.
    ///
    /// `current_year` is supplied by the caller; implementations must not
    /// read the system clock.
    fn project(
        &self,
        current_citations: f64,
        publication_year: i32,
        current_year: i32,
    ) -> Result<f64, ProjectionError>;

    /// Project a single extracted observation.
    fn project_observation(
        &self,
        observation: &ArticleObservation,
        current_year: i32,
    ) -> Result<f64, ProjectionError> {
        self.project(
            observation.current_citations as f64,
            observation.publication_year,
            current_year,
        )
    }
}
