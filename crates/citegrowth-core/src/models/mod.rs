pub mod article_observation;
pub mod growth_params;
pub mod projection_breakdown;

pub use article_observation::ArticleObservation;
pub use growth_params::GrowthModelParameters;
pub use projection_breakdown::ProjectionBreakdown;
