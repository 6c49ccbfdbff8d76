//! # citegrowth-core
//!
//! Foundation crate for citation growth projection.
//! Defines the shared types, traits, errors, config, and constants.
//! The projection model and the page adapter both depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CitegrowthConfig;
pub use errors::{CitegrowthError, CitegrowthResult};
pub use models::{ArticleObservation, GrowthModelParameters, ProjectionBreakdown};
