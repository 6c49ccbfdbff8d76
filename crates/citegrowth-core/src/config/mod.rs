//! Configuration for the page adapter and logging.
//! TOML-based, resolved as: env > config file > defaults.
//! The growth model and its horizon are fixed and deliberately absent here.

pub mod annotation_config;
pub mod citegrowth_config;
pub mod defaults;
pub mod layout_config;
pub mod observability_config;

pub use annotation_config::AnnotationConfig;
pub use citegrowth_config::CitegrowthConfig;
pub use layout_config::ScholarLayoutConfig;
pub use observability_config::ObservabilityConfig;
