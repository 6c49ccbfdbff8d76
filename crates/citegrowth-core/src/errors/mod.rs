pub mod citegrowth_error;
pub mod config_error;
pub mod error_code;
pub mod extraction_error;
pub mod projection_error;

pub use citegrowth_error::{CitegrowthError, CitegrowthResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use extraction_error::ExtractionError;
pub use projection_error::ProjectionError;
