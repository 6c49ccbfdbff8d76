use super::{ConfigError, ErrorCode, ExtractionError, ProjectionError};

/// Top-level error type. Subsystem errors convert into it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CitegrowthError {
    #[error("projection error: {0}")]
    ProjectionError(#[from] ProjectionError),

    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl ErrorCode for CitegrowthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ProjectionError(e) => e.error_code(),
            Self::ExtractionError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
        }
    }
}

pub type CitegrowthResult<T> = Result<T, CitegrowthError>;
