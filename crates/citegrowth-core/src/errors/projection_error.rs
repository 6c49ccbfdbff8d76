use super::error_code::{self, ErrorCode};

/// Errors raised at the projection model boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error(
        "degenerate computation at {years_since_publication} years since publication: \
         cumulative share is {cdf_now}"
    )]
    DegenerateComputation {
        years_since_publication: i32,
        cdf_now: f64,
    },

    #[error("growth distribution unavailable: {reason}")]
    Distribution { reason: String },
}

impl ProjectionError {
    /// Shorthand for an `InvalidInput` rejection.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures the caller should treat as "leave unannotated"
    /// rather than a programming error.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateComputation { .. })
    }
}

impl ErrorCode for ProjectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::DegenerateComputation { .. } => error_code::DEGENERATE_COMPUTATION,
            Self::Distribution { .. } => error_code::DISTRIBUTION_ERROR,
        }
    }
}
