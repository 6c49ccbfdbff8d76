use super::error_code::{self, ErrorCode};

/// Errors reading article data out of a results page, or writing
/// annotations back into it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("results container not found: {selector}")]
    ContainerNotFound { selector: String },

    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("citation label missing at link index {index}")]
    CitationLabelMissing { index: usize },

    #[error("malformed citation count: {text:?}")]
    MalformedCitationCount { text: String },

    #[error("malformed publication year: {text:?}")]
    MalformedPublicationYear { text: String },

    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("write-back failed for article {position}: {reason}")]
    WriteBackFailed { position: usize, reason: String },
}

impl ErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WriteBackFailed { .. } => error_code::WRITE_BACK_FAILED,
            _ => error_code::EXTRACTION_ERROR,
        }
    }
}
