//! Stable error codes for hosts that surface failures as strings.

/// Every error enum implements this to provide a structured code string.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const DEGENERATE_COMPUTATION: &str = "DEGENERATE_COMPUTATION";
pub const DISTRIBUTION_ERROR: &str = "DISTRIBUTION_ERROR";
pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const WRITE_BACK_FAILED: &str = "WRITE_BACK_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
