use crate::errors::ExtractionError;

/// Write-back hook for rendered annotations.
///
/// `position` is the article's index among the listed results, as reported
/// by the extraction adapter.
pub trait IAnnotationSink {
    /// Append `text` to the citation label of the article at `position`.
    ///
    /// `original_text` is the label as it read at extraction time.
    /// Failures are reported as `ExtractionError::WriteBackFailed`.
    fn append(
        &mut self,
        position: usize,
        original_text: &str,
        text: &str,
    ) -> Result<(), ExtractionError>;
}
