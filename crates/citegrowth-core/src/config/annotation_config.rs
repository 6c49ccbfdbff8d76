use serde::{Deserialize, Serialize};

use super::defaults;

/// How a projected count is rendered onto the citation label.
///
/// Default rendering: `" (162)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub prefix: String,
    pub suffix: String,
    /// Digits after the decimal point. 0 rounds to the nearest integer.
    pub decimals: u8,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            prefix: defaults::DEFAULT_ANNOTATION_PREFIX.to_string(),
            suffix: defaults::DEFAULT_ANNOTATION_SUFFIX.to_string(),
            decimals: defaults::DEFAULT_ANNOTATION_DECIMALS,
        }
    }
}
