use serde::{Deserialize, Serialize};

use super::defaults;

/// Versioned text layout contract for a scholarly results page.
///
/// Selectors are CSS selectors; `citation_link_index` is the position of the
/// "Cited by N" label among the footer's child elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholarLayoutConfig {
    /// Identifies which page layout these rules were written against.
    pub layout_version: String,
    /// Element whose direct children are the listed results.
    pub results_container: String,
    /// Class a child must carry to count as an article.
    pub article_class: String,
    /// Footer holding the action links; the first match is used.
    pub footer_links: String,
    /// Child index of the citation label inside the footer.
    pub citation_link_index: usize,
    /// Author/venue/year line; the first match is used.
    pub author_line: String,
    /// Separator between authors, venue-and-year, and host in the author line.
    pub author_segment_delimiter: char,
}

impl Default for ScholarLayoutConfig {
    fn default() -> Self {
        Self {
            layout_version: defaults::DEFAULT_LAYOUT_VERSION.to_string(),
            results_container: defaults::DEFAULT_RESULTS_CONTAINER.to_string(),
            article_class: defaults::DEFAULT_ARTICLE_CLASS.to_string(),
            footer_links: defaults::DEFAULT_FOOTER_LINKS.to_string(),
            citation_link_index: defaults::DEFAULT_CITATION_LINK_INDEX,
            author_line: defaults::DEFAULT_AUTHOR_LINE.to_string(),
            author_segment_delimiter: defaults::DEFAULT_AUTHOR_SEGMENT_DELIMITER,
        }
    }
}
