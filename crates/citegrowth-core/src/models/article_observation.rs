use serde::{Deserialize, Serialize};

/// One listed article as read off a results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleObservation {
    /// Citation count shown on the page.
    pub current_citations: u64,
    /// 4-digit calendar year of publication.
    pub publication_year: i32,
}

impl ArticleObservation {
    pub fn new(current_citations: u64, publication_year: i32) -> Self {
        Self {
            current_citations,
            publication_year,
        }
    }

    /// Years elapsed at `current_year`. Negative when the publication
    /// year lies in the future.
    pub fn years_since_publication(&self, current_year: i32) -> i32 {
        current_year - self.publication_year
    }
}
