//! Text rules of the results page layout.
//!
//! ```text
//! citation label:  "Cited by 50"                            -> 50
//! author line:     "J Smith, A Jones - Nature, 2020 - nature.com" -> 2020
//! ```

use citegrowth_core::errors::ExtractionError;

/// Citation count is the last whitespace-separated token of the label.
pub fn parse_citation_count(label: &str) -> Result<u64, ExtractionError> {
    let malformed = || ExtractionError::MalformedCitationCount {
        text: label.to_string(),
    };

    let token = label.split_whitespace().last().ok_or_else(malformed)?;
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    token.parse().map_err(|_| malformed())
}

/// Publication year is the last token of the second-to-last
/// `delimiter`-separated segment, i.e. the "Venue, 2020" part.
///
/// Hyphenated author names only add segments at the front, so counting from
/// the end still lands on the venue segment.
pub fn parse_publication_year(author_line: &str, delimiter: char) -> Result<i32, ExtractionError> {
    let malformed = || ExtractionError::MalformedPublicationYear {
        text: author_line.to_string(),
    };

    let segments: Vec<&str> = author_line.split(delimiter).collect();
    if segments.len() < 2 {
        return Err(malformed());
    }
    let venue = segments[segments.len() - 2];
    let token = venue.split_whitespace().last().ok_or_else(malformed)?;

    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    token.parse().map_err(|_| malformed())
}
