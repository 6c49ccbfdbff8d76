use citegrowth_core::constants::{MAX_CALENDAR_YEAR, MIN_CALENDAR_YEAR};
use citegrowth_core::errors::ProjectionError;

/// Citation counts must be finite and non-negative.
pub fn check_citations(current_citations: f64) -> Result<(), ProjectionError> {
    if !current_citations.is_finite() {
        return Err(ProjectionError::invalid(
            "current_citations",
            format!("must be finite, got {current_citations}"),
        ));
    }
    if current_citations < 0.0 {
        return Err(ProjectionError::invalid(
            "current_citations",
            format!("must be non-negative, got {current_citations}"),
        ));
    }
    Ok(())
}

/// Years must be 4-digit calendar years.
pub fn check_year(field: &'static str, year: i32) -> Result<(), ProjectionError> {
    if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year) {
        return Err(ProjectionError::invalid(
            field,
            format!("{year} is not a 4-digit calendar year"),
        ));
    }
    Ok(())
}

/// Validate all inputs and return the article's age in whole years.
///
/// A publication year after `current_year` is rejected here, before any
/// distribution is evaluated.
pub fn years_since_publication(
    current_citations: f64,
    publication_year: i32,
    current_year: i32,
) -> Result<i32, ProjectionError> {
    check_citations(current_citations)?;
    check_year("publication_year", publication_year)?;
    check_year("current_year", current_year)?;

    if publication_year > current_year {
        return Err(ProjectionError::invalid(
            "publication_year",
            format!("{publication_year} is after the current year {current_year}"),
        ));
    }
    Ok(current_year - publication_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_citations() {
        assert!(check_citations(0.0).is_ok());
    }

    #[test]
    fn rejects_negative_and_nan_citations() {
        assert!(check_citations(-1.0).is_err());
        assert!(check_citations(f64::NAN).is_err());
        assert!(check_citations(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_years_outside_four_digits() {
        assert!(check_year("publication_year", 999).is_err());
        assert!(check_year("publication_year", 10_000).is_err());
        assert!(check_year("publication_year", 1000).is_ok());
    }

    #[test]
    fn future_publication_is_invalid_input() {
        let err = years_since_publication(10.0, 2030, 2024).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidInput {
                field: "publication_year",
                ..
            }
        ));
    }

    #[test]
    fn same_year_is_zero_age() {
        assert_eq!(years_since_publication(10.0, 2024, 2024).unwrap(), 0);
    }
}
