use citegrowth_core::errors::*;

#[test]
fn invalid_input_carries_field_and_reason() {
    let err = ProjectionError::invalid("publication_year", "2030 is after 2024");
    let msg = err.to_string();
    assert!(msg.contains("publication_year"));
    assert!(msg.contains("2030 is after 2024"));
    assert!(!err.is_degenerate());
}

#[test]
fn degenerate_computation_carries_age() {
    let err = ProjectionError::DegenerateComputation {
        years_since_publication: 0,
        cdf_now: 0.0,
    };
    assert!(err.to_string().contains("0 years"));
    assert!(err.is_degenerate());
}

#[test]
fn error_codes_are_stable() {
    let invalid = ProjectionError::invalid("current_citations", "negative");
    assert_eq!(invalid.error_code(), "INVALID_INPUT");
    assert!(invalid.coded_string().starts_with("[INVALID_INPUT] "));

    let degenerate = ProjectionError::DegenerateComputation {
        years_since_publication: 0,
        cdf_now: 0.0,
    };
    assert_eq!(degenerate.error_code(), "DEGENERATE_COMPUTATION");

    let extraction = ExtractionError::MalformedCitationCount {
        text: "Related articles".into(),
    };
    assert_eq!(extraction.error_code(), "EXTRACTION_ERROR");
}

// --- From impls ---

#[test]
fn projection_error_converts_to_citegrowth_error() {
    let err: CitegrowthError = ProjectionError::invalid("current_year", "out of range").into();
    assert!(matches!(err, CitegrowthError::ProjectionError(_)));
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn extraction_error_converts_to_citegrowth_error() {
    let err: CitegrowthError = ExtractionError::ContainerNotFound {
        selector: "#gs_res_ccl_mid".into(),
    }
    .into();
    assert!(matches!(err, CitegrowthError::ExtractionError(_)));
    assert!(err.to_string().contains("#gs_res_ccl_mid"));
}

#[test]
fn config_error_converts_to_citegrowth_error() {
    let err: CitegrowthError = ConfigError::ValidationFailed {
        field: "annotation.decimals".into(),
        message: "must be at most 6".into(),
    }
    .into();
    assert!(matches!(err, CitegrowthError::ConfigError(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn write_back_failure_has_its_own_code() {
    let err = ExtractionError::WriteBackFailed {
        position: 3,
        reason: "label detached".into(),
    };
    assert_eq!(err.error_code(), "WRITE_BACK_FAILED");
    let msg = err.to_string();
    assert!(msg.contains("article 3"));
    assert!(msg.contains("label detached"));

    let wrapped: CitegrowthError = err.into();
    assert_eq!(wrapped.error_code(), "WRITE_BACK_FAILED");
}
