use citegrowth_core::traits::ICitationProjector;
use citegrowth_projection::ProjectionEngine;
use proptest::prelude::*;

// ── Growth before the horizon ────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_not_below_current_before_horizon(
        citations in 0u64..1_000_000,
        age in 1i32..10,
        current_year in 1900i32..2100,
    ) {
        let engine = ProjectionEngine::new().unwrap();
        let current = citations as f64;
        let result = engine.project(current, current_year - age, current_year).unwrap();
        prop_assert!(result.is_finite());
        prop_assert!(
            result >= current,
            "projected {} below current {} at age {}",
            result, current, age
        );
    }
}

// ── Identity at the horizon ──────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_is_identity_at_horizon(
        citations in 0.0f64..1e7,
        current_year in 1100i32..9999,
    ) {
        let engine = ProjectionEngine::new().unwrap();
        let result = engine.project(citations, current_year - 10, current_year).unwrap();
        prop_assert!(
            (result - citations).abs() <= 1e-9 * citations.max(1.0),
            "{} != {}",
            result, citations
        );
    }
}

// ── Zero stays zero ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_citations_stay_zero(age in 1i32..80) {
        let engine = ProjectionEngine::new().unwrap();
        let result = engine.project(0.0, 2024 - age, 2024).unwrap();
        prop_assert_eq!(result, 0.0);
    }
}

// ── Monotone in citations ────────────────────────────────────────────────

proptest! {
    #[test]
    fn monotone_in_current_citations(
        a in 0.0f64..1e6,
        b in 0.0f64..1e6,
        age in 1i32..40,
    ) {
        let engine = ProjectionEngine::new().unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let year = 2024 - age;
        let p_lo = engine.project(lo, year, 2024).unwrap();
        let p_hi = engine.project(hi, year, 2024).unwrap();
        prop_assert!(p_lo <= p_hi, "{} -> {} but {} -> {}", lo, p_lo, hi, p_hi);
    }
}

// ── Deterministic ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn deterministic_for_identical_inputs(
        citations in 0.0f64..1e6,
        publication_year in 1950i32..2024,
    ) {
        let engine = ProjectionEngine::new().unwrap();
        let first = engine.project(citations, publication_year, 2024).unwrap();
        let second = engine.project(citations, publication_year, 2024).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

// ── Future years rejected ────────────────────────────────────────────────

proptest! {
    #[test]
    fn future_publication_always_rejected(
        citations in 0.0f64..1e6,
        ahead in 1i32..50,
    ) {
        let engine = ProjectionEngine::new().unwrap();
        let err = engine.project(citations, 2024 + ahead, 2024).unwrap_err();
        prop_assert!(!err.is_degenerate());
    }
}
