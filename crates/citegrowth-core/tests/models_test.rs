use citegrowth_core::models::*;

#[test]
fn reference_parameters_match_published_fit() {
    let p = GrowthModelParameters::REFERENCE;
    assert_eq!(p.shape, 3.2923);
    assert_eq!(p.location, 0.2378);
    assert_eq!(p.scale, 2.0036);
    assert!((p.rate() - 1.0 / 2.0036).abs() < 1e-15);
    assert_eq!(GrowthModelParameters::default(), p);
}

#[test]
fn years_since_publication_can_be_negative() {
    let obs = ArticleObservation::new(10, 2030);
    assert_eq!(obs.years_since_publication(2024), -6);
    assert_eq!(ArticleObservation::new(10, 2020).years_since_publication(2024), 4);
}

#[test]
fn breakdown_flags_articles_past_horizon() {
    let b = ProjectionBreakdown {
        current_citations: 40.0,
        years_since_publication: 12,
        cdf_now: 0.916,
        cdf_horizon: 0.839,
        growth_ratio: 0.839 / 0.916,
        expected_citations: 40.0 * 0.839 / 0.916,
    };
    assert!(b.is_past_horizon());
}

#[test]
fn observation_serializes_with_snake_case_fields() {
    let json = serde_json::to_value(ArticleObservation::new(50, 2020)).unwrap();
    assert_eq!(json["current_citations"], 50);
    assert_eq!(json["publication_year"], 2020);
}
