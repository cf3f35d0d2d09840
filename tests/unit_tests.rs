// Unit tests for the Rentora matching algorithm

use chrono::{TimeZone, Utc};
use rentora_algo::core::scoring::calculate_match_score;
use rentora_algo::models::{
    BudgetRange, CategoryWeights, ListingCandidate, RoommatePreferences, UserPreferences,
};
use rentora_algo::Matcher;

fn sample_preferences() -> UserPreferences {
    UserPreferences {
        lifestyle: "Quiet".to_string(),
        work_schedule: "Remote".to_string(),
        languages: vec!["English".to_string()],
        personality_traits: vec![],
        budget: BudgetRange {
            min: 5000.0,
            max: Some(8000.0),
        },
        preferred_areas: vec!["Dubai Marina".to_string()],
        desired_amenities: vec!["WiFi".to_string()],
        move_in_date: None,
        lease_duration_months: None,
        billing_cycle: None,
    }
}

fn sample_listing() -> ListingCandidate {
    ListingCandidate {
        id: "listing-1".to_string(),
        price: 7000.0,
        area: "Dubai Marina".to_string(),
        amenities: vec!["WiFi".to_string(), "Gym".to_string()],
        available_from: None,
        minimum_stay_months: None,
        maximum_stay_months: None,
        billing_cycle: None,
        roommate_preferences: Some(RoommatePreferences {
            lifestyle_tags: vec!["Quiet".to_string()],
            work_schedule_tags: vec!["Remote".to_string()],
            languages: vec!["English".to_string()],
        }),
    }
}

#[test]
fn test_compatible_listing_score() {
    let preferences = sample_preferences();
    let listing = sample_listing();
    let weights = CategoryWeights::default();

    // No personality traits and no lease data on either side, so those two
    // categories contribute nothing: 15 + 10 + 10 + 15 + 10 + 20 = 80
    let score = calculate_match_score(&listing, &preferences, &weights);

    assert_eq!(score, 80.0);
}

#[test]
fn test_score_within_valid_range() {
    let preferences = sample_preferences();
    let listing = sample_listing();
    let weights = CategoryWeights::default();

    let score = calculate_match_score(&listing, &preferences, &weights);

    assert!(score >= 0.0 && score <= 100.0, "Score should be in valid range");
}

#[test]
fn test_price_at_cap_keeps_full_budget_credit() {
    let preferences = sample_preferences();
    let mut listing = sample_listing();
    listing.price = 8000.0;

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert_eq!(score, 80.0);
}

#[test]
fn test_price_slightly_over_cap_gets_partial_credit() {
    let preferences = sample_preferences();
    let mut listing = sample_listing();
    listing.price = 8800.0;

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    // Budget drops from 15 to 7.5
    assert_eq!(score, 72.5);
}

#[test]
fn test_price_beyond_tolerance_loses_budget_credit() {
    let preferences = sample_preferences();
    let mut listing = sample_listing();
    listing.price = 9000.0;

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert_eq!(score, 65.0);
}

#[test]
fn test_price_below_minimum_keeps_partial_credit() {
    let preferences = sample_preferences();
    let mut listing = sample_listing();
    listing.price = 4000.0;

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert_eq!(score, 72.5);
}

#[test]
fn test_unbounded_budget_accepts_any_price_above_minimum() {
    let mut preferences = sample_preferences();
    preferences.budget = BudgetRange {
        min: 5000.0,
        max: None,
    };
    let mut listing = sample_listing();
    listing.price = 50000.0;

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert_eq!(score, 80.0);
}

#[test]
fn test_empty_preference_lists_contribute_nothing() {
    let mut preferences = sample_preferences();
    preferences.languages = vec![];
    let listing = sample_listing();

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert!(score.is_finite(), "Empty lists must not divide by zero");
    assert_eq!(score, 70.0);
}

#[test]
fn test_amenity_overlap_is_proportional() {
    let mut preferences = sample_preferences();
    preferences.desired_amenities = vec![
        "WiFi".to_string(),
        "Gym".to_string(),
        "Pool".to_string(),
    ];
    let mut listing = sample_listing();
    listing.amenities = vec!["WiFi".to_string()];

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    // One of three desired amenities present: 20 * 1/3
    let expected = 60.0 + 20.0 / 3.0;
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn test_perfect_listing_scores_one_hundred() {
    let mut preferences = sample_preferences();
    preferences.personality_traits = vec!["Quiet".to_string()];
    preferences.move_in_date = Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
    preferences.lease_duration_months = Some(6);
    preferences.billing_cycle = Some("monthly".to_string());

    let mut listing = sample_listing();
    listing.available_from = Some(Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap());
    listing.minimum_stay_months = Some(3);
    listing.maximum_stay_months = Some(12);
    listing.billing_cycle = Some("monthly".to_string());

    let score = calculate_match_score(&listing, &preferences, &CategoryWeights::default());

    assert_eq!(score, 100.0);
}

#[test]
fn test_matcher_rounds_half_up() {
    let matcher = Matcher::with_default_weights();
    let preferences = sample_preferences();
    let mut listing = sample_listing();
    listing.price = 8800.0;

    let result = matcher.find_matches(&preferences, vec![listing], 10);

    // Raw score 72.5 rounds away from zero
    assert_eq!(result.matches[0].matching_score, 73);
}

#[test]
fn test_matcher_preserves_listing_fields() {
    let matcher = Matcher::with_default_weights();
    let preferences = sample_preferences();
    let listing = sample_listing();

    let result = matcher.find_matches(&preferences, vec![listing], 10);

    let scored = &result.matches[0];
    assert_eq!(scored.id, "listing-1");
    assert_eq!(scored.price, 7000.0);
    assert_eq!(scored.area, "Dubai Marina");
    assert_eq!(scored.amenities, vec!["WiFi", "Gym"]);
    assert_eq!(scored.matching_score, 80);
}
