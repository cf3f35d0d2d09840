// Criterion benchmarks for the Rentora matching service

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rentora_algo::core::scoring::calculate_match_score;
use rentora_algo::models::{
    BudgetRange, CategoryWeights, ListingCandidate, RoommatePreferences, UserPreferences,
};
use rentora_algo::Matcher;

fn create_candidate(id: usize) -> ListingCandidate {
    let areas = ["Dubai Marina", "JLT", "Downtown", "Deira"];
    let amenity_pool = ["WiFi", "Parking", "Pool", "Gym", "Balcony"];

    ListingCandidate {
        id: format!("listing-{}", id),
        price: 4000.0 + (id % 60) as f64 * 100.0,
        area: areas[id % areas.len()].to_string(),
        amenities: amenity_pool[..(id % (amenity_pool.len() + 1))]
            .iter()
            .map(|a| a.to_string())
            .collect(),
        available_from: None,
        minimum_stay_months: Some(3),
        maximum_stay_months: Some(24),
        billing_cycle: Some(if id % 2 == 0 { "monthly" } else { "quarterly" }.to_string()),
        roommate_preferences: Some(RoommatePreferences {
            lifestyle_tags: vec![if id % 3 == 0 { "Quiet" } else { "Social" }.to_string()],
            work_schedule_tags: vec!["Remote".to_string()],
            languages: vec!["English".to_string()],
        }),
    }
}

fn create_preferences() -> UserPreferences {
    UserPreferences {
        lifestyle: "Quiet".to_string(),
        work_schedule: "Remote".to_string(),
        languages: vec!["English".to_string(), "Arabic".to_string()],
        personality_traits: vec!["Quiet".to_string()],
        budget: BudgetRange {
            min: 4500.0,
            max: Some(8000.0),
        },
        preferred_areas: vec!["Dubai Marina".to_string(), "JLT".to_string()],
        desired_amenities: vec!["WiFi".to_string(), "Gym".to_string()],
        move_in_date: None,
        lease_duration_months: Some(12),
        billing_cycle: Some("monthly".to_string()),
    }
}

fn bench_single_score(c: &mut Criterion) {
    let preferences = create_preferences();
    let weights = CategoryWeights::default();
    let listing = create_candidate(0);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&listing),
                black_box(&preferences),
                black_box(&weights),
            )
        });
    });
}

fn bench_sparse_listing_score(c: &mut Criterion) {
    let preferences = create_preferences();
    let weights = CategoryWeights::default();
    let listing = ListingCandidate {
        id: "sparse".to_string(),
        price: 6000.0,
        area: "Deira".to_string(),
        amenities: vec![],
        available_from: None,
        minimum_stay_months: None,
        maximum_stay_months: None,
        billing_cycle: None,
        roommate_preferences: None,
    };

    c.bench_function("calculate_match_score_sparse", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&listing),
                black_box(&preferences),
                black_box(&weights),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<ListingCandidate> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&preferences),
                        black_box(candidates.clone()),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_score,
    bench_sparse_listing_score,
    bench_matching
);

criterion_main!(benches);
