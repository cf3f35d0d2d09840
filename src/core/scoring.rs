use crate::models::{BudgetRange, CategoryWeights, ListingCandidate, UserPreferences};

/// Calculate a raw match score (0-100) for a listing against a user's preferences
///
/// Category maxima (defaults, summing to 100):
///
/// ```text
/// lifestyle       15   owner lifestyle tags contain the user's tag
/// work schedule   10   owner work-schedule tags contain the user's tag
/// language        10   proportional overlap with household languages
/// personality     10   proportional overlap with owner lifestyle tags
/// budget          15   full in range, half within 10% over the cap
/// area            10   listing area among the user's preferred areas
/// amenities       20   proportional overlap with the user's wish list
/// lease terms     10   move-in 3 + stay duration 4 + billing cycle 3
/// ```
///
/// Each category contributes its fraction (0-1) of the category weight, so
/// no category ever exceeds its maximum. Preference fields the user left
/// empty and listing fields the owner left out contribute zero rather than
/// erroring.
pub fn calculate_match_score(
    listing: &ListingCandidate,
    preferences: &UserPreferences,
    weights: &CategoryWeights,
) -> f64 {
    let lifestyle_score = calculate_lifestyle_score(preferences, listing);
    let work_schedule_score = calculate_work_schedule_score(preferences, listing);
    let language_score = calculate_language_score(preferences, listing);
    let personality_score = calculate_personality_score(preferences, listing);
    let budget_score = calculate_budget_score(listing.price, &preferences.budget);
    let area_score = calculate_area_score(preferences, listing);
    let amenity_score = calculate_amenity_score(preferences, listing);
    let lease_terms_score = calculate_lease_terms_score(preferences, listing);

    let total_score = lifestyle_score * weights.lifestyle
        + work_schedule_score * weights.work_schedule
        + language_score * weights.language
        + personality_score * weights.personality
        + budget_score * weights.budget
        + area_score * weights.area
        + amenity_score * weights.amenities
        + lease_terms_score * weights.lease_terms;

    total_score.min(100.0).max(0.0)
}

/// Calculate lifestyle score (0 or 1)
/// Full credit when the owner's lifestyle tags include the user's tag
#[inline]
fn calculate_lifestyle_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    if listing.lifestyle_tags().contains(&preferences.lifestyle) {
        1.0
    } else {
        0.0
    }
}

/// Calculate work-schedule score (0 or 1)
#[inline]
fn calculate_work_schedule_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    if listing.work_schedule_tags().contains(&preferences.work_schedule) {
        1.0
    } else {
        0.0
    }
}

/// Calculate language overlap score (0-1) against the household's languages
#[inline]
fn calculate_language_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    overlap_fraction(&preferences.languages, listing.spoken_languages())
}

/// Calculate personality score (0-1)
///
/// Traits are compared against the owner's lifestyle tags: listings carry
/// no separate trait list, so the lifestyle tags double as the comparison
/// target.
#[inline]
fn calculate_personality_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    overlap_fraction(&preferences.personality_traits, listing.lifestyle_tags())
}

/// Calculate budget score (0, 0.5 or 1)
///
/// Full credit inside the range, half credit when the price is within 10%
/// over the cap. The half-credit branch checks only the cap, so a price
/// below the range minimum still earns it, and an unbounded cap never
/// scores zero.
#[inline]
fn calculate_budget_score(price: f64, budget: &BudgetRange) -> f64 {
    let cap = budget.cap();

    if price >= budget.min && price <= cap {
        1.0
    } else if price <= cap * 1.1 {
        0.5
    } else {
        0.0
    }
}

/// Calculate area score (0 or 1)
#[inline]
fn calculate_area_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    if preferences.preferred_areas.contains(&listing.area) {
        1.0
    } else {
        0.0
    }
}

/// Calculate amenity overlap score (0-1) against the user's wish list
#[inline]
fn calculate_amenity_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    overlap_fraction(&preferences.desired_amenities, &listing.amenities)
}

/// Calculate lease-terms score (0-1)
///
/// Three independent sub-checks worth 3/4/3 of the category's 10 points;
/// a sub-check contributes only when both sides carry the relevant data.
#[inline]
fn calculate_lease_terms_score(preferences: &UserPreferences, listing: &ListingCandidate) -> f64 {
    let mut points = 0.0;

    if let (Some(move_in), Some(available_from)) =
        (preferences.move_in_date, listing.available_from)
    {
        if available_from <= move_in {
            points += 3.0;
        }
    }

    if let (Some(duration), Some(min_stay), Some(max_stay)) = (
        preferences.lease_duration_months,
        listing.minimum_stay_months,
        listing.maximum_stay_months,
    ) {
        if min_stay <= duration && duration <= max_stay {
            points += 4.0;
        }
    }

    if let (Some(user_cycle), Some(listing_cycle)) =
        (&preferences.billing_cycle, &listing.billing_cycle)
    {
        if user_cycle == listing_cycle {
            points += 3.0;
        }
    }

    points / 10.0
}

/// Proportional overlap (0-1): the share of `wanted` entries present in
/// `available`. An empty `wanted` list contributes nothing rather than
/// dividing by zero.
#[inline]
fn overlap_fraction(wanted: &[String], available: &[String]) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }

    let matched = wanted.iter().filter(|&item| available.contains(item)).count();
    matched as f64 / wanted.len() as f64
}
