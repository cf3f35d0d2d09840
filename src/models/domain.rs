use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's stated accommodation and roommate preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub lifestyle: String,
    #[serde(rename = "workSchedule")]
    pub work_schedule: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "personalityTraits", default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub budget: BudgetRange,
    #[serde(rename = "preferredAreas", default)]
    pub preferred_areas: Vec<String>,
    #[serde(rename = "desiredAmenities", default)]
    pub desired_amenities: Vec<String>,
    #[serde(rename = "moveInDate", default)]
    pub move_in_date: Option<DateTime<Utc>>,
    #[serde(rename = "leaseDurationMonths", default)]
    pub lease_duration_months: Option<u32>,
    #[serde(rename = "billingCycle", default)]
    pub billing_cycle: Option<String>,
}

/// Acceptable monthly price range
///
/// An absent `max` means the range is unbounded above. A preference record
/// without a budget deserializes to the default `{min: 0, max: unbounded}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl BudgetRange {
    /// Upper bound used for price comparisons; absent max is unbounded
    pub fn cap(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }
}

/// Tags a listing owner attaches describing the occupant they are looking for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoommatePreferences {
    #[serde(rename = "lifestyleTags", default)]
    pub lifestyle_tags: Vec<String>,
    #[serde(rename = "workScheduleTags", default)]
    pub work_schedule_tags: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A property listing considered for matching
///
/// Candidates arrive from the marketplace already filtered to available,
/// active listings; the matcher scores them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCandidate {
    pub id: String,
    pub price: f64,
    pub area: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<DateTime<Utc>>,
    #[serde(rename = "minimumStayMonths", default)]
    pub minimum_stay_months: Option<u32>,
    #[serde(rename = "maximumStayMonths", default)]
    pub maximum_stay_months: Option<u32>,
    #[serde(rename = "billingCycle", default)]
    pub billing_cycle: Option<String>,
    #[serde(rename = "roommatePreferences", default)]
    pub roommate_preferences: Option<RoommatePreferences>,
}

impl ListingCandidate {
    /// Owner lifestyle tags, empty when the listing carries no roommate preferences
    pub fn lifestyle_tags(&self) -> &[String] {
        self.roommate_preferences
            .as_ref()
            .map(|prefs| prefs.lifestyle_tags.as_slice())
            .unwrap_or(&[])
    }

    /// Owner work-schedule tags, empty when the listing carries no roommate preferences
    pub fn work_schedule_tags(&self) -> &[String] {
        self.roommate_preferences
            .as_ref()
            .map(|prefs| prefs.work_schedule_tags.as_slice())
            .unwrap_or(&[])
    }

    /// Languages spoken in the household, empty when the listing carries no roommate preferences
    pub fn spoken_languages(&self) -> &[String] {
        self.roommate_preferences
            .as_ref()
            .map(|prefs| prefs.languages.as_slice())
            .unwrap_or(&[])
    }
}

/// Scored listing result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    pub id: String,
    pub price: f64,
    pub area: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<DateTime<Utc>>,
    #[serde(rename = "minimumStayMonths", default)]
    pub minimum_stay_months: Option<u32>,
    #[serde(rename = "maximumStayMonths", default)]
    pub maximum_stay_months: Option<u32>,
    #[serde(rename = "billingCycle", default)]
    pub billing_cycle: Option<String>,
    #[serde(rename = "roommatePreferences", default)]
    pub roommate_preferences: Option<RoommatePreferences>,
    #[serde(rename = "matchingScore")]
    pub matching_score: u8,
}

/// Maximum points per scoring category
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub lifestyle: f64,
    pub work_schedule: f64,
    pub language: f64,
    pub personality: f64,
    pub budget: f64,
    pub area: f64,
    pub amenities: f64,
    pub lease_terms: f64,
}

impl CategoryWeights {
    /// Sum of all category maxima; 100 with the default table
    pub fn total(&self) -> f64 {
        self.lifestyle
            + self.work_schedule
            + self.language
            + self.personality
            + self.budget
            + self.area
            + self.amenities
            + self.lease_terms
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            lifestyle: 15.0,
            work_schedule: 10.0,
            language: 10.0,
            personality: 10.0,
            budget: 15.0,
            area: 10.0,
            amenities: 20.0,
            lease_terms: 10.0,
        }
    }
}
