use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// At least one hotel was ranked
    Ranked,
    /// No record matched the requested city
    NoHotelsInCity,
    /// The city matched but no hotel survived dedup and null filtering
    EmptyQualifyingSet,
}

/// One row of the result table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedHotel {
    pub hotel_name: String,
    pub rating: f64,
    pub price: f64,

    /// Cosine similarity against the preference (0.0 - 1.0)
    pub similarity: f64,

    /// Labels of the selected features this hotel offers
    #[serde(default)]
    pub matched_features: Vec<String>,
}

/// Recommendation response with ranked hotels and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// City as requested by the user
    pub city: String,

    pub status: RecommendationStatus,

    /// Top hotels, best first
    #[serde(default)]
    pub hotels: Vec<RankedHotel>,

    /// Hotels that qualified for ranking before truncation
    pub qualifying: usize,

    /// Ranking method used (cosine)
    pub ranking_method: String,

    pub latency_ms: f64,

    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Response carrying an empty-result state
    pub fn empty(
        city: impl Into<String>,
        status: RecommendationStatus,
        ranking_method: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            status,
            hotels: Vec::new(),
            qualifying: 0,
            ranking_method: ranking_method.into(),
            latency_ms: 0.0,
            generated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn best(&self) -> Option<&RankedHotel> {
        self.hotels.first()
    }

    /// User-facing warning for empty states
    pub fn warning(&self) -> Option<String> {
        match self.status {
            RecommendationStatus::Ranked => None,
            RecommendationStatus::NoHotelsInCity => {
                Some(format!("No hotels found for the selected city: {}", self.city))
            }
            RecommendationStatus::EmptyQualifyingSet => Some(format!(
                "No hotels in {} have a complete rating and price listing",
                self.city
            )),
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.best() {
            Some(best) => format!(
                "{} → {} ({:.3}) [{}] {}/{} hotels",
                self.city,
                best.hotel_name,
                best.similarity,
                self.ranking_method,
                self.hotels.len(),
                self.qualifying
            ),
            None => format!("{} → no results ({:?})", self.city, self.status),
        }
    }
}
