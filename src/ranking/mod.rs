pub mod cosine;

use crate::core::{EncodedHotel, UserPreference};
use crate::error::Result;

pub use cosine::{cosine_similarity, CosineRanker};

/// Trait for similarity ranking implementations
pub trait Ranker: Send + Sync {
    /// Score candidates against the preference, return sorted by score (highest first).
    /// Equal scores keep their input order.
    fn rank(&self, preference: &UserPreference, candidates: &[EncodedHotel]) -> Result<Vec<RankedCandidate>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate with similarity score
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub hotel: EncodedHotel,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(hotel: EncodedHotel, score: f64) -> Self {
        Self { hotel, score }
    }
}
