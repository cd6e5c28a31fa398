//! Per-request recommendation pipeline.
//!
//! `normalize` scopes the dataset to one city, the encoder maps each hotel
//! onto the catalog, and a `Ranker` orders the result. Every step works on
//! copies derived from the shared records, so concurrent requests never see
//! each other's intermediate state.

pub mod encoder;
pub mod normalizer;

use std::time::Instant;

use crate::catalog::FeatureCatalog;
use crate::config::RecommendOptions;
use crate::core::{HotelRecord, RankedHotel, Recommendation, RecommendationStatus, UserPreference};
use crate::error::{RecommenderError, Result};
use crate::ranking::{CosineRanker, Ranker};

pub use encoder::FeatureEncoder;
pub use normalizer::{normalize, CityScope};

/// Build the feature catalog with the default label set
pub fn build_catalog(records: &[HotelRecord]) -> Result<FeatureCatalog> {
    FeatureCatalog::build(records, &Default::default())
}

/// Rank hotels of `city` against `preference` with cosine similarity, top 5
pub fn recommend(
    records: &[HotelRecord],
    catalog: &FeatureCatalog,
    city: &str,
    preference: &UserPreference,
) -> Result<Recommendation> {
    recommend_with(
        records,
        catalog,
        city,
        preference,
        &CosineRanker::new(),
        &RecommendOptions::default(),
    )
}

/// Full pipeline with an explicit ranker and options
pub fn recommend_with(
    records: &[HotelRecord],
    catalog: &FeatureCatalog,
    city: &str,
    preference: &UserPreference,
    ranker: &dyn Ranker,
    options: &RecommendOptions,
) -> Result<Recommendation> {
    let start = Instant::now();
    options.validate()?;

    if preference.len() != catalog.len() {
        return Err(RecommenderError::DimensionMismatch {
            expected: catalog.len(),
            got: preference.len(),
        });
    }

    let hotels = match normalize(records, city) {
        CityScope::NoHotelsInCity => {
            return Ok(Recommendation::empty(
                city,
                RecommendationStatus::NoHotelsInCity,
                ranker.name(),
            ));
        }
        CityScope::Hotels(hotels) if hotels.is_empty() => {
            return Ok(Recommendation::empty(
                city,
                RecommendationStatus::EmptyQualifyingSet,
                ranker.name(),
            ));
        }
        CityScope::Hotels(hotels) => hotels,
    };

    let encoder = FeatureEncoder::new(catalog);
    let encoded = encoder.encode_all(hotels);
    let qualifying = encoded.len();

    let ranked = ranker.rank(preference, &encoded)?;

    let top: Vec<RankedHotel> = ranked
        .into_iter()
        .take(options.top_k)
        .map(|candidate| {
            let matched_features = encoder.matched_labels(&candidate.hotel, preference);
            let hotel = candidate.hotel.hotel;
            RankedHotel {
                hotel_name: hotel.hotel_name,
                rating: hotel.rating,
                price: hotel.price,
                similarity: candidate.score,
                matched_features,
            }
        })
        .collect();

    let mut recommendation = Recommendation::empty(city, RecommendationStatus::Ranked, ranker.name());
    recommendation.hotels = top;
    recommendation.qualifying = qualifying;
    recommendation.latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!("✅ {} ({:.2}ms)", recommendation.display(), recommendation.latency_ms);

    Ok(recommendation)
}
