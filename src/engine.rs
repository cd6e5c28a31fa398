use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{CatalogConfig, FeatureCatalog};
use crate::config::{RecommendOptions, RecommenderConfig};
use crate::core::{HotelRecord, Recommendation, UserPreference};
use crate::error::Result;
use crate::pipeline;
use crate::ranking::{CosineRanker, Ranker};
use crate::source::{CsvSource, HotelSource, JsonSource};

/// Main recommendation engine.
///
/// Owns the dataset and the feature catalog, both built once at startup and
/// read-only afterwards. Cloning is cheap and shares that state.
#[derive(Clone)]
pub struct Recommender {
    records: Arc<[HotelRecord]>,
    catalog: Arc<FeatureCatalog>,
    ranker: Arc<dyn Ranker>,
    options: RecommendOptions,
}

/// Recommendation request parameters
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    pub city: String,
    pub preference: UserPreference,
}

impl Recommender {
    /// Build the catalog over `records` and take ownership of the dataset
    pub fn new(records: Vec<HotelRecord>, catalog: &CatalogConfig, options: RecommendOptions) -> Result<Self> {
        options.validate()?;
        let built = FeatureCatalog::build(&records, catalog)?;

        Ok(Self {
            records: records.into(),
            catalog: Arc::new(built),
            ranker: Arc::new(CosineRanker::new()),
            options,
        })
    }

    /// Load every record from `source`, then build
    pub fn from_source(source: &dyn HotelSource, config: &RecommenderConfig) -> Result<Self> {
        config.validate()?;
        let records = source.load()?;
        tracing::info!("✅ {} source: {} records", source.name(), records.len());
        Self::new(records, &config.catalog, config.options)
    }

    /// Load the dataset named by the configuration: `.json` files as a JSON
    /// record array, anything else as CSV
    pub fn from_config(config: &RecommenderConfig) -> Result<Self> {
        let dataset = &config.dataset;
        let source: Box<dyn HotelSource> = if dataset.is_json() {
            Box::new(JsonSource::new(dataset.path.clone()))
        } else {
            Box::new(CsvSource::new(dataset.path.clone(), dataset.columns.clone()))
        };
        Self::from_source(source.as_ref(), config)
    }

    /// Swap the ranking strategy
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn records(&self) -> &[HotelRecord] {
        &self.records
    }

    pub fn options(&self) -> RecommendOptions {
        self.options
    }

    /// Distinct non-null cities, sorted
    pub fn cities(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.city.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rank hotels for a city using the engine's options
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Recommendation> {
        self.recommend_with(request, &self.options)
    }

    /// Rank hotels with per-call options
    pub fn recommend_with(&self, request: &RecommendRequest, options: &RecommendOptions) -> Result<Recommendation> {
        let recommendation = pipeline::recommend_with(
            &self.records,
            &self.catalog,
            &request.city,
            &request.preference,
            self.ranker.as_ref(),
            options,
        )?;

        tracing::info!("🏨 {}", recommendation.display());

        Ok(recommendation)
    }

    /// Convenience wrapper taking catalog labels instead of a vector
    pub fn recommend_labels<S: AsRef<str>>(&self, city: &str, labels: &[S]) -> Result<Recommendation> {
        let preference = self.catalog.preference_from_labels(labels)?;
        self.recommend(&RecommendRequest {
            city: city.to_string(),
            preference,
        })
    }
}
