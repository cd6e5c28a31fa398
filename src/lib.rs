//! # Hotel Recommender
//!
//! Amenity-based hotel recommendation engine with:
//! - Feature catalog built from the most frequent amenities of the dataset
//! - Per-city normalization with deduplication of repeated listings
//! - Binary feature encoding and cosine similarity ranking
//! - Multiple interfaces: Rust library, CLI, HTTP API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hotel_recommender::{Recommender, RecommenderConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RecommenderConfig::default();
//!     let engine = Recommender::from_config(&config)?;
//!
//!     let results = engine.recommend_labels("Paris", &["Free WiFi", "Pool"])?;
//!
//!     for hotel in &results.hotels {
//!         println!("{} - {:.3}", hotel.hotel_name, hotel.similarity);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod source;

// Re-export primary types
pub use catalog::{CatalogConfig, CatalogEntry, FeatureCatalog};
pub use config::{ColumnLayout, DatasetConfig, RecommendOptions, RecommenderConfig};
pub use self::core::{
    EncodedHotel, HotelRecord, NormalizedHotel, RankedHotel, RawNumeric, Recommendation,
    RecommendationStatus, UserPreference,
};
pub use engine::{RecommendRequest, Recommender};
pub use error::{RecommenderError, Result};
pub use pipeline::{build_catalog, recommend};
pub use source::{CsvSource, HotelSource, InMemorySource, JsonSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
