//! Recommender configuration.
//!
//! Defaults match the reference hotel dataset. A JSON file can override any
//! subset of fields, then `HOTEL_DATA_PATH` and `HOTEL_TOP_K` override the
//! file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::CatalogConfig;
use crate::error::{RecommenderError, Result};

pub const ENV_DATA_PATH: &str = "HOTEL_DATA_PATH";
pub const ENV_TOP_K: &str = "HOTEL_TOP_K";

/// Column names of the tabular dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub name: String,
    pub city: String,
    pub rating: String,
    pub price: String,
    /// Amenity columns in slot order
    pub features: Vec<String>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: "Hotel_Name".to_string(),
            city: "City".to_string(),
            rating: "Hotel_Rating".to_string(),
            price: "Hotel_Price".to_string(),
            features: (1..=9).map(|i| format!("Feature_{}", i)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub columns: ColumnLayout,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("google_hotel_data_clean_v2.csv"),
            columns: ColumnLayout::default(),
        }
    }
}

impl DatasetConfig {
    /// True when the dataset path has a `.json` extension (any case)
    pub fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

/// Per-request ranking options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendOptions {
    /// Maximum hotels returned
    pub top_k: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

impl RecommendOptions {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(RecommenderError::Config("top_k must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommenderConfig {
    pub dataset: DatasetConfig,
    pub catalog: CatalogConfig,
    pub options: RecommendOptions,
}

impl RecommenderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Apply `HOTEL_DATA_PATH` / `HOTEL_TOP_K` from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test maps)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(top_k) = lookup(ENV_TOP_K) {
            self.options.top_k = top_k.trim().parse().map_err(|_| {
                RecommenderError::Config(format!("{} must be a positive integer, got '{}'", ENV_TOP_K, top_k))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        if self.dataset.columns.features.is_empty() {
            return Err(RecommenderError::Config(
                "at least one amenity column is required".to_string(),
            ));
        }
        self.options.validate()
    }
}
