//! Feature catalog: the shared binary feature space.
//!
//! The catalog is built once from the full dataset. It keeps the N most
//! frequent amenity tokens and maps each to a display label by rank, so the
//! most frequent token always carries the first label.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{HotelRecord, UserPreference};
use crate::error::{RecommenderError, Result};

/// Display labels assigned by frequency rank
pub const DEFAULT_LABELS: [&str; 10] = [
    "Free Breakfast",
    "Free WiFi",
    "Parking",
    "Pool",
    "Gym",
    "Restaurant",
    "Pet Friendly",
    "Spa",
    "Bar",
    "Air Conditioning",
];

/// Catalog configuration; its size is the number of labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub labels: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(RecommenderError::Config(
                "catalog needs at least one label".to_string(),
            ));
        }
        for (i, label) in self.labels.iter().enumerate() {
            if self.labels[..i].contains(label) {
                return Err(RecommenderError::Config(format!(
                    "duplicate catalog label: {}",
                    label
                )));
            }
        }
        Ok(())
    }
}

/// Raw amenity token with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub token: String,
    pub label: String,
    /// Occurrences across the whole dataset
    pub frequency: usize,
}

/// Ordered top-N amenity tokens, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    entries: Vec<CatalogEntry>,
}

impl FeatureCatalog {
    /// Build the catalog from every record of the dataset
    pub fn build(records: &[HotelRecord], config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let required = config.size();

        let counts = count_tokens(records);
        if counts.len() < required {
            return Err(RecommenderError::InsufficientFeatures {
                found: counts.len(),
                required,
            });
        }

        let entries: Vec<CatalogEntry> = counts
            .into_iter()
            .zip(config.labels.iter())
            .map(|((token, frequency), label)| CatalogEntry {
                token,
                label: label.clone(),
                frequency,
            })
            .collect();

        tracing::info!(
            "📚 Feature catalog built from {} records: {}",
            records.len(),
            entries
                .iter()
                .map(|e| format!("{}={}", e.label, e.token))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw tokens in catalog order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.token.as_str())
    }

    /// Display labels in catalog order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|e| e.label.as_str())
    }

    /// Position of a display label (case-insensitive)
    pub fn position_of(&self, label: &str) -> Option<usize> {
        let wanted = label.trim().to_lowercase();
        self.entries
            .iter()
            .position(|e| e.label.to_lowercase() == wanted)
    }

    pub fn token_for(&self, label: &str) -> Option<&str> {
        self.position_of(label).map(|i| self.entries[i].token.as_str())
    }

    /// Preference selecting the given labels; unknown labels are rejected
    pub fn preference_from_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<UserPreference> {
        let mut toggles = vec![false; self.len()];
        for label in labels {
            let label = label.as_ref();
            let position = self
                .position_of(label)
                .ok_or_else(|| RecommenderError::UnknownFeature(label.to_string()))?;
            toggles[position] = true;
        }
        Ok(UserPreference::from_toggles(&toggles))
    }
}

/// Token frequencies sorted descending, ties in first-seen order
fn count_tokens(records: &[HotelRecord]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in records.iter().flat_map(|r| r.tokens()) {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count))
        .collect()
}
