use serde::{Deserialize, Serialize};

use crate::error::{RecommenderError, Result};

/// User preference vector, one weight per catalog feature in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct UserPreference {
    weights: Vec<f64>,
}

impl UserPreference {
    /// Build from checkbox-style toggles (selected = 1, otherwise 0)
    pub fn from_toggles(toggles: &[bool]) -> Self {
        Self {
            weights: toggles.iter().map(|&on| if on { 1.0 } else { 0.0 }).collect(),
        }
    }

    /// Build from raw weights; rejects negative and non-finite entries
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RecommenderError::InvalidPreference(format!(
                "weight {} at position {} must be a finite non-negative number",
                w, i
            )));
        }
        Ok(Self { weights })
    }

    /// Same preference multiplied by a positive factor
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(RecommenderError::InvalidPreference(format!(
                "scale factor {} must be positive",
                factor
            )));
        }
        Self::from_weights(self.weights.iter().map(|w| w * factor).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// True when nothing is selected; every hotel then scores 0
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    /// Catalog positions with a non-zero weight
    pub fn selected_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(i, _)| i)
    }
}

impl TryFrom<Vec<f64>> for UserPreference {
    type Error = RecommenderError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::from_weights(weights)
    }
}

impl From<UserPreference> for Vec<f64> {
    fn from(pref: UserPreference) -> Self {
        pref.weights
    }
}
