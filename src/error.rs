use thiserror::Error;

/// Main error type for the recommender
#[derive(Error, Debug)]
pub enum RecommenderError {
    /// Dataset has fewer distinct amenity tokens than the catalog needs
    #[error("Insufficient features: found {found} distinct amenities, need {required}")]
    InsufficientFeatures { found: usize, required: usize },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required dataset column is absent
    #[error("Missing column in dataset: {0}")]
    MissingColumn(String),

    /// Preference or hotel vector has the wrong length
    #[error("Dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Preference holds negative or non-finite weights
    #[error("Invalid preference: {0}")]
    InvalidPreference(String),

    /// Label that is not part of the catalog
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for RecommenderError {
    fn from(s: String) -> Self {
        RecommenderError::Other(s)
    }
}

impl From<&str> for RecommenderError {
    fn from(s: &str) -> Self {
        RecommenderError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RecommenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_features_message() {
        let err = RecommenderError::InsufficientFeatures { found: 7, required: 10 };
        assert_eq!(
            err.to_string(),
            "Insufficient features: found 7 distinct amenities, need 10"
        );
    }

    #[test]
    fn test_from_str() {
        let err: RecommenderError = "boom".into();
        assert!(matches!(err, RecommenderError::Other(ref s) if s == "boom"));
    }
}
