use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cell values read as null, the same set pandas treats as missing by default
pub const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a raw text cell holds no value (blank or an NA marker)
pub fn is_na_cell(cell: &str) -> bool {
    let cell = cell.trim();
    NA_MARKERS.contains(&cell)
}

/// Numeric cell as it appears in the raw dataset.
///
/// Ratings and prices arrive as numbers, as free text ("4.5", "N/A", "$120")
/// or not at all. Coercion to `f64` happens per request in the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawNumeric {
    /// Build from a raw CSV cell; blank and NA cells are missing
    pub fn from_cell(cell: &str) -> Self {
        if is_na_cell(cell) {
            RawNumeric::Missing
        } else {
            RawNumeric::Text(cell.to_string())
        }
    }

    /// Coerce to a finite number, `None` when the value cannot be used
    pub fn coerce(&self) -> Option<f64> {
        match self {
            RawNumeric::Number(n) => Some(*n),
            RawNumeric::Text(s) => s.trim().parse::<f64>().ok(),
            RawNumeric::Missing => None,
        }
        .filter(|n| n.is_finite())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawNumeric::Missing)
    }
}

impl From<f64> for RawNumeric {
    fn from(n: f64) -> Self {
        RawNumeric::Number(n)
    }
}

impl From<&str> for RawNumeric {
    fn from(s: &str) -> Self {
        RawNumeric::from_cell(s)
    }
}

/// One raw row of the hotel dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelRecord {
    /// Hotel name (not unique: one row per room type is common)
    #[serde(default, alias = "Hotel_Name")]
    pub hotel_name: String,

    #[serde(default, alias = "City")]
    pub city: Option<String>,

    #[serde(default, alias = "Hotel_Rating")]
    pub rating: RawNumeric,

    #[serde(default, alias = "Hotel_Price")]
    pub price: RawNumeric,

    /// Amenity slots in column order, `None` for empty cells
    #[serde(default)]
    pub amenities: Vec<Option<String>>,
}

impl HotelRecord {
    /// Create a record with a name and city and no other data
    pub fn new(hotel_name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            city: Some(city.into()),
            rating: RawNumeric::Missing,
            price: RawNumeric::Missing,
            amenities: Vec::new(),
        }
    }

    pub fn with_rating(mut self, rating: impl Into<RawNumeric>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<RawNumeric>) -> Self {
        self.price = price.into();
        self
    }

    /// Replace amenity slots with the given tokens (all non-null)
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(|a| Some(a.into())).collect();
        self
    }

    /// Non-null amenity tokens in slot order, duplicates kept
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.amenities
            .iter()
            .filter_map(|slot| slot.as_deref())
            .filter(|token| !token.is_empty())
    }

    /// Case-insensitive exact city comparison against an already lowercased city
    pub fn in_city(&self, city_lower: &str) -> bool {
        self.city
            .as_deref()
            .map(|c| c.to_lowercase() == city_lower)
            .unwrap_or(false)
    }
}

/// Deduplicated, fully populated hotel scoped to one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedHotel {
    pub hotel_name: String,
    pub city: String,
    pub tokens: BTreeSet<String>,
    pub rating: f64,
    pub price: f64,
}

impl NormalizedHotel {
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Normalized hotel with its binary feature vector in catalog order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncodedHotel {
    #[serde(flatten)]
    pub hotel: NormalizedHotel,
    pub vector: Vec<f64>,
}

impl EncodedHotel {
    /// Number of catalog features this hotel offers
    pub fn feature_count(&self) -> usize {
        self.vector.iter().filter(|v| **v > 0.0).count()
    }

    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(RawNumeric::Number(4.5).coerce(), Some(4.5));
        assert_eq!(RawNumeric::from_cell("3.9").coerce(), Some(3.9));
        assert_eq!(RawNumeric::from_cell(" 120 ").coerce(), Some(120.0));
        assert_eq!(RawNumeric::from_cell("N/A").coerce(), None);
        assert_eq!(RawNumeric::from_cell("$120").coerce(), None);
        assert_eq!(RawNumeric::from_cell("").coerce(), None);
        assert_eq!(RawNumeric::Number(f64::NAN).coerce(), None);
        assert_eq!(RawNumeric::from_cell("inf").coerce(), None);
        assert!(RawNumeric::from_cell("  ").is_missing());
        assert!(RawNumeric::from_cell("NaN").is_missing());
        assert!(RawNumeric::from_cell("#N/A").is_missing());
    }

    #[test]
    fn test_na_cells() {
        for marker in NA_MARKERS {
            assert!(is_na_cell(marker), "{:?}", marker);
        }
        assert!(is_na_cell(" null "));
        assert!(!is_na_cell("Nan Hotel"));
        assert!(!is_na_cell("Free Wi-Fi"));
        assert!(!is_na_cell("na"));
    }

    #[test]
    fn test_tokens_skip_nulls_and_keep_duplicates() {
        let mut record = HotelRecord::new("Hotel A", "Paris");
        record.amenities = vec![
            Some("wifi".to_string()),
            None,
            Some("pool".to_string()),
            Some(String::new()),
            Some("wifi".to_string()),
        ];

        let tokens: Vec<&str> = record.tokens().collect();
        assert_eq!(tokens, vec!["wifi", "pool", "wifi"]);
    }

    #[test]
    fn test_in_city() {
        let record = HotelRecord::new("Hotel A", "Paris");
        assert!(record.in_city("paris"));
        assert!(!record.in_city("rome"));
        assert!(!record.in_city(" paris"));

        let mut no_city = HotelRecord::new("Hotel B", "Paris");
        no_city.city = None;
        assert!(!no_city.in_city("paris"));
    }

    #[test]
    fn test_record_deserialize_mixed_numeric() {
        let json = r#"{
            "Hotel_Name": "Hotel A",
            "City": "Paris",
            "Hotel_Rating": "4.2",
            "Hotel_Price": 180,
            "amenities": ["wifi", null, "pool"]
        }"#;

        let record: HotelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hotel_name, "Hotel A");
        assert_eq!(record.rating.coerce(), Some(4.2));
        assert_eq!(record.price.coerce(), Some(180.0));
        assert_eq!(record.tokens().count(), 2);
    }

    #[test]
    fn test_record_deserialize_null_rating() {
        let json = r#"{"hotel_name": "Hotel A", "city": null, "rating": null}"#;
        let record: HotelRecord = serde_json::from_str(json).unwrap();
        assert!(record.rating.is_missing());
        assert!(record.price.is_missing());
        assert!(record.city.is_none());
    }
}
