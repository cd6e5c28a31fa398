use crate::catalog::FeatureCatalog;
use crate::core::{EncodedHotel, NormalizedHotel, UserPreference};

/// Binary encoder over a feature catalog
#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    catalog: &'a FeatureCatalog,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(catalog: &'a FeatureCatalog) -> Self {
        Self { catalog }
    }

    /// 1.0 per catalog token the hotel offers, 0.0 otherwise, in catalog order
    pub fn vector_for(&self, hotel: &NormalizedHotel) -> Vec<f64> {
        self.catalog
            .tokens()
            .map(|token| if hotel.has_token(token) { 1.0 } else { 0.0 })
            .collect()
    }

    pub fn encode(&self, hotel: NormalizedHotel) -> EncodedHotel {
        let vector = self.vector_for(&hotel);
        EncodedHotel { hotel, vector }
    }

    pub fn encode_all(&self, hotels: Vec<NormalizedHotel>) -> Vec<EncodedHotel> {
        hotels.into_iter().map(|h| self.encode(h)).collect()
    }

    /// Labels selected in `preference` that the hotel offers
    pub fn matched_labels(&self, hotel: &EncodedHotel, preference: &UserPreference) -> Vec<String> {
        preference
            .selected_positions()
            .filter(|&i| hotel.vector.get(i).copied().unwrap_or(0.0) > 0.0)
            .filter_map(|i| self.catalog.label_at(i).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConfig;
    use crate::core::HotelRecord;

    fn catalog() -> FeatureCatalog {
        let records = vec![HotelRecord::new("Seed", "Paris").with_amenities(["wifi", "pool", "gym"])];
        let config = CatalogConfig {
            labels: vec!["Free WiFi".into(), "Pool".into(), "Gym".into()],
        };
        FeatureCatalog::build(&records, &config).unwrap()
    }

    fn hotel(tokens: &[&str]) -> NormalizedHotel {
        NormalizedHotel {
            hotel_name: "Hotel A".to_string(),
            city: "Paris".to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            rating: 4.0,
            price: 120.0,
        }
    }

    #[test]
    fn test_encode_in_catalog_order() {
        let catalog = catalog();
        let encoder = FeatureEncoder::new(&catalog);

        let encoded = encoder.encode(hotel(&["gym", "wifi", "sauna"]));
        assert_eq!(encoded.vector, vec![1.0, 0.0, 1.0]);
        assert_eq!(encoded.feature_count(), 2);
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let catalog = catalog();
        let encoder = FeatureEncoder::new(&catalog);
        let h = hotel(&["pool"]);

        assert_eq!(encoder.vector_for(&h), encoder.vector_for(&h));
        assert_eq!(encoder.encode(h.clone()), encoder.encode(h));
    }

    #[test]
    fn test_empty_token_set_is_zero_vector() {
        let catalog = catalog();
        let encoded = FeatureEncoder::new(&catalog).encode(hotel(&[]));
        assert!(encoded.is_zero());
        assert_eq!(encoded.vector.len(), 3);
    }

    #[test]
    fn test_matched_labels() {
        let catalog = catalog();
        let encoder = FeatureEncoder::new(&catalog);
        let encoded = encoder.encode(hotel(&["wifi", "gym"]));
        let pref = UserPreference::from_toggles(&[true, true, false]);

        assert_eq!(encoder.matched_labels(&encoded, &pref), vec!["Free WiFi".to_string()]);
    }
}
