pub mod hotel;
pub mod preference;
pub mod recommendation;

pub use hotel::{is_na_cell, EncodedHotel, HotelRecord, NormalizedHotel, RawNumeric, NA_MARKERS};
pub use preference::UserPreference;
pub use recommendation::{RankedHotel, Recommendation, RecommendationStatus};
