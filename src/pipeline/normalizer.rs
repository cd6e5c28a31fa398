use std::collections::HashMap;

use crate::core::{HotelRecord, NormalizedHotel};

/// Result of scoping the dataset to one city
#[derive(Debug, Clone, PartialEq)]
pub enum CityScope {
    /// No record matched the city
    NoHotelsInCity,
    /// Hotels that survived dedup and null filtering (possibly none)
    Hotels(Vec<NormalizedHotel>),
}

/// Records whose city equals `city` ignoring case, in dataset order
pub fn filter_by_city<'a>(records: &'a [HotelRecord], city: &str) -> Vec<&'a HotelRecord> {
    let city_lower = city.to_lowercase();
    records.iter().filter(|r| r.in_city(&city_lower)).collect()
}

/// Keep only the second row of each hotel name.
///
/// The source data lists most hotels twice (one row per room type) and the
/// second row is the one with the complete listing. First rows and any third
/// or later rows are discarded, as are single-row hotels.
// TODO: revisit against real requirements once the dataset carries a room-type column
pub fn select_second_occurrence<'a>(rows: &[&'a HotelRecord]) -> Vec<&'a HotelRecord> {
    let mut seen: HashMap<&'a str, usize> = HashMap::new();
    let mut kept = Vec::new();

    for &row in rows {
        if row.hotel_name.is_empty() {
            continue;
        }
        let count = seen.entry(row.hotel_name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            kept.push(row);
        }
    }

    kept
}

/// Convert one row, dropping it when rating or price is unusable
pub fn to_normalized(record: &HotelRecord) -> Option<NormalizedHotel> {
    let rating = record.rating.coerce();
    let price = record.price.coerce();

    let (Some(rating), Some(price)) = (rating, price) else {
        tracing::debug!(
            "Dropping '{}': rating={:?} price={:?}",
            record.hotel_name,
            record.rating,
            record.price
        );
        return None;
    };

    Some(NormalizedHotel {
        hotel_name: record.hotel_name.clone(),
        city: record.city.clone().unwrap_or_default(),
        tokens: record.tokens().map(str::to_string).collect(),
        rating,
        price,
    })
}

/// Filter by city, dedupe and drop incomplete rows
pub fn normalize(records: &[HotelRecord], city: &str) -> CityScope {
    let in_city = filter_by_city(records, city);
    if in_city.is_empty() {
        tracing::debug!("No records for city '{}'", city);
        return CityScope::NoHotelsInCity;
    }

    let deduped = select_second_occurrence(&in_city);
    let hotels: Vec<NormalizedHotel> = deduped.into_iter().filter_map(to_normalized).collect();

    tracing::debug!(
        "City '{}': {} rows → {} hotels after dedup and null filtering",
        city,
        in_city.len(),
        hotels.len()
    );

    CityScope::Hotels(hotels)
}
