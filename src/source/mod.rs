pub mod csv;
pub mod json;

use crate::core::HotelRecord;
use crate::error::Result;

pub use self::csv::CsvSource;
pub use self::json::JsonSource;

/// Trait for hotel dataset sources (CSV, JSON, preloaded)
pub trait HotelSource: Send + Sync {
    /// Load every raw record of the dataset
    fn load(&self) -> Result<Vec<HotelRecord>>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<HotelRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<HotelRecord>) -> Self {
        Self { records }
    }
}

impl HotelSource for InMemorySource {
    fn load(&self) -> Result<Vec<HotelRecord>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
