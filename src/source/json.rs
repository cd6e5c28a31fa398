use std::path::PathBuf;

use crate::core::HotelRecord;
use crate::error::Result;
use crate::source::HotelSource;

/// JSON array of hotel records
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_json(json: &str) -> Result<Vec<HotelRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl HotelSource for JsonSource {
    fn load(&self) -> Result<Vec<HotelRecord>> {
        let file = std::fs::File::open(&self.path)?;
        let records: Vec<HotelRecord> = serde_json::from_reader(std::io::BufReader::new(file))?;
        tracing::info!("📂 Loaded {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn name(&self) -> &str {
        "json"
    }
}
