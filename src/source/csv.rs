use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::ColumnLayout;
use crate::core::{is_na_cell, HotelRecord, RawNumeric};
use crate::error::{RecommenderError, Result};
use crate::source::HotelSource;

/// CSV dataset with a header row
pub struct CsvSource {
    path: PathBuf,
    columns: ColumnLayout,
}

/// Header positions resolved against a `ColumnLayout`
struct ColumnIndex {
    name: usize,
    city: usize,
    rating: usize,
    price: usize,
    features: Vec<Option<usize>>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnLayout) -> Result<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| RecommenderError::MissingColumn(column.to_string()))
        };

        let features: Vec<Option<usize>> = columns.features.iter().map(|c| find(c.as_str())).collect();
        for (column, idx) in columns.features.iter().zip(&features) {
            if idx.is_none() {
                tracing::warn!("Amenity column '{}' not in dataset, treating as empty", column);
            }
        }

        Ok(Self {
            name: require(columns.name.as_str())?,
            city: require(columns.city.as_str())?,
            rating: require(columns.rating.as_str())?,
            price: require(columns.price.as_str())?,
            features,
        })
    }

    fn record(&self, row: &StringRecord) -> HotelRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        let non_empty = |idx: usize| Some(cell(idx)).filter(|c| !is_na_cell(c)).map(str::to_string);

        HotelRecord {
            // Unnamed rows are never grouped by dedup, so NA names become empty
            hotel_name: non_empty(self.name).unwrap_or_default(),
            city: non_empty(self.city),
            rating: RawNumeric::from_cell(cell(self.rating)),
            price: RawNumeric::from_cell(cell(self.price)),
            amenities: self
                .features
                .iter()
                .map(|idx| idx.and_then(|i| non_empty(i)))
                .collect(),
        }
    }
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnLayout) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from any reader using the given layout
    pub fn read_records<R: Read>(reader: R, columns: &ColumnLayout) -> Result<Vec<HotelRecord>> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let index = ColumnIndex::resolve(reader.headers()?, columns)?;

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            match row {
                Ok(row) => records.push(index.record(&row)),
                Err(e) => {
                    // +2: header row and 1-based lines
                    tracing::warn!("Skipping malformed CSV row {}: {}", line + 2, e);
                }
            }
        }

        Ok(records)
    }
}

impl HotelSource for CsvSource {
    fn load(&self) -> Result<Vec<HotelRecord>> {
        let file = std::fs::File::open(&self.path)?;
        let records = Self::read_records(file, &self.columns)?;
        tracing::info!("📂 Loaded {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn name(&self) -> &str {
        "csv"
    }
}
