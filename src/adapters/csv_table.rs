use std::collections::HashMap;
use std::path::Path;

use crate::adapters::table_key;
use crate::domain::model::{Coordinates, LocationRecord};
use crate::domain::ports::LocationProvider;
use crate::utils::error::{PostcodeError, Result};

const KEY_COLUMN: &str = "postcode";
const EASTING_COLUMN: &str = "easting";
const NORTHING_COLUMN: &str = "northing";

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    }
}

/// A lookup table loaded from a delimited file, held entirely in memory.
///
/// The file must carry `postcode`, `easting` and `northing` columns; any
/// other columns are kept as string fields on the record. Loaded once at
/// construction and read-only thereafter. A missing or malformed file is a
/// hard failure here, not an empty table.
#[derive(Debug, Clone)]
pub struct CsvTable {
    entries: HashMap<String, LocationRecord>,
}

impl CsvTable {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading lookup table from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter_for(path))
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        for required in [KEY_COLUMN, EASTING_COLUMN, NORTHING_COLUMN] {
            if !headers.iter().any(|h| h == required) {
                return Err(PostcodeError::TableError {
                    message: format!(
                        "{} is missing the required column '{}'",
                        path.display(),
                        required
                    ),
                });
            }
        }

        let mut entries = HashMap::new();
        for (row_number, row) in reader.records().enumerate() {
            let row = row?;
            let mut key = None;
            let mut easting = None;
            let mut northing = None;
            let mut fields = HashMap::new();

            for (header, value) in headers.iter().zip(row.iter()) {
                match header.as_str() {
                    KEY_COLUMN => key = Some(table_key(value)),
                    EASTING_COLUMN => easting = Some(parse_coordinate(value, header, row_number)?),
                    NORTHING_COLUMN => {
                        northing = Some(parse_coordinate(value, header, row_number)?)
                    }
                    _ => {
                        fields.insert(header.clone(), value.to_string());
                    }
                }
            }

            // Header presence was checked above; a short row is a format error.
            let (Some(key), Some(easting), Some(northing)) = (key, easting, northing) else {
                return Err(PostcodeError::TableError {
                    message: format!("Row {} is missing columns", row_number + 2),
                });
            };

            entries.insert(
                key,
                LocationRecord {
                    coordinates: Coordinates::new(easting, northing),
                    fields,
                },
            );
        }

        tracing::info!("Loaded {} lookup entries", entries.len());
        Ok(Self { entries })
    }

    /// The full record behind a key, extra string fields included.
    pub fn record(&self, key: &str) -> Option<&LocationRecord> {
        self.entries.get(&table_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_coordinate(value: &str, column: &str, row_number: usize) -> Result<f64> {
    value.trim().parse().map_err(|_| PostcodeError::TableError {
        message: format!(
            "Row {} has a non-numeric {} value: '{}'",
            row_number + 2,
            column,
            value
        ),
    })
}

impl LocationProvider for CsvTable {
    fn coordinates(&self, key: &str) -> Option<Coordinates> {
        self.record(key).map(|record| record.coordinates)
    }
}
