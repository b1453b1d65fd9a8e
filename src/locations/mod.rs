use crate::locations::models::{Location, LocationRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub mod fetch;
pub mod models;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read the locations catalog: {0}")]
    Io(#[from] io::Error),
    #[error("line {line} of the locations catalog is not a location record: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line} of the locations catalog has out-of-range coordinates")]
    InvalidCoordinates { line: usize },
}

pub fn load_catalog(path: &Path) -> Result<Vec<Location>, CatalogError> {
    parse_catalog(BufReader::new(File::open(path)?))
}

/// Blank lines are skipped; line numbers in errors are 1-based.
pub fn parse_catalog(reader: impl BufRead) -> Result<Vec<Location>, CatalogError> {
    let mut locations = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: LocationRecord =
            serde_json::from_str(&line).map_err(|source| CatalogError::Malformed {
                line: line_number,
                source,
            })?;
        let location = record
            .into_location()
            .ok_or(CatalogError::InvalidCoordinates { line: line_number })?;
        locations.push(location);
    }
    Ok(locations)
}
