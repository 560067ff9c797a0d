//! CSV record loaders.
//!
//! # CSV format
//!
//! Intersections, one row per (street, crossing street) pair:
//!
//! ```csv
//! x_cm,y_cm,street,crossing_street,longitude,latitude,street_code
//! 44120000,447470000,CALLE MAYOR,CALLE TOLEDO,-3.7077,40.4153,31001337
//! ```
//!
//! Addresses, one row per numbered address:
//!
//! ```csv
//! street_code,street_class,street_particle,street_name,number_literal,x_cm,y_cm
//! 31001337,CALLE,,MAYOR,NUM0012,44118000,447469000
//! ```
//!
//! Fields are trimmed.  Mapping the municipal export (its column names,
//! encoding and numeric quirks) onto these headers is the ingestion layer's
//! job.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{AddressRecord, IntersectionRecord, NetworkError, NetworkResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load intersection rows from a CSV file.
pub fn load_intersections_csv(path: &Path) -> NetworkResult<Vec<IntersectionRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_intersections_reader(file)
}

/// Like [`load_intersections_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_intersections_reader<R: Read>(reader: R) -> NetworkResult<Vec<IntersectionRecord>> {
    let rows = read_records(reader)?;
    tracing::info!(rows = rows.len(), "loaded intersection records");
    Ok(rows)
}

/// Load address rows from a CSV file.
pub fn load_addresses_csv(path: &Path) -> NetworkResult<Vec<AddressRecord>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_addresses_reader(file)
}

/// Like [`load_addresses_csv`] but accepts any `Read` source.
pub fn load_addresses_reader<R: Read>(reader: R) -> NetworkResult<Vec<AddressRecord>> {
    let rows = read_records(reader)?;
    tracing::info!(rows = rows.len(), "loaded address records");
    Ok(rows)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> NetworkResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect()
}
