//! Cleaned input rows, as handed over by the ingestion layer.

use serde::Deserialize;

use sr_core::{Coord, GeoPoint, StreetCode};

/// One row of the intersections dataset: street `street` (identified by
/// `street_code`) crosses `crossing_street` at `(x_cm, y_cm)`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IntersectionRecord {
    pub x_cm:            i64,
    pub y_cm:            i64,
    pub street:          String,
    pub crossing_street: String,
    pub longitude:       f64,
    pub latitude:        f64,
    pub street_code:     u32,
}

impl IntersectionRecord {
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x_cm, self.y_cm)
    }

    #[inline]
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    #[inline]
    pub fn code(&self) -> StreetCode {
        StreetCode(self.street_code)
    }
}

/// One row of the addresses dataset.
///
/// `street_class` is the road type ("CALLE", "AVENIDA", "AUTOVIA", …) and
/// drives the speed model; `number_literal` is the raw numbering label such
/// as `NUM0012` or `KM.12`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AddressRecord {
    pub street_code:     u32,
    pub street_class:    String,
    #[serde(default)]
    pub street_particle: String,
    pub street_name:     String,
    pub number_literal:  String,
    pub x_cm:            i64,
    pub y_cm:            i64,
}

impl AddressRecord {
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x_cm, self.y_cm)
    }

    #[inline]
    pub fn code(&self) -> StreetCode {
        StreetCode(self.street_code)
    }

    /// Full display label: class, particle, name and number literal, each
    /// trimmed, empty parts skipped, joined by single spaces.
    pub fn label(&self) -> String {
        [
            self.street_class.as_str(),
            self.street_particle.as_str(),
            self.street_name.as_str(),
            self.number_literal.as_str(),
        ]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
