//! Edge weight models.
//!
//! | Model      | Weight of a street segment                                  |
//! |------------|-------------------------------------------------------------|
//! | `Distance` | Euclidean length in centimetres                             |
//! | `Speed`    | Speed limit (km/h) of the street's class                    |
//!
//! The speed model feeds the limit itself to the shortest-path search, so a
//! "fastest" route minimises the sum of limits along it rather than the
//! travel time.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use sr_core::StreetCode;

use crate::{AddressRecord, Intersection, Street};

/// Speed assumed for classes missing from the table, in km/h.
pub const STANDARD_SPEED_KMH: u32 = 50;

// ── SpeedTable ────────────────────────────────────────────────────────────────

/// Road class → maximum speed (km/h).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedTable {
    speeds: BTreeMap<String, u32>,
    standard: u32,
}

impl SpeedTable {
    /// An empty table: every class maps to `standard`.
    pub fn new(standard: u32) -> Self {
        Self { speeds: BTreeMap::new(), standard }
    }

    /// Builder-style insert; later calls for the same class win.
    pub fn with_speed(mut self, class: impl Into<String>, kmh: u32) -> Self {
        self.speeds.insert(class.into(), kmh);
        self
    }

    pub fn standard(&self) -> u32 {
        self.standard
    }

    /// Speed for `class` (trimmed), or the standard speed when the class is
    /// unknown or missing.
    pub fn speed_for(&self, class: Option<&str>) -> u32 {
        class
            .and_then(|c| self.speeds.get(c.trim()))
            .copied()
            .unwrap_or(self.standard)
    }

    /// `true` if `class` has its own entry.
    pub fn is_mapped(&self, class: &str) -> bool {
        self.speeds.contains_key(class.trim())
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new(STANDARD_SPEED_KMH)
            .with_speed("AUTOVIA", 100)
            .with_speed("AVENIDA", 90)
            .with_speed("CARRETERA", 70)
            .with_speed("CALLEJON", 30)
            .with_speed("CAMINO", 30)
            .with_speed("ESTACION DE METRO", 20)
            .with_speed("PASADIZO", 20)
            .with_speed("PLAZUELA", 20)
            .with_speed("COLONIA", 20)
    }
}

// ── StreetClasses ─────────────────────────────────────────────────────────────

/// Street code → road class, taken from the address dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StreetClasses(FxHashMap<StreetCode, String>);

impl StreetClasses {
    /// The class of the first address row of each street code, trimmed.
    pub fn from_addresses(addresses: &[AddressRecord]) -> Self {
        let mut classes = FxHashMap::default();
        for row in addresses {
            classes
                .entry(row.code())
                .or_insert_with(|| row.street_class.trim().to_owned());
        }
        Self(classes)
    }

    pub fn get(&self, code: StreetCode) -> Option<&str> {
        self.0.get(&code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── WeightModel ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum WeightModel {
    Distance,
    Speed {
        table: SpeedTable,
        classes: StreetClasses,
    },
}

impl WeightModel {
    pub fn speed(table: SpeedTable, classes: StreetClasses) -> Self {
        WeightModel::Speed { table, classes }
    }

    /// Weight of the segment `a`–`b` on `street`.
    pub fn weight(&self, street: &Street, a: &Intersection, b: &Intersection) -> f64 {
        match self {
            WeightModel::Distance => a.distance_cm(b),
            WeightModel::Speed { table, classes } => {
                table.speed_for(classes.get(street.code())) as f64
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightModel::Distance => "distance",
            WeightModel::Speed { .. } => "speed",
        }
    }
}
