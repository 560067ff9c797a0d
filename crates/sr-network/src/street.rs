//! Streets as ordered sequences of intersections.

use rustc_hash::FxHashMap;

use sr_core::StreetCode;

use crate::{Intersection, IntersectionIndex, IntersectionRecord, NetworkResult};

/// A named, coded street and the intersections along it.
///
/// `intersections` keeps the order in which the records for this street
/// were scanned.  Repeats are kept: a crossing that appears in several rows
/// appears several times.
#[derive(Clone, Debug)]
pub struct Street {
    name: String,
    code: StreetCode,
    intersections: Vec<Intersection>,
}

impl Street {
    pub fn new(name: impl Into<String>, code: StreetCode) -> Self {
        Self {
            name: name.into(),
            code,
            intersections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> StreetCode {
        self.code
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    /// Consecutive pairs along the street, skipping pairs that repeat the
    /// same crossing.
    pub fn segments(&self) -> impl Iterator<Item = (&Intersection, &Intersection)> + '_ {
        self.intersections
            .windows(2)
            .map(|w| (&w[0], &w[1]))
            .filter(|(a, b)| a != b)
    }

    fn push(&mut self, intersection: Intersection) {
        self.intersections.push(intersection);
    }
}

// ── StreetIndex ───────────────────────────────────────────────────────────────

/// Every street, keyed by code, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct StreetIndex {
    by_code: FxHashMap<StreetCode, Street>,
    order: Vec<StreetCode>,
}

impl StreetIndex {
    /// Group `records` by street code.  The first row of a code names the
    /// street; each row appends the intersection at its coordinate.
    pub fn from_records(
        records: &[IntersectionRecord],
        intersections: &IntersectionIndex,
    ) -> NetworkResult<Self> {
        let mut by_code: FxHashMap<StreetCode, Street> = FxHashMap::default();
        let mut order = Vec::new();

        for row in records {
            let intersection = intersections.require(row.coord())?;
            let code = row.code();
            by_code
                .entry(code)
                .or_insert_with(|| {
                    order.push(code);
                    Street::new(row.street.clone(), code)
                })
                .push(intersection.clone());
        }

        Ok(Self { by_code, order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, code: StreetCode) -> Option<&Street> {
        self.by_code.get(&code)
    }

    /// Streets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Street> + '_ {
        self.order.iter().filter_map(|c| self.by_code.get(c))
    }
}
