//! The intersection model and its coordinate index.
//!
//! An [`Intersection`] *is* its coordinate pair: equality, hashing and
//! ordering look at `coord` only.  The location and the set of incident
//! street names ride along as non-key data, so two handles to the same
//! crossing compare equal even if one of them was captured before every
//! street name was known.
//!
//! Handles are cheap to clone (the name set sits behind an `Arc`), which is
//! how the same crossing is shared between the graph's vertex set and every
//! street that passes through it.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use sr_core::{Coord, GeoPoint};
use sr_graph::VertexKey;

use crate::{IntersectionRecord, NetworkError, NetworkResult};

// ── Intersection ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Intersection {
    coord: Coord,
    location: GeoPoint,
    streets: Arc<BTreeSet<String>>,
}

impl Intersection {
    pub fn new<I, S>(coord: Coord, location: GeoPoint, streets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coord,
            location,
            streets: Arc::new(streets.into_iter().map(Into::into).collect()),
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Incident street names in lexicographic order.
    pub fn streets(&self) -> impl Iterator<Item = &str> + '_ {
        self.streets.iter().map(String::as_str)
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    pub fn has_street(&self, name: &str) -> bool {
        self.streets.contains(name)
    }

    /// The lexicographically first street incident to both `self` and
    /// `other`, i.e. the street a hop between them runs along.
    pub fn shared_street<'a>(&'a self, other: &Intersection) -> Option<&'a str> {
        self.streets
            .iter()
            .find(|s| other.streets.contains(s.as_str()))
            .map(String::as_str)
    }

    /// Straight-line distance to `other` in centimetres.
    #[inline]
    pub fn distance_cm(&self, other: &Intersection) -> f64 {
        self.coord.distance_cm(other.coord)
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Intersection {}

impl Hash for Intersection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl PartialOrd for Intersection {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Intersection {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.coord.cmp(&other.coord)
    }
}

impl VertexKey for Intersection {}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.streets().collect();
        write!(f, "{} [{}]", self.coord, names.join(" / "))
    }
}

// ── IntersectionIndex ─────────────────────────────────────────────────────────

/// Every distinct crossing, keyed by coordinate, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct IntersectionIndex {
    by_coord: FxHashMap<Coord, Intersection>,
    order: Vec<Coord>,
}

impl IntersectionIndex {
    /// One intersection per distinct coordinate, carrying the union of the
    /// street names of every row at that coordinate.  The location is taken
    /// from the first such row.
    pub fn from_records(records: &[IntersectionRecord]) -> Self {
        let mut pending: FxHashMap<Coord, (GeoPoint, BTreeSet<String>)> = FxHashMap::default();
        let mut order = Vec::new();

        for row in records {
            let coord = row.coord();
            let (_, streets) = pending.entry(coord).or_insert_with(|| {
                order.push(coord);
                (row.location(), BTreeSet::new())
            });
            streets.insert(row.street.clone());
            streets.insert(row.crossing_street.clone());
        }

        let by_coord = pending
            .into_iter()
            .map(|(coord, (location, streets))| {
                let streets = Arc::new(streets);
                (coord, Intersection { coord, location, streets })
            })
            .collect();

        Self { by_coord, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, coord: Coord) -> Option<&Intersection> {
        self.by_coord.get(&coord)
    }

    /// Like [`get`](Self::get), failing with
    /// [`NetworkError::UnknownCoordinate`].
    pub fn require(&self, coord: Coord) -> NetworkResult<&Intersection> {
        self.get(coord)
            .ok_or(NetworkError::UnknownCoordinate { x: coord.x, y: coord.y })
    }

    /// Intersections in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Intersection> + '_ {
        self.order.iter().filter_map(|c| self.by_coord.get(c))
    }

    /// The intersection closest to `coord` and its distance in centimetres.
    ///
    /// Linear scan; on ties the last candidate scanned wins.
    pub fn nearest(&self, coord: Coord) -> NetworkResult<(&Intersection, f64)> {
        let mut best: Option<(&Intersection, f64)> = None;
        for candidate in self.iter() {
            let d = candidate.coord.distance_cm(coord);
            if best.is_none_or(|(_, b)| d <= b) {
                best = Some((candidate, d));
            }
        }
        best.ok_or(NetworkError::EmptyNetwork)
    }
}
