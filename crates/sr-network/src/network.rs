//! Street network assembly.
//!
//! [`StreetNetwork::build`] runs the whole construction pipeline over a slice
//! of records and returns the result as a value:
//!
//! 1. merge near-coincident rows ([`merge_nearby`]),
//! 2. index intersections by coordinate ([`IntersectionIndex`]),
//! 3. group intersections by street code ([`StreetIndex`]).
//!
//! [`StreetNetwork::graph`] then turns it into an undirected
//! [`StreetGraph`]: one vertex per intersection, one edge per consecutive pair
//! along each street, payload = street code.

use sr_core::{Coord, StreetCode};
use sr_graph::Graph;

use crate::{
    DEFAULT_MERGE_RADIUS_CM, Intersection, IntersectionIndex, IntersectionRecord, MergeMode,
    NetworkResult, StreetIndex, WeightModel, merge_nearby,
};

/// Routable street graph: intersections joined by street segments.
pub type StreetGraph = Graph<Intersection, StreetCode>;

// ── NetworkConfig ─────────────────────────────────────────────────────────────

/// Construction parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Rows closer than this (centimetres) are merged.  Default: 3000.
    pub merge_radius_cm: f64,

    /// Which clusters get merged.  Default: `LastClusterOnly`.
    pub merge_mode: MergeMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            merge_radius_cm: DEFAULT_MERGE_RADIUS_CM,
            merge_mode: MergeMode::default(),
        }
    }
}

// ── StreetNetwork ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct StreetNetwork {
    intersections: IntersectionIndex,
    streets: StreetIndex,
}

impl StreetNetwork {
    /// Merge, then index `records`.
    pub fn build(records: &[IntersectionRecord], config: &NetworkConfig) -> NetworkResult<Self> {
        let merged = merge_nearby(records.to_vec(), config.merge_radius_cm, config.merge_mode);
        let network = Self::from_clean_records(&merged)?;
        tracing::info!(
            rows = records.len(),
            kept = merged.len(),
            intersections = network.intersections.len(),
            streets = network.streets.len(),
            "street network built"
        );
        Ok(network)
    }

    /// Index `records` as they are, with no merging.
    pub fn from_clean_records(records: &[IntersectionRecord]) -> NetworkResult<Self> {
        let intersections = IntersectionIndex::from_records(records);
        let streets = StreetIndex::from_records(records, &intersections)?;
        Ok(Self { intersections, streets })
    }

    pub fn intersections(&self) -> &IntersectionIndex {
        &self.intersections
    }

    pub fn streets(&self) -> &StreetIndex {
        &self.streets
    }

    /// The intersection closest to `coord` and its distance in centimetres.
    pub fn nearest_intersection(&self, coord: Coord) -> NetworkResult<(&Intersection, f64)> {
        self.intersections.nearest(coord)
    }

    /// Assemble the routable graph under `model`.
    ///
    /// When two streets share a segment the street scanned last sets its
    /// payload and weight.
    pub fn graph(&self, model: &WeightModel) -> NetworkResult<StreetGraph> {
        let mut graph = Graph::with_capacity(false, self.intersections.len());
        for intersection in self.intersections.iter() {
            graph.add_vertex(intersection.clone())?;
        }

        let mut standard_speed_streets = 0usize;
        for street in self.streets.iter() {
            if let WeightModel::Speed { table, classes } = model {
                if !classes.get(street.code()).is_some_and(|c| table.is_mapped(c)) {
                    standard_speed_streets += 1;
                }
            }
            for (a, b) in street.segments() {
                let weight = model.weight(street, a, b);
                graph.add_edge(a.clone(), b.clone(), street.code(), weight)?;
            }
        }

        if standard_speed_streets > 0 {
            tracing::debug!(
                streets = standard_speed_streets,
                "streets without a mapped class use the standard speed"
            );
        }
        tracing::debug!(
            model = model.as_str(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "street graph assembled"
        );

        Ok(graph)
    }
}
