//! Dijkstra shortest-path tree and path reconstruction.
//!
//! # Complexity
//!
//! Extraction is a linear scan over the unsettled vertices: O(V) per
//! extraction, O(V² + E) overall.  Among equally distant candidates the
//! earliest-inserted vertex is settled first.
//!
//! Only the connected component of the origin is explored.  Vertices that
//! are never reached have neither a parent nor a distance in the tree.

use rustc_hash::FxHashMap;

use crate::key::check_key;
use crate::{Graph, GraphError, GraphResult, VertexKey};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered vertex sequence plus the sum of the traversed edge weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<V> {
    vertices: Vec<V>,
    weight: f64,
}

impl<V> Path<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `true` if origin and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() <= 1
    }

    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Parent pointers and distances from a fixed origin to every vertex it can
/// reach.
#[derive(Clone, Debug)]
pub struct ShortestPathTree<V> {
    origin: V,
    parent: FxHashMap<V, V>,
    distance: FxHashMap<V, f64>,
}

impl<V: VertexKey> ShortestPathTree<V> {
    pub fn origin(&self) -> &V {
        &self.origin
    }

    /// Parent of `v` in the tree.  `None` for the origin and for unreachable
    /// vertices.
    pub fn parent(&self, v: &V) -> Option<&V> {
        self.parent.get(v)
    }

    /// All parent pointers, keyed by child.
    pub fn parents(&self) -> &FxHashMap<V, V> {
        &self.parent
    }

    /// Minimal accumulated weight from the origin to `v`.
    pub fn distance(&self, v: &V) -> Option<f64> {
        self.distance.get(v).copied()
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance.contains_key(v)
    }

    /// Number of vertices reached, origin included.
    pub fn reached_count(&self) -> usize {
        self.distance.len()
    }

    /// Walk parent pointers from `destination` back to the origin.
    ///
    /// Returns `None` when `destination` was not reached.
    pub fn path_to(&self, destination: &V) -> Option<Path<V>> {
        let weight = self.distance(destination)?;
        let mut vertices = vec![destination.clone()];
        let mut cur = destination;
        while *cur != self.origin {
            cur = self.parent.get(cur)?;
            vertices.push(cur.clone());
        }
        vertices.reverse();
        Some(Path { vertices, weight })
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

impl<V: VertexKey, P> Graph<V, P> {
    /// Single-source shortest-path tree rooted at `origin`.
    pub fn shortest_path_tree(&self, origin: &V) -> GraphResult<ShortestPathTree<V>> {
        check_key(origin)?;
        if !self.contains_vertex(origin) {
            return Err(GraphError::VertexNotFound(format!("{origin:?}")));
        }

        // Tentative distances; absent means +∞.
        let mut dist: FxHashMap<&V, f64> = FxHashMap::default();
        let mut parent: FxHashMap<V, V> = FxHashMap::default();
        let mut settled: FxHashMap<V, f64> = FxHashMap::default();
        let mut remaining: Vec<&V> = self.vertices().collect();

        dist.insert(origin, 0.0);

        loop {
            // Linear scan for the closest unsettled vertex.
            let mut best: Option<(usize, f64)> = None;
            for (i, v) in remaining.iter().enumerate() {
                if let Some(&d) = dist.get(v) {
                    if best.is_none_or(|(_, b)| d < b) {
                        best = Some((i, d));
                    }
                }
            }
            // Everything left is outside the origin's component.
            let Some((i, d)) = best else { break };

            let current = remaining.remove(i);
            settled.insert(current.clone(), d);

            for (neighbor, edge) in self.neighbor_edges(current) {
                let candidate = d + edge.weight;
                if dist.get(neighbor).is_none_or(|&known| candidate < known) {
                    dist.insert(neighbor, candidate);
                    parent.insert(neighbor.clone(), current.clone());
                }
            }
        }

        tracing::trace!(
            origin = ?origin,
            reached = settled.len(),
            vertices = self.vertex_count(),
            "shortest-path tree built"
        );

        Ok(ShortestPathTree {
            origin: origin.clone(),
            parent,
            distance: settled,
        })
    }

    /// Minimum-weight path from `origin` to `destination`.
    ///
    /// Fails with [`GraphError::RouteNotFound`] when `destination` lies
    /// outside the component of `origin`.
    pub fn shortest_path(&self, origin: &V, destination: &V) -> GraphResult<Path<V>> {
        check_key(destination)?;
        if !self.contains_vertex(destination) {
            return Err(GraphError::VertexNotFound(format!("{destination:?}")));
        }
        let tree = self.shortest_path_tree(origin)?;
        tree.path_to(destination)
            .ok_or_else(|| GraphError::RouteNotFound {
                from: format!("{origin:?}"),
                to: format!("{destination:?}"),
            })
    }
}
