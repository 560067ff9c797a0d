//! Adjacency-map graph storage.
//!
//! # Data layout
//!
//! ```text
//! adjacency[u][v] = Edge { payload, weight }
//! ```
//!
//! Outgoing edges of `u` live in a per-vertex `FxHashMap` keyed by the
//! neighbour, so `get_edge` and overwrite-on-insert are O(1).  A separate
//! `order` vector remembers vertex insertion order; every vertex iteration
//! (and therefore every algorithm tie-break) follows it.
//!
//! For undirected graphs each edge is stored twice, once per endpoint, with
//! identical payload and weight.  Self-loops are stored once.

use rustc_hash::FxHashMap;

use sr_core::NodeId;

use crate::key::check_key;
use crate::{GraphResult, VertexKey};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// Payload and weight stored for one directed adjacency entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<P> {
    pub payload: P,
    pub weight: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed or undirected weighted graph over vertices of type `V` whose
/// edges carry a payload of type `P`.
#[derive(Clone, Debug)]
pub struct Graph<V, P = ()> {
    directed: bool,
    order: Vec<V>,
    adjacency: FxHashMap<V, FxHashMap<V, Edge<P>>>,
}

impl<V: VertexKey, P> Graph<V, P> {
    /// Construct an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            order: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Pre-allocate for the expected number of vertices.
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        let mut adjacency = FxHashMap::default();
        adjacency.reserve(vertices);
        Self {
            directed,
            order: Vec::with_capacity(vertices),
            adjacency,
        }
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of distinct edges.  An undirected edge and its mirror count
    /// once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|n| n.len()).sum();
        if self.directed {
            return entries;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, n)| n.contains_key(*v))
            .count();
        loops + (entries - loops) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Position of `v` in insertion order.
    pub fn index_of(&self, v: &V) -> Option<NodeId> {
        self.order
            .iter()
            .position(|u| u == v)
            .and_then(|i| NodeId::try_from(i).ok())
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `v` with no neighbours.  Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, v: V) -> GraphResult<()> {
        check_key(&v)?;
        if !self.adjacency.contains_key(&v) {
            self.order.push(v.clone());
            self.adjacency.insert(v, FxHashMap::default());
        }
        Ok(())
    }

    /// Add an edge `s → t`, mirrored as `t → s` on undirected graphs.
    ///
    /// Does nothing unless both endpoints are already vertices.  Replaces any
    /// edge previously stored for the same pair.
    pub fn add_edge(&mut self, s: V, t: V, payload: P, weight: f64) -> GraphResult<()>
    where
        P: Clone,
    {
        check_key(&s)?;
        check_key(&t)?;
        if !self.adjacency.contains_key(&s) || !self.adjacency.contains_key(&t) {
            return Ok(());
        }
        if !self.directed && s != t {
            if let Some(back) = self.adjacency.get_mut(&t) {
                back.insert(s.clone(), Edge { payload: payload.clone(), weight });
            }
        }
        if let Some(out) = self.adjacency.get_mut(&s) {
            out.insert(t, Edge { payload, weight });
        }
        Ok(())
    }

    /// [`add_edge`](Self::add_edge) with the default weight of 1.
    pub fn add_edge_unit(&mut self, s: V, t: V, payload: P) -> GraphResult<()>
    where
        P: Clone,
    {
        self.add_edge(s, t, payload, 1.0)
    }

    /// Remove `v` and every edge that references it.  Unknown vertices are
    /// ignored.
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        check_key(v)?;
        if self.adjacency.remove(v).is_some() {
            self.order.retain(|u| u != v);
        }
        for neighbours in self.adjacency.values_mut() {
            neighbours.remove(v);
        }
        Ok(())
    }

    /// Remove the stored `s → t` entry only, returning it.
    ///
    /// On an undirected graph the mirrored `t → s` entry is left in place;
    /// use [`remove_edge_symmetric`](Self::remove_edge_symmetric) to drop
    /// both.
    pub fn remove_edge(&mut self, s: &V, t: &V) -> GraphResult<Option<Edge<P>>> {
        check_key(s)?;
        check_key(t)?;
        Ok(self.adjacency.get_mut(s).and_then(|n| n.remove(t)))
    }

    /// Remove `s → t` and, on undirected graphs, its mirror `t → s`.
    pub fn remove_edge_symmetric(&mut self, s: &V, t: &V) -> GraphResult<Option<Edge<P>>> {
        let removed = self.remove_edge(s, t)?;
        if !self.directed {
            if let Some(back) = self.adjacency.get_mut(t) {
                back.remove(s);
            }
        }
        Ok(removed)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The edge stored for `s → t`, if any.
    pub fn get_edge(&self, s: &V, t: &V) -> GraphResult<Option<&Edge<P>>> {
        check_key(s)?;
        check_key(t)?;
        Ok(self.adjacency.get(s).and_then(|n| n.get(t)))
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// Every stored adjacency entry as `(source, target, weight)`.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.order.iter().flat_map(move |s| {
            self.adjacency
                .get(s)
                .into_iter()
                .flat_map(move |n| n.iter().map(move |(t, e)| (s, t, e.weight)))
        })
    }

    /// Neighbours of `v`, or `None` if `v` is not a vertex.
    pub fn neighbors(&self, v: &V) -> GraphResult<Option<Vec<&V>>> {
        check_key(v)?;
        Ok(self.adjacency.get(v).map(|n| n.keys().collect()))
    }

    /// Outgoing `(neighbour, edge)` pairs of `v`; empty if `v` is unknown.
    pub fn neighbor_edges<'a>(
        &'a self,
        v: &V,
    ) -> impl Iterator<Item = (&'a V, &'a Edge<P>)> + use<'a, V, P> {
        self.adjacency.get(v).into_iter().flat_map(|n| n.iter())
    }

    /// Number of edges leaving `v`.
    pub fn out_degree(&self, v: &V) -> GraphResult<Option<usize>> {
        check_key(v)?;
        Ok(self.adjacency.get(v).map(|n| n.len()))
    }

    /// Number of vertices holding an edge into `v`.
    pub fn in_degree(&self, v: &V) -> GraphResult<Option<usize>> {
        check_key(v)?;
        if !self.adjacency.contains_key(v) {
            return Ok(None);
        }
        Ok(Some(
            self.adjacency
                .values()
                .filter(|n| n.contains_key(v))
                .count(),
        ))
    }

    /// Out-degree for directed graphs, neighbour count for undirected ones.
    pub fn degree(&self, v: &V) -> GraphResult<Option<usize>> {
        self.out_degree(v)
    }
}

impl<V: VertexKey, P> Default for Graph<V, P> {
    fn default() -> Self {
        Self::undirected()
    }
}
