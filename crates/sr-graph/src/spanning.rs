//! Minimum spanning forests: Prim and Kruskal.
//!
//! Both algorithms are the textbook quadratic versions without priority
//! queues or path compression; they are meant for the small graphs this
//! workspace builds, not for scale.  Disconnected graphs yield one tree per
//! component, never an error.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Graph, VertexKey};

// ── SpanningForest ────────────────────────────────────────────────────────────

/// An accepted forest edge.  For Prim forests `source` is the tree parent of
/// `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningEdge<V> {
    pub source: V,
    pub target: V,
    pub weight: f64,
}

/// Result of [`Graph::minimum_spanning_tree_prim`] and
/// [`Graph::minimum_spanning_forest_kruskal`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<V> {
    edges: Vec<SpanningEdge<V>>,
    roots: Vec<V>,
}

impl<V: VertexKey> SpanningForest<V> {
    pub fn edges(&self) -> &[SpanningEdge<V>] {
        &self.edges
    }

    /// One vertex per tree: the seed for Prim, the union–find root for
    /// Kruskal.
    pub fn roots(&self) -> &[V] {
        &self.roots
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of trees in the forest.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Vertex whose accepted edge points at `v`.  Meaningful for Prim
    /// forests, where it is the parent in the grown tree.
    pub fn parent_of(&self, v: &V) -> Option<&V> {
        self.edges
            .iter()
            .find(|e| e.target == *v)
            .map(|e| &e.source)
    }
}

// ── Algorithms ────────────────────────────────────────────────────────────────

impl<V: VertexKey, P> Graph<V, P> {
    /// Prim's algorithm, seeded from the first vertex in insertion order.
    ///
    /// Each step scans every vertex already in the tree and all of its
    /// neighbours outside it for the globally lightest crossing edge.  When
    /// no crossing edge remains the next unvisited vertex seeds a new tree.
    pub fn minimum_spanning_tree_prim(&self) -> SpanningForest<V> {
        let mut in_tree: FxHashSet<&V> = FxHashSet::default();
        let mut tree_order: Vec<&V> = Vec::with_capacity(self.vertex_count());
        let mut forest = SpanningForest { edges: Vec::new(), roots: Vec::new() };
        let mut seeds = self.vertices();

        while in_tree.len() < self.vertex_count() {
            let mut best: Option<(&V, &V, f64)> = None;
            for &u in &tree_order {
                for (v, edge) in self.neighbor_edges(u) {
                    if in_tree.contains(v) {
                        continue;
                    }
                    if best.is_none_or(|(_, _, w)| edge.weight < w) {
                        best = Some((u, v, edge.weight));
                    }
                }
            }

            match best {
                Some((u, v, weight)) => {
                    in_tree.insert(v);
                    tree_order.push(v);
                    forest.edges.push(SpanningEdge {
                        source: u.clone(),
                        target: v.clone(),
                        weight,
                    });
                }
                None => {
                    let Some(root) = seeds.by_ref().find(|v| !in_tree.contains(v)) else {
                        break;
                    };
                    in_tree.insert(root);
                    tree_order.push(root);
                    forest.roots.push(root.clone());
                }
            }
        }

        forest
    }

    /// Kruskal's algorithm with a plain parent-pointer union–find.
    ///
    /// Edges are sorted by weight with a stable sort, so equal weights keep
    /// the order of [`Graph::edges`].
    pub fn minimum_spanning_forest_kruskal(&self) -> SpanningForest<V> {
        let mut candidates: Vec<(&V, &V, f64)> = self.edges().collect();
        candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut parent: FxHashMap<&V, &V> = self.vertices().map(|v| (v, v)).collect();
        let mut edges = Vec::new();

        for (s, t, weight) in candidates {
            let rs = find(&parent, s);
            let rt = find(&parent, t);
            if rs != rt {
                parent.insert(rs, rt);
                edges.push(SpanningEdge {
                    source: s.clone(),
                    target: t.clone(),
                    weight,
                });
            }
        }

        let roots = self
            .vertices()
            .filter(|&v| find(&parent, v) == v)
            .cloned()
            .collect();

        SpanningForest { edges, roots }
    }
}

/// Follow parent pointers up to the set representative.
fn find<'a, V: VertexKey>(parent: &FxHashMap<&'a V, &'a V>, mut v: &'a V) -> &'a V {
    while let Some(&p) = parent.get(v) {
        if p == v {
            break;
        }
        v = p;
    }
    v
}
