//! Labelled node/edge export for the visualisation layer.
//!
//! The export is a plain serialisable snapshot: nodes are numbered by
//! insertion order and carry a caller-supplied label; undirected edges are
//! emitted once.  Nothing in the routing path depends on it.

use rustc_hash::FxHashMap;
use serde::Serialize;

use sr_core::NodeId;

use crate::{Graph, VertexKey};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportNode {
    pub id: NodeId,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphExport {
    pub directed: bool,
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl GraphExport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<V: VertexKey, P> Graph<V, P> {
    /// Snapshot the graph, labelling each vertex with `label(v)`.
    pub fn to_export<F>(&self, label: F) -> GraphExport
    where
        F: Fn(&V) -> String,
    {
        let ids: FxHashMap<&V, NodeId> = self
            .vertices()
            .enumerate()
            .filter_map(|(i, v)| NodeId::try_from(i).ok().map(|id| (v, id)))
            .collect();

        let nodes = self
            .vertices()
            .filter_map(|v| {
                ids.get(v).map(|&id| ExportNode { id, label: label(v) })
            })
            .collect();

        let edges = self
            .edges()
            .filter_map(|(s, t, weight)| {
                let (&source, &target) = (ids.get(s)?, ids.get(t)?);
                (self.is_directed() || source <= target)
                    .then_some(ExportEdge { source, target, weight })
            })
            .collect();

        GraphExport {
            directed: self.is_directed(),
            nodes,
            edges,
        }
    }
}
