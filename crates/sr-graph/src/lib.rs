//! `sr-graph` — generic weighted graph and its classic algorithms.
//!
//! The graph knows nothing about streets: vertices are any [`VertexKey`] and
//! each edge carries an opaque payload plus an `f64` weight.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`key`]           | `VertexKey` trait and its impls                        |
//! | [`graph`]         | `Graph<V, P>`, `Edge<P>` — storage, mutation, queries  |
//! | [`shortest_path`] | `ShortestPathTree`, `Path` — Dijkstra                  |
//! | [`spanning`]      | `SpanningForest` — Prim and Kruskal                    |
//! | [`export`]        | `GraphExport` — labelled node/edge lists for plotting  |
//! | [`error`]         | `GraphError`, `GraphResult<T>`                         |
//!
//! # Example
//!
//! ```
//! use sr_graph::Graph;
//!
//! let mut g: Graph<u32> = Graph::undirected();
//! for v in 1..=3 {
//!     g.add_vertex(v).unwrap();
//! }
//! g.add_edge(1, 2, (), 4.0).unwrap();
//! g.add_edge(2, 3, (), 1.0).unwrap();
//! g.add_edge(1, 3, (), 9.0).unwrap();
//!
//! let path = g.shortest_path(&1, &3).unwrap();
//! assert_eq!(path.vertices(), &[1, 2, 3]);
//! assert_eq!(path.weight(), 5.0);
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod key;
pub mod shortest_path;
pub mod spanning;


pub use error::{GraphError, GraphResult};
pub use export::{ExportEdge, ExportNode, GraphExport};
pub use graph::{Edge, Graph};
pub use key::VertexKey;
pub use shortest_path::{Path, ShortestPathTree};
pub use spanning::{SpanningEdge, SpanningForest};
