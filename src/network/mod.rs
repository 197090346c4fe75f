//! Graph Derivation
//!
//! Thresholds the relationship matrix into an undirected graph and computes
//! structural centrality metrics on it.

pub mod adjacency;
pub mod centrality;

pub use adjacency::{build_graph, to_adjacency, DEFAULT_EDGE_THRESHOLD};
pub use centrality::{centrality_metrics, CentralityMetrics};
