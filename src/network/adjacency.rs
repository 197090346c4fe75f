//! Adjacency Derivation
//!
//! Thresholds the relationship matrix into a binary undirected graph for the
//! centrality metrics.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::components::RelationshipMatrix;

/// Default relationship strength above which a pair counts as connected.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 5.0;

/// Binary adjacency matrix: `1` iff the relationship is strictly greater
/// than `threshold`.
pub fn to_adjacency(matrix: &RelationshipMatrix, threshold: f64) -> Vec<Vec<u8>> {
    let n = matrix.size();
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| u8::from(i != j && matrix.get(i, j) > threshold))
                .collect()
        })
        .collect()
}

/// Build an undirected graph from an adjacency matrix.
///
/// All N nodes are added (isolated students stay in the graph with zero
/// centrality); node index order matches cohort order.
pub fn build_graph(adjacency: &[Vec<u8>]) -> UnGraph<(), ()> {
    let n = adjacency.len();
    let mut graph = UnGraph::with_capacity(n, 0);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if adjacency[i][j] == 1 {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut m = RelationshipMatrix::zeros(3);
        m.set_pair(0, 1, 5.0);
        m.set_pair(0, 2, 5.1);
        let adj = to_adjacency(&m, DEFAULT_EDGE_THRESHOLD);
        assert_eq!(adj[0][1], 0);
        assert_eq!(adj[0][2], 1);
        assert_eq!(adj[2][0], 1);
    }

    #[test]
    fn diagonal_never_produces_self_loops() {
        let m = RelationshipMatrix::zeros(4);
        let adj = to_adjacency(&m, -1.0);
        for (i, row) in adj.iter().enumerate() {
            assert_eq!(row[i], 0);
        }
    }

    #[test]
    fn graph_keeps_isolated_nodes() {
        let mut m = RelationshipMatrix::zeros(4);
        m.set_pair(0, 1, 10.0);
        let graph = build_graph(&to_adjacency(&m, 5.0));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
    }
}
