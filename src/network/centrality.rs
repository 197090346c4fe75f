//! Centrality Metrics
//!
//! Degree, betweenness, closeness, and eigenvector centrality over the
//! thresholded relationship graph. All four follow the conventional
//! normalizations: degree by n-1, betweenness per Brandes with the
//! undirected double-count folded into the scale, closeness with the
//! Wasserman-Faust reachability correction, eigenvector by (A+I) power
//! iteration with L2 normalization.

use std::collections::VecDeque;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

/// Iteration cap for the eigenvector power method.
pub const EIGENVECTOR_MAX_ITER: usize = 1000;
/// Per-node convergence tolerance for the eigenvector power method.
pub const EIGENVECTOR_TOLERANCE: f64 = 1e-6;

/// All four centrality scores, indexed by cohort position.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityMetrics {
    pub degree: Vec<f64>,
    pub betweenness: Vec<f64>,
    pub closeness: Vec<f64>,
    pub eigenvector: Vec<f64>,
}

/// Compute every metric for the graph.
pub fn centrality_metrics(graph: &UnGraph<(), ()>) -> CentralityMetrics {
    CentralityMetrics {
        degree: degree_centrality(graph),
        betweenness: betweenness_centrality(graph),
        closeness: closeness_centrality(graph),
        eigenvector: eigenvector_centrality(graph, EIGENVECTOR_MAX_ITER, EIGENVECTOR_TOLERANCE),
    }
}

/// Fraction of possible neighbors each node is connected to.
pub fn degree_centrality(graph: &UnGraph<(), ()>) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    graph
        .node_indices()
        .map(|v| graph.neighbors(v).count() as f64 / (n - 1) as f64)
        .collect()
}

/// BFS distances from `source`; unreachable nodes stay `None`.
fn bfs_distances(graph: &UnGraph<(), ()>, source: NodeIndex) -> Vec<Option<u32>> {
    let mut dist = vec![None; graph.node_count()];
    dist[source.index()] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        let d = dist[v.index()].unwrap_or(0);
        for w in graph.neighbors(v) {
            if dist[w.index()].is_none() {
                dist[w.index()] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    dist
}

/// Brandes' algorithm for shortest-path betweenness, normalized so scores
/// fall in `[0, 1]`.
pub fn betweenness_centrality(graph: &UnGraph<(), ()>) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];
    if n < 3 {
        return centrality;
    }

    for s in graph.node_indices() {
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        sigma[s.index()] = 1.0;
        dist[s.index()] = 0;

        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for w in graph.neighbors(v) {
                if dist[w.index()] < 0 {
                    dist[w.index()] = dist[v.index()] + 1;
                    queue.push_back(w);
                }
                if dist[w.index()] == dist[v.index()] + 1 {
                    sigma[w.index()] += sigma[v.index()];
                    predecessors[w.index()].push(v.index());
                }
            }
        }

        // Dependency accumulation, reverse BFS order.
        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w.index()] {
                delta[v] += sigma[v] / sigma[w.index()] * (1.0 + delta[w.index()]);
            }
            if w != s {
                centrality[w.index()] += delta[w.index()];
            }
        }
    }

    // Each unordered pair was accumulated from both endpoints.
    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    for c in &mut centrality {
        *c *= scale;
    }
    centrality
}

/// Closeness with the Wasserman-Faust correction: the reciprocal of the mean
/// distance to reachable nodes, scaled by the reachable share of the graph so
/// small components do not dominate.
pub fn closeness_centrality(graph: &UnGraph<(), ()>) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }

    graph
        .node_indices()
        .map(|v| {
            let dist = bfs_distances(graph, v);
            let reachable = dist.iter().filter(|d| d.is_some()).count();
            let total: u64 = dist.iter().flatten().map(|&d| d as u64).sum();
            if total == 0 || reachable <= 1 {
                return 0.0;
            }
            let inner = (reachable - 1) as f64 / total as f64;
            inner * ((reachable - 1) as f64 / (n - 1) as f64)
        })
        .collect()
}

/// Eigenvector centrality via power iteration on A+I (the identity shift
/// avoids oscillation on bipartite components). Returns the last iterate if
/// the tolerance is not met within `max_iter` rounds.
pub fn eigenvector_centrality(
    graph: &UnGraph<(), ()>,
    max_iter: usize,
    tolerance: f64,
) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if graph.edge_count() == 0 {
        return vec![0.0; n];
    }

    let mut x = vec![1.0 / n as f64; n];
    for _ in 0..max_iter {
        let last = x.clone();
        // x = (A + I) * last
        for v in graph.node_indices() {
            for w in graph.neighbors(v) {
                x[w.index()] += last[v.index()];
            }
        }
        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut x {
                *v /= norm;
            }
        }
        let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * tolerance {
            break;
        }
    }
    x
}
