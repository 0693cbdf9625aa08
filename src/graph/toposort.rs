//! Topological sort of a directed graph using Kahn's algorithm.
//!
//! The sorter does **not** assume acyclicity: it reports via `is_dag`
//! whether a full topological order was produced. On a cyclic graph the
//! partial order drained before progress stopped is still returned, but no
//! ordering guarantee is attached to it.

use std::collections::VecDeque;

use crate::graph::DirectedGraph;

/// The result of a topological sort.
///
/// When `is_dag` is `true`, `order` is a permutation of all vertices such
/// that every edge points from an earlier to a later position. When
/// `is_dag` is `false`, `order` holds only the pre-topological prefix: the
/// vertices emitted before every remaining vertex was stuck on a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologicalSort {
    /// `true` if the graph is acyclic and `order` is a full topological order.
    pub is_dag: bool,
    /// The computed vertex order; meaningful as a total order only when
    /// `is_dag` is `true`.
    pub order: Vec<usize>,
}

impl TopologicalSort {
    /// Computes a topological ordering of `graph` using Kahn's algorithm.
    ///
    /// Runs in \(O(n + m)\). Sources are seeded in increasing vertex order,
    /// so the result is deterministic for a given graph.
    pub fn run(graph: &DirectedGraph) -> Self {
        let n = graph.vertex_count();

        let mut indeg = vec![0usize; n];
        for u in 0..n {
            for v in graph.neighbors(u) {
                indeg[v] += 1;
            }
        }

        // Sources in increasing order for determinism.
        let mut queue = VecDeque::new();
        for u in 0..n {
            if indeg[u] == 0 {
                queue.push_back(u);
            }
        }

        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            order.push(u);

            for v in graph.neighbors(u) {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        let is_dag = order.len() == n;
        Self { is_dag, order }
    }
}
