//! A compact directed graph over contiguous integer vertices, in CSR form.
//!
//! CSR (compressed sparse row) stores all edge targets in one contiguous
//! array, row-major by source vertex. This is the standard layout for
//! read-only graph algorithms: outgoing-edge access is a slice lookup.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: `Vec<usize>` of length `m` (edge targets, row-major)

/// An immutable directed graph over vertices `0..n`.
///
/// Vertices are identified by contiguous `usize` indices. Edges are stored
/// in CSR form and carry an implicit edge index: edge `j` is the `j`-th
/// entry of the row-major target array, so indices are stable and unique
/// across the whole graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Builds CSR from adjacency list |
/// | `out_edges` / `neighbors` | \(O(1)\) | Returns iterator over a row |
/// | `out_degree` | \(O(1)\) | Offset difference |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of one row |
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl DirectedGraph {
    /// Builds a graph from an adjacency list.
    ///
    /// `adjacency[v]` lists the targets of `v`'s outgoing edges. Parallel
    /// edges are kept; they get distinct edge indices.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a vertex index out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let n = adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        let mut total_edges = 0usize;
        for nbrs in adjacency {
            total_edges = total_edges.saturating_add(nbrs.len());
            offsets.push(total_edges);
        }

        let mut targets = Vec::with_capacity(total_edges);
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                assert!(v < n, "edge {u}->{v} is out of bounds for n={n}");
                targets.push(v);
            }
        }

        Self { offsets, targets }
    }

    /// Builds a graph with `n` vertices from an explicit edge list.
    ///
    /// Edge order within each source row follows the input order.
    ///
    /// # Panics
    ///
    /// Panics if any edge endpoint is `>= n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for &(u, v) in edges {
            assert!(u < n, "edge source {u} is out of bounds for n={n}");
            assert!(v < n, "edge target {v} is out of bounds for n={n}");
            adjacency[u].push(v);
        }
        Self::from_adjacency(&adjacency)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns the outgoing edges of `vertex` as `(edge index, target)` pairs.
    ///
    /// The edge index is the edge's position in the row-major target array,
    /// unique across the graph.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        let start = self.offsets[vertex];
        let end = self.offsets[vertex + 1];
        (start..end).map(move |j| (j, self.targets[j]))
    }

    /// Returns the out-neighbors of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges(vertex).map(|(_, v)| v)
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Checks if an edge exists from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(to < self.vertex_count(), "vertex {to} out of bounds");
        self.neighbors(from).any(|v| v == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_basic_properties() {
        // 0 -> 1, 2
        // 1 -> 2
        // 2 ->
        let graph = DirectedGraph::from_adjacency(&[vec![1, 2], vec![2], vec![]]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.out_degree(2), 0);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 0));
    }

    #[test]
    fn out_edges_carry_row_major_indices() {
        let graph = DirectedGraph::from_adjacency(&[vec![1, 2], vec![2], vec![]]);

        let row0: Vec<_> = graph.out_edges(0).collect();
        assert_eq!(row0, vec![(0, 1), (1, 2)]);

        let row1: Vec<_> = graph.out_edges(1).collect();
        assert_eq!(row1, vec![(2, 2)]);

        assert_eq!(graph.out_edges(2).count(), 0);
    }

    #[test]
    fn from_edges_matches_adjacency() {
        let from_edges = DirectedGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
        let from_adjacency = DirectedGraph::from_adjacency(&[vec![1, 2], vec![2], vec![]]);

        assert_eq!(from_edges.vertex_count(), from_adjacency.vertex_count());
        assert_eq!(from_edges.edge_count(), from_adjacency.edge_count());
        for v in 0..3 {
            let a: Vec<_> = from_edges.neighbors(v).collect();
            let b: Vec<_> = from_adjacency.neighbors(v).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn empty_graph() {
        let graph = DirectedGraph::from_adjacency(&[]);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1), (0, 1)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_degree(0), 2);
        let row: Vec<_> = graph.out_edges(0).collect();
        assert_eq!(row, vec![(0, 1), (1, 1)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_edge_panics() {
        let _ = DirectedGraph::from_adjacency(&[vec![3]]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_vertex_access_panics() {
        let graph = DirectedGraph::from_adjacency(&[vec![]]);
        let _ = graph.out_degree(1);
    }
}
