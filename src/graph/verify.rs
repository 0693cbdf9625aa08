//! Independent verification of topological orderings.
//!
//! The verifier checks a [`TopologicalSort`] against the graph it claims to
//! order, without trusting the producer. Each violated invariant is reported
//! as a structured [`VerifyError`] naming the concrete vertices and
//! positions involved, so a test harness can collect and report failures
//! instead of aborting on the first one.

use core::fmt;

use crate::graph::{DirectedGraph, TopologicalSort};

/// A violation found while verifying a candidate topological order.
///
/// Variants carry the offending indices so diagnostics can name exactly
/// what went wrong, not just that something did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The order's length differs from the graph's vertex count.
    LengthMismatch {
        /// The graph's vertex count.
        expected: usize,
        /// The order's actual length.
        found: usize,
    },
    /// An entry of the order is not a valid vertex index.
    VertexOutOfBounds {
        /// Position of the offending entry within the order.
        position: usize,
        /// The out-of-range value found there.
        vertex: usize,
        /// The graph's vertex count (valid vertices are `0..vertex_count`).
        vertex_count: usize,
    },
    /// A vertex appears more than once, so the order is not a permutation.
    DuplicateVertex {
        /// The repeated vertex.
        vertex: usize,
        /// Position of its first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
    /// An edge points backward (or to itself) in position terms.
    BackwardEdge {
        /// Source vertex of the violating edge.
        from: usize,
        /// Target vertex of the violating edge.
        to: usize,
        /// Position of the source in the order.
        from_pos: usize,
        /// Position of the target in the order.
        to_pos: usize,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "order has length {found}, expected {expected} (one entry per vertex)")
            }
            Self::VertexOutOfBounds {
                position,
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "order[{position}] = {vertex} is not a vertex of a graph with {vertex_count} vertices"
                )
            }
            Self::DuplicateVertex {
                vertex,
                first,
                second,
            } => {
                write!(
                    f,
                    "vertex {vertex} appears at both order[{first}] and order[{second}]; order is not a permutation"
                )
            }
            Self::BackwardEdge {
                from,
                to,
                from_pos,
                to_pos,
            } => {
                write!(
                    f,
                    "edge {from}->{to} points backward: position {from_pos} is not before position {to_pos}"
                )
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// Verifies that `sort` is a valid topological order of `graph`.
///
/// When `sort.is_dag` is `true`, checks that `sort.order`:
/// 1. has exactly one entry per vertex,
/// 2. is a permutation of `0..n` (every entry in range, no duplicates),
/// 3. places the source of every edge strictly before its target.
///
/// The strict position check rejects self-loops: a graph containing
/// `v -> v` has no valid topological order.
///
/// When `sort.is_dag` is `false` no check is performed and the call
/// succeeds: there is no total order to validate, and verification of
/// pre-topological orderings for cyclic graphs is not defined here.
///
/// The check is pure: inputs are not mutated, the inverse-position map is
/// rebuilt per call, and repeated calls on the same pair return the same
/// result.
///
/// # Errors
///
/// Returns the first [`VerifyError`] encountered, in the check order above.
pub fn verify_topological_order(
    graph: &DirectedGraph,
    sort: &TopologicalSort,
) -> Result<(), VerifyError> {
    if !sort.is_dag {
        return Ok(());
    }

    let n = graph.vertex_count();
    if sort.order.len() != n {
        return Err(VerifyError::LengthMismatch {
            expected: n,
            found: sort.order.len(),
        });
    }

    // Inverse-position map: pos[v] = index of v within the order.
    // usize::MAX marks "not seen yet"; n < usize::MAX since order fits memory.
    let mut pos = vec![usize::MAX; n];
    for (i, &v) in sort.order.iter().enumerate() {
        if v >= n {
            return Err(VerifyError::VertexOutOfBounds {
                position: i,
                vertex: v,
                vertex_count: n,
            });
        }
        if pos[v] != usize::MAX {
            return Err(VerifyError::DuplicateVertex {
                vertex: v,
                first: pos[v],
                second: i,
            });
        }
        pos[v] = i;
    }
    // With length n, all entries in range, and no duplicates, the order is a
    // permutation: a missing vertex is impossible at this point.

    for &v in &sort.order {
        for (_, u) in graph.out_edges(v) {
            if pos[v] >= pos[u] {
                return Err(VerifyError::BackwardEdge {
                    from: v,
                    to: u,
                    from_pos: pos[v],
                    to_pos: pos[u],
                });
            }
        }
    }

    Ok(())
}
