//! # `linext` - Topological Ordering Toolkit
//!
//! A small graph-algorithms library for directed graphs over contiguous
//! integer vertices: topological sort, and verification that a candidate
//! ordering is a valid linear extension of the edge relation.
//!
//! ## Overview
//!
//! The crate is built around three pieces:
//!
//! 1. **[`DirectedGraph`]**: an immutable directed graph in CSR
//!    (compressed sparse row) form, built once from an adjacency list or an
//!    edge list and then only read.
//! 2. **[`TopologicalSort`]**: the result of running Kahn's algorithm over a
//!    graph — an `is_dag` flag plus the computed vertex order.
//! 3. **[`verify_topological_order`]**: an independent checker that confirms
//!    an ordering really is a topological order of a graph, reporting the
//!    first violated invariant as a structured [`VerifyError`] rather than
//!    aborting.
//!
//! The sorter and the verifier are deliberately separate: the verifier never
//! trusts the producer, so it can be pointed at orderings from any source
//! (a scheduler, a build planner, a hand-written fixture) and used as a test
//! oracle.
//!
//! ## Example
//!
//! ```rust
//! use linext::{DirectedGraph, TopologicalSort, verify_topological_order};
//!
//! // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
//! let graph = DirectedGraph::from_adjacency(&[
//!     vec![1, 2],
//!     vec![3],
//!     vec![3],
//!     vec![],
//! ]);
//!
//! let sort = TopologicalSort::run(&graph);
//! assert!(sort.is_dag);
//! assert!(verify_topological_order(&graph, &sort).is_ok());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{verify_topological_order, DirectedGraph, TopologicalSort, VerifyError};
