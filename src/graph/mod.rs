//! Directed graphs and topological-order algorithms.
//!
//! The module is organized into three pieces:
//! - `directed`: the CSR graph representation
//! - `toposort`: Kahn's algorithm producing a [`TopologicalSort`] record
//! - `verify`: independent verification of a candidate ordering

pub mod directed;
pub mod toposort;
pub mod verify;

pub use directed::DirectedGraph;
pub use toposort::TopologicalSort;
pub use verify::{verify_topological_order, VerifyError};
