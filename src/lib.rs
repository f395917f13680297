//! An undirected adjacency-list [`Graph`] and a binary min-heap
//! [`PriorityQueue`], the building blocks for traversal algorithms such as
//! shortest-path and minimum-spanning-tree searches.

pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use edge::Edge;
pub use error::{Error, Result};
pub use graph::Graph;
pub use priority_queue::PriorityQueue;
