pub use crate::edge::Edge;
pub use crate::error::{Error, Result};
pub use crate::graph::Graph;
pub use crate::priority_queue::PriorityQueue;
