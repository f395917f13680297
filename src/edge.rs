use std::fmt::{self, Display};

/// A connection from the vertex at index `u` to the vertex at index `v`.
///
/// An `Edge` is just a pair of indices; it knows nothing about the graph it
/// belongs to, so bounds are checked by [`Graph::add_edge`](crate::Graph::add_edge)
/// rather than here. Undirected graphs store each connection twice, once in
/// each direction.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    /// The "from" vertex.
    pub u: usize,
    /// The "to" vertex.
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Edge { u, v }
    }

    /// Returns the same connection pointing the other way.
    pub fn reversed(&self) -> Self {
        Edge {
            u: self.v,
            v: self.u,
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.u, self.v)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Edge { u, v }
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.u, edge.v)
    }
}
