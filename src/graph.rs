use std::{
    borrow::Borrow,
    fmt::{self, Display},
    ops::Index,
};

use derivative::Derivative;

use crate::{
    edge::Edge,
    error::{Error, Result},
    tracing_support::info_span,
};

/// An undirected graph stored as a vertex list plus one adjacency list per
/// vertex.
///
/// A vertex is identified only by its position in the vertex list. Adding an
/// edge `(u, v)` records `u -> v` in the adjacency list of `u` and `v -> u` in
/// the adjacency list of `v`, so [`edge_count`](Self::edge_count) is always
/// twice the number of connections added. Vertices and edges are never
/// removed.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Debug(bound = "V: fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq")
)]
pub struct Graph<V> {
    vertices: Vec<V>,
    // Invariant: `adjacency.len() == vertices.len()`.
    adjacency: Vec<Vec<Edge>>,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph owning `initial` as its vertices, with no edges.
    pub fn from_vertices(initial: impl IntoIterator<Item = V>) -> Self {
        let vertices: Vec<V> = initial.into_iter().collect();
        let adjacency = vertices.iter().map(|_| Vec::new()).collect();
        Self {
            vertices,
            adjacency,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed edges, which counts each undirected
    /// connection twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, value: V) -> usize {
        let _span = info_span!("Graph::add_vertex").entered();
        self.vertices.push(value);
        self.adjacency.push(Vec::new());
        self.vertices.len() - 1
    }

    /// Connects `edge.u` and `edge.v` in both directions.
    ///
    /// Fails with [`Error::IndexOutOfRange`] without changing the graph if
    /// either endpoint is not a vertex index.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let _span = info_span!("Graph::add_edge", u = edge.u, v = edge.v).entered();
        self.check_index(edge.u)?;
        self.check_index(edge.v)?;
        self.adjacency[edge.u].push(edge);
        self.adjacency[edge.v].push(edge.reversed());
        Ok(())
    }

    pub fn add_edge_by_indices(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(Edge::new(u, v))
    }

    /// Connects the first vertices equal to `first` and `second`.
    pub fn add_edge_by_vertices<Q>(&mut self, first: &Q, second: &Q) -> Result<()>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge_by_indices(u, v)
    }

    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.vertices.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.vertices.len(),
        })
    }

    /// Returns the index of the first vertex equal to `value`.
    ///
    /// This is a linear scan.
    pub fn index_of<Q>(&self, value: &Q) -> Result<usize>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.vertices
            .iter()
            .position(|vertex| <V as Borrow<Q>>::borrow(vertex) == value)
            .ok_or(Error::NotFound)
    }

    pub fn contains_vertex<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of(value).is_ok()
    }

    /// Returns the values of the vertices adjacent to `index`, in the order
    /// the edges were added. A vertex appears once per connecting edge.
    pub fn neighbors_for_index(&self, index: usize) -> Result<Vec<&V>> {
        Ok(self
            .edges_for_index(index)?
            .iter()
            .map(|edge| &self.vertices[edge.v])
            .collect())
    }

    pub fn neighbors_for_vertex<Q>(&self, value: &Q) -> Result<Vec<&V>>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.neighbors_for_index(self.index_of(value)?)
    }

    /// Returns the outgoing edges of `index`. Every edge has `u == index`.
    pub fn edges_for_index(&self, index: usize) -> Result<&[Edge]> {
        self.check_index(index)?;
        Ok(&self.adjacency[index])
    }

    pub fn edges_for_vertex<Q>(&self, value: &Q) -> Result<&[Edge]>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.edges_for_index(self.index_of(value)?)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Iterates over every stored directed edge, grouped by source index.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
        }
    }
}

impl<V> From<Vec<V>> for Graph<V> {
    fn from(vertices: Vec<V>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl<V> FromIterator<V> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<V> Index<usize> for Graph<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.vertices[index]
    }
}

/// One line per vertex, `vertex -> [neighbor, ...]`, in index order.
impl<V: Display> Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (vertex, edges)) in self.vertices.iter().zip(&self.adjacency).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{vertex} -> [")?;
            for (j, edge) in edges.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.vertices[edge.v])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
