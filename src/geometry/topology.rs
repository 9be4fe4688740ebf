// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The graph abstraction the search engine runs over.
//!
//! The engine itself never mentions the icosahedron: it sees a regular graph
//! through the [`Topology`] trait and enumerates walks on it. The production
//! instance is [`crate::geometry::Icosahedron`]; tests substitute a smaller
//! complete graph to make exhaustive enumeration cheap.

/// Unique identifier for a vertex (0..vertex_count).
pub type Vertex = usize;

/// Unique identifier for an edge (0..edge_count).
pub type EdgeId = usize;

/// A fixed, regular, undirected graph described by static tables.
///
/// # Slot ordering
///
/// `neighbor(v, slot)` exposes each vertex's neighbors in a fixed order.
/// That order is load-bearing: the choice counter's digits are slot indices,
/// so the enumeration order of the whole search is defined by it.
///
/// # Invariants
///
/// Implementations must guarantee:
/// - every vertex has exactly `degree()` distinct neighbors;
/// - `edge_between` is symmetric and returns `Some` exactly for the pairs
///   that appear in the neighbor tables;
/// - every edge id in `0..edge_count()` is reachable from exactly two
///   vertices' neighbor rows.
///
/// These are table-authoring invariants, not runtime conditions; the
/// implementations check them in their tests.
pub trait Topology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges incident to every vertex.
    fn degree(&self) -> usize;

    /// Total number of edges.
    fn edge_count(&self) -> usize;

    /// The vertex at the far end of `vertex`'s `slot`-th incident edge.
    ///
    /// Total and pure for `vertex < vertex_count()` and `slot < degree()`.
    fn neighbor(&self, vertex: Vertex, slot: usize) -> Vertex;

    /// The edge joining `a` and `b`, or `None` if they are not adjacent.
    ///
    /// Symmetric: `edge_between(a, b) == edge_between(b, a)`.
    fn edge_between(&self, a: Vertex, b: Vertex) -> Option<EdgeId>;
}
