// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static tables for the icosahedron edge graph.
//!
//! Two tables describe the graph:
//! - [`VERTEX_MAP`]: each vertex's five neighbors, in the fixed order that
//!   defines the choice counter's slot indexing;
//! - [`EDGE_LOOKUP`]: symmetric vertex-pair to edge-id table, with
//!   [`NO_EDGE`] marking non-adjacent pairs, so lookups need no sorting of
//!   the endpoints.
//!
//! Both tables are authored by hand and never constructed at run time. Their
//! mutual consistency is asserted in the tests below; a violation would be a
//! data-authoring bug, not a runtime condition.

use crate::geometry::constants::{DEGREE, EDGE_COUNT, VERTEX_COUNT};
use crate::geometry::topology::{EdgeId, Topology, Vertex};

/// Sentinel in [`EDGE_LOOKUP`] for vertex pairs with no connecting edge.
const NO_EDGE: i8 = -1;

/// Adjacency table: `VERTEX_MAP[v][slot]` is the vertex at the far end of
/// `v`'s `slot`-th incident edge.
const VERTEX_MAP: [[Vertex; DEGREE]; VERTEX_COUNT] = [
    [3, 5, 6, 8, 9],   // 0
    [6, 7, 8, 10, 11], // 1
    [3, 4, 7, 9, 11],  // 2
    [0, 2, 4, 5, 9],   // 3
    [2, 3, 5, 10, 11], // 4
    [0, 3, 4, 8, 10],  // 5
    [0, 1, 7, 8, 9],   // 6
    [1, 2, 6, 9, 11],  // 7
    [0, 1, 5, 6, 10],  // 8
    [0, 2, 3, 6, 7],   // 9
    [1, 4, 5, 8, 11],  // 10
    [1, 2, 4, 7, 10],  // 11
];

/// Edge identification table: `EDGE_LOOKUP[a][b]` is the id (0..29) of the
/// edge joining `a` and `b`, or [`NO_EDGE`]. Symmetric about the diagonal.
const EDGE_LOOKUP: [[i8; VERTEX_COUNT]; VERTEX_COUNT] = [
    [-1, -1, -1, 0, -1, 1, 2, -1, 3, 4, -1, -1],
    [-1, -1, -1, -1, -1, -1, 5, 6, 7, -1, 8, 9],
    [-1, -1, -1, 10, 11, -1, -1, 12, -1, 13, -1, 14],
    [0, -1, 10, -1, 15, 16, -1, -1, -1, 17, -1, -1],
    [-1, -1, 11, 15, -1, 18, -1, -1, -1, -1, 19, 20],
    [1, -1, -1, 16, 18, -1, -1, -1, 21, -1, 22, -1],
    [2, 5, -1, -1, -1, -1, -1, 23, 24, 25, -1, -1],
    [-1, 6, 12, -1, -1, -1, 23, -1, -1, 26, -1, 27],
    [3, 7, -1, -1, -1, 21, 24, -1, -1, -1, 28, -1],
    [4, -1, 13, 17, -1, -1, 25, 26, -1, -1, -1, -1],
    [-1, 8, -1, -1, 19, 22, -1, -1, 28, -1, -1, 29],
    [-1, 9, 14, -1, 20, -1, -1, 27, -1, -1, 29, -1],
];

/// The edge graph of a regular icosahedron: 12 vertices, each of degree 5,
/// 30 edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Icosahedron;

impl Topology for Icosahedron {
    fn vertex_count(&self) -> usize {
        VERTEX_COUNT
    }

    fn degree(&self) -> usize {
        DEGREE
    }

    fn edge_count(&self) -> usize {
        EDGE_COUNT
    }

    fn neighbor(&self, vertex: Vertex, slot: usize) -> Vertex {
        VERTEX_MAP[vertex][slot]
    }

    fn edge_between(&self, a: Vertex, b: Vertex) -> Option<EdgeId> {
        match EDGE_LOOKUP[a][b] {
            NO_EDGE => None,
            edge => Some(edge as EdgeId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_have_distinct_neighbors_and_no_self_loops() {
        for (v, row) in VERTEX_MAP.iter().enumerate() {
            for (slot, &n) in row.iter().enumerate() {
                assert!(n < VERTEX_COUNT);
                assert_ne!(n, v, "self loop at vertex {}", v);
                for &m in &row[slot + 1..] {
                    assert_ne!(n, m, "duplicate neighbor {} in row {}", n, v);
                }
            }
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for (v, row) in VERTEX_MAP.iter().enumerate() {
            for &n in row {
                assert!(
                    VERTEX_MAP[n].contains(&v),
                    "vertex {} lists {} but not vice versa",
                    v,
                    n
                );
            }
        }
    }

    #[test]
    fn test_edge_lookup_is_symmetric() {
        for a in 0..VERTEX_COUNT {
            for b in 0..VERTEX_COUNT {
                assert_eq!(EDGE_LOOKUP[a][b], EDGE_LOOKUP[b][a]);
            }
        }
    }

    #[test]
    fn test_edge_lookup_agrees_with_adjacency() {
        let ico = Icosahedron;
        for a in 0..VERTEX_COUNT {
            for b in 0..VERTEX_COUNT {
                let adjacent = VERTEX_MAP[a].contains(&b);
                assert_eq!(
                    ico.edge_between(a, b).is_some(),
                    adjacent,
                    "edge table disagrees with adjacency for ({}, {})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_every_edge_id_joins_exactly_one_pair() {
        // Each edge id must appear in exactly two cells of the symmetric
        // lookup table: (a, b) and (b, a) for its single endpoint pair.
        let mut occurrences = [0u32; EDGE_COUNT];
        for row in &EDGE_LOOKUP {
            for &cell in row {
                if cell != NO_EDGE {
                    occurrences[cell as usize] += 1;
                }
            }
        }
        for (edge, &count) in occurrences.iter().enumerate() {
            assert_eq!(count, 2, "edge {} appears in {} cells", edge, count);
        }
    }

    #[test]
    fn test_neighbor_matches_edge_lookup() {
        let ico = Icosahedron;
        for v in 0..VERTEX_COUNT {
            for slot in 0..DEGREE {
                let n = ico.neighbor(v, slot);
                assert!(ico.edge_between(v, n).is_some());
            }
        }
    }
}
