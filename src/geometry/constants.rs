// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the icosahedron routing problem.
//!
//! The problem instance is fixed at build time: the graph is the edge graph
//! of a regular icosahedron, the walk starts at vertex 0, traverses exactly
//! 35 edges, and the edge crossed at the midpoint of the walk must be one
//! that is traversed a second time elsewhere. None of these are runtime
//! parameters; they are the definition of the problem.

use crate::geometry::topology::Vertex;

/// Number of vertices of the icosahedron.
pub const VERTEX_COUNT: usize = 12;

/// Number of edges incident to each vertex (the icosahedron is 5-regular).
pub const DEGREE: usize = 5;

/// Total number of edges. Every edge has two endpoints, so this is
/// VERTEX_COUNT * DEGREE / 2 = 30.
pub const EDGE_COUNT: usize = VERTEX_COUNT * DEGREE / 2;

/// Number of vertices visited by a candidate walk.
pub const WALK_VERTICES: usize = 36;

/// Number of edge traversals in a candidate walk (one less than the number
/// of vertices visited).
pub const WALK_EDGES: usize = WALK_VERTICES - 1;

/// The fixed start vertex.
///
/// The icosahedron's symmetry group is vertex-transitive, so fixing the
/// start is expected to lose no solutions up to relabeling. This is an
/// assumption of the problem definition, not a verified invariant; see
/// DESIGN.md.
pub const START_VERTEX: Vertex = 0;

/// Traversal index of the midpoint edge: the edge between walk position 17
/// and walk position 18 splits the walk into two equal halves.
pub const MEDIAN_POSITION: usize = WALK_VERTICES / 2 - 1;

/// Maximum number of times any vertex may be visited by a viable walk.
///
/// The 36-visit budget allots exactly three visits per vertex, and a vertex
/// of degree 5 needs all three to cover its incident edges (each interior
/// visit contributes two edge endpoints, so two visits reach at most four of
/// the five edges). A fourth visit to any vertex therefore leaves some other
/// vertex short and strands one of its edges.
pub const MAX_VERTEX_VISITS: u32 = 3;

/// Maximum number of times any edge may be traversed by a viable walk.
///
/// 35 traversals over 30 edges leave a surplus of five; a third traversal of
/// a single edge, combined with the vertex cap above, cannot be completed to
/// full coverage within the budget.
pub const MAX_EDGE_VISITS: u32 = 2;

const _: () = assert!(EDGE_COUNT == 30, "icosahedron has 30 edges");
const _: () = assert!(MEDIAN_POSITION == 17, "midpoint splits 35 traversals at index 17");
const _: () = assert!(WALK_EDGES == 35);
