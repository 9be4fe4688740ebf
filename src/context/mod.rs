// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem definition and search context.
//!
//! A [`Problem`] fixes everything that defines one search: the topology, the
//! start vertex, the walk length, the midpoint position, and the per-walk
//! visit caps. These are constants of the problem, not runtime
//! configuration; the LED-strip instance is [`Problem::icosahedron`].
//!
//! A [`SearchContext`] owns all mutable state of one run: the choice
//! counter, the walk buffer, the visit tally, and the statistics. The
//! enumeration driver is the single writer for the duration of a run, which
//! also makes the outer-digit partitioning described in DESIGN.md a safe
//! parallelization seam: independent runs need nothing but their own
//! contexts.

use crate::counter::ChoiceCounter;
use crate::geometry::constants::{
    MAX_EDGE_VISITS, MAX_VERTEX_VISITS, MEDIAN_POSITION, START_VERTEX, WALK_EDGES,
};
use crate::geometry::{Icosahedron, Topology, Vertex};
use crate::state::{Statistics, VisitTally};
use crate::walk::Walk;

/// One fully specified search instance.
#[derive(Debug, Clone)]
pub struct Problem<T: Topology> {
    /// The graph being walked.
    pub topology: T,
    /// First vertex of every candidate walk.
    pub start: Vertex,
    /// Number of edge traversals per candidate walk.
    pub walk_edges: usize,
    /// Traversal index of the midpoint edge that must be revisited.
    pub median_position: usize,
    /// A walk visiting any vertex more often than this is dead.
    pub max_vertex_visits: u32,
    /// A walk traversing any edge more often than this is dead.
    pub max_edge_visits: u32,
}

impl<T: Topology> Problem<T> {
    /// Define a problem over `topology`.
    ///
    /// # Panics
    ///
    /// Panics if the start vertex or median position is out of range, or if
    /// the walk is too short to have a midpoint.
    pub fn new(
        topology: T,
        start: Vertex,
        walk_edges: usize,
        median_position: usize,
        max_vertex_visits: u32,
        max_edge_visits: u32,
    ) -> Self {
        assert!(start < topology.vertex_count(), "start vertex out of range");
        assert!(walk_edges >= 1, "walk must traverse at least one edge");
        assert!(
            median_position < walk_edges,
            "median position must index a traversal"
        );
        assert!(max_vertex_visits >= 1 && max_edge_visits >= 1);
        Self {
            topology,
            start,
            walk_edges,
            median_position,
            max_vertex_visits,
            max_edge_visits,
        }
    }

    /// Number of vertices a candidate walk visits.
    pub fn walk_vertices(&self) -> usize {
        self.walk_edges + 1
    }
}

impl Problem<Icosahedron> {
    /// The LED-strip routing instance: 35 traversals on the icosahedron,
    /// starting at vertex 0, midpoint edge at traversal 17.
    pub fn icosahedron() -> Self {
        Problem::new(
            Icosahedron,
            START_VERTEX,
            WALK_EDGES,
            MEDIAN_POSITION,
            MAX_VERTEX_VISITS,
            MAX_EDGE_VISITS,
        )
    }
}

/// All mutable state of one enumeration run.
#[derive(Debug)]
pub struct SearchContext {
    /// The odometer over neighbor-slot choices.
    pub counter: ChoiceCounter,
    /// Buffer for the currently materialized walk.
    pub walk: Walk,
    /// Per-walk visit counts.
    pub tally: VisitTally,
    /// Run-wide outcome counters.
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create fresh state for one run of `problem`.
    pub fn new<T: Topology>(problem: &Problem<T>) -> Self {
        Self {
            counter: ChoiceCounter::new(problem.walk_edges, problem.topology.degree() as u8),
            walk: Walk::new(problem.walk_vertices()),
            tally: VisitTally::new(problem.topology.vertex_count(), problem.topology.edge_count()),
            statistics: Statistics::new(),
        }
    }
}
