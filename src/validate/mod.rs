// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental walk validation.
//!
//! [`check_walk`] scans a materialized walk once, front to back, keeping
//! per-vertex and per-edge visit counts. The moment a count exceeds its cap
//! the walk is provably dead at that position, so the validator prunes the
//! choice counter there and stops. A walk that survives the scan is
//! structurally valid and faces the two global acceptance checks: every edge
//! traversed at least once, and the midpoint edge traversed a second time
//! somewhere else.
//!
//! Rejection by either global check does not prune: such a walk was not
//! provably dead before full expansion, so enumeration simply continues from
//! the next increment.

use itertools::Itertools;

use crate::context::Problem;
use crate::counter::ChoiceCounter;
use crate::geometry::Topology;
use crate::state::VisitTally;
use crate::walk::Walk;

/// Outcome of validating one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A visit cap was exceeded at this walk position; the counter suffix
    /// from this position on has been maxed out.
    Pruned {
        /// Walk position (1-based traversal index) where the violation hit.
        position: usize,
    },
    /// The walk completed but left at least one edge untraversed.
    RejectedCoverage,
    /// The walk covers every edge but its midpoint edge is traversed only
    /// once.
    RejectedMedian,
    /// A solution: full coverage and a revisited midpoint edge.
    Accepted,
}

/// Validate one walk, pruning `counter` if a visit cap is violated.
///
/// # Panics
///
/// Panics if consecutive walk vertices are not adjacent in the topology.
/// Materialization guarantees adjacency, so this indicates an inconsistency
/// in the topology's own tables and is treated as fatal.
pub fn check_walk<T: Topology>(
    problem: &Problem<T>,
    walk: &Walk,
    tally: &mut VisitTally,
    counter: &mut ChoiceCounter,
) -> Verdict {
    let vertices = walk.vertices();
    tally.reset();
    tally.visit_vertex(vertices[0]);

    for (index, (&prev, &cur)) in vertices.iter().tuple_windows().enumerate() {
        let position = index + 1;
        let vertex_visits = tally.visit_vertex(cur);
        let edge = edge_of(problem, prev, cur);
        let edge_visits = tally.visit_edge(edge);
        if vertex_visits > problem.max_vertex_visits || edge_visits > problem.max_edge_visits {
            counter.prune_from(position);
            return Verdict::Pruned { position };
        }
    }

    if tally.uncovered_edge().is_some() {
        return Verdict::RejectedCoverage;
    }

    let m = problem.median_position;
    let median_edge = edge_of(problem, vertices[m], vertices[m + 1]);
    if tally.edge_visits(median_edge) < 2 {
        return Verdict::RejectedMedian;
    }

    Verdict::Accepted
}

fn edge_of<T: Topology>(problem: &Problem<T>, a: usize, b: usize) -> usize {
    problem
        .topology
        .edge_between(a, b)
        .unwrap_or_else(|| panic!("no edge between consecutive walk vertices {a} and {b}"))
}
