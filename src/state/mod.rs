// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state: per-walk visit tallies and run-wide statistics.
//!
//! Both live inside the search context and are owned exclusively by the
//! enumeration driver; there is no shared or global mutable state.

use crate::geometry::{EdgeId, Vertex};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Per-walk visit counts, reset at the start of every validation pass.
#[derive(Debug, Clone)]
pub struct VisitTally {
    vertex_visits: Vec<u32>,
    edge_visits: Vec<u32>,
}

impl VisitTally {
    /// Create a tally for a graph with the given vertex and edge counts.
    pub fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_visits: vec![0; vertex_count],
            edge_visits: vec![0; edge_count],
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.vertex_visits.fill(0);
        self.edge_visits.fill(0);
    }

    /// Record a visit to `vertex` and return its new visit count.
    pub fn visit_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertex_visits[vertex] += 1;
        self.vertex_visits[vertex]
    }

    /// Record a traversal of `edge` and return its new traversal count.
    pub fn visit_edge(&mut self, edge: EdgeId) -> u32 {
        self.edge_visits[edge] += 1;
        self.edge_visits[edge]
    }

    /// How many times `edge` has been traversed this walk.
    pub fn edge_visits(&self, edge: EdgeId) -> u32 {
        self.edge_visits[edge]
    }

    /// Some edge that has not been traversed this walk, if any.
    pub fn uncovered_edge(&self) -> Option<EdgeId> {
        self.edge_visits.iter().position(|&count| count == 0)
    }

    /// All per-edge traversal counts.
    pub fn edge_visit_counts(&self) -> &[u32] {
        &self.edge_visits
    }

    /// All per-vertex visit counts.
    pub fn vertex_visit_counts(&self) -> &[u32] {
        &self.vertex_visits
    }
}

/// Outcome counters accumulated over a whole enumeration run.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counter {
    /// Walks materialized and handed to the validator.
    Explored,
    /// Walks cut short by a visit-cap violation (subtree skipped).
    Pruned,
    /// Structurally valid walks that left some edge untraversed.
    RejectedCoverage,
    /// Covering walks whose midpoint edge was traversed only once.
    RejectedMedian,
    /// Accepted solutions, reported to the collaborator.
    Accepted,
}

/// Run statistics, one slot per [`Counter`].
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }
}
