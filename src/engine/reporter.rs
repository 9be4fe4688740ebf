// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reporting collaborators.
//!
//! The engine has no formatting contract of its own: it hands each accepted
//! walk, in order, exactly once, to a [`Reporter`]. The same collaborator
//! optionally receives periodic progress snapshots when the driver is
//! configured with a progress interval.

use itertools::Itertools;
use tracing::info;

use crate::geometry::Vertex;
use crate::state::{Counter, Statistics};

/// Receiver for accepted walks and optional progress snapshots.
pub trait Reporter {
    /// Called once per accepted walk with the ordered vertex sequence.
    fn solution(&mut self, walk: &[Vertex]);

    /// Called every N explored walks when the driver has a progress
    /// interval configured. `frontier` is the lowest counter position
    /// holding an upper-half digit, a coarse measure of how far the
    /// enumeration has advanced.
    fn progress(&mut self, _statistics: &Statistics, _frontier: Option<usize>) {}
}

/// Prints solutions to stdout and logs progress via `tracing`.
#[derive(Debug, Default)]
pub struct PrintReporter;

impl Reporter for PrintReporter {
    fn solution(&mut self, walk: &[Vertex]) {
        println!("{}", walk.iter().join(", "));
    }

    fn progress(&mut self, statistics: &Statistics, frontier: Option<usize>) {
        info!(
            explored = statistics.get(Counter::Explored),
            pruned = statistics.get(Counter::Pruned),
            accepted = statistics.get(Counter::Accepted),
            frontier = ?frontier,
            "progress"
        );
    }
}

/// Accumulates accepted walks; test support.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// Accepted walks in the order they were reported.
    pub solutions: Vec<Vec<Vertex>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        CollectingReporter::default()
    }
}

impl Reporter for CollectingReporter {
    fn solution(&mut self, walk: &[Vertex]) {
        self.solutions.push(walk.to_vec());
    }
}
