// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration driver.
//!
//! The driver runs the increment -> materialize -> validate cycle until the
//! choice counter overflows. There is no other exit: no iteration cap, no
//! time budget, no stop-at-first-solution. The nominal space is
//! radix^walk_edges counter values; the validator's pruning makes exhausting
//! it tractable by maxing out the counter suffix under every provably dead
//! prefix.
//!
//! The initial all-zeros counter value is never examined: the loop
//! increments first, so enumeration starts at the second counter value.
//! (The all-zeros walk bounces on the start vertex's slot-0 edge and would
//! be pruned immediately anyway.)

pub mod reporter;

pub use reporter::{CollectingReporter, PrintReporter, Reporter};

use crate::context::{Problem, SearchContext};
use crate::geometry::Topology;
use crate::state::{Counter, Statistics};
use crate::validate::{check_walk, Verdict};

/// Exhaustive search over all candidate walks of one [`Problem`].
#[derive(Debug, Clone)]
pub struct Search<T: Topology> {
    problem: Problem<T>,
    progress_interval: Option<u64>,
}

impl<T: Topology> Search<T> {
    /// Create a search with progress reporting disabled.
    pub fn new(problem: Problem<T>) -> Self {
        Self {
            problem,
            progress_interval: None,
        }
    }

    /// Report progress to the reporter every `every` explored walks.
    /// Zero disables progress reporting.
    pub fn with_progress_interval(mut self, every: u64) -> Self {
        self.progress_interval = (every > 0).then_some(every);
        self
    }

    /// The problem this search enumerates.
    pub fn problem(&self) -> &Problem<T> {
        &self.problem
    }

    /// Run the enumeration to exhaustion, reporting every accepted walk.
    ///
    /// Returns the final statistics. Re-running produces the identical
    /// ordered sequence of accepted walks: the enumeration is deterministic.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Statistics {
        let mut ctx = SearchContext::new(&self.problem);
        self.run_with_context(&mut ctx, reporter);
        ctx.statistics
    }

    /// Run the enumeration on caller-owned state.
    ///
    /// The context must have been created for this search's problem (or be
    /// a fresh one); the driver is the single writer for the duration of
    /// the call.
    pub fn run_with_context(&self, ctx: &mut SearchContext, reporter: &mut dyn Reporter) {
        while ctx.counter.increment() {
            ctx.walk
                .materialize(&self.problem.topology, self.problem.start, &ctx.counter);
            ctx.statistics.increment(Counter::Explored);

            match check_walk(&self.problem, &ctx.walk, &mut ctx.tally, &mut ctx.counter) {
                Verdict::Pruned { .. } => ctx.statistics.increment(Counter::Pruned),
                Verdict::RejectedCoverage => ctx.statistics.increment(Counter::RejectedCoverage),
                Verdict::RejectedMedian => ctx.statistics.increment(Counter::RejectedMedian),
                Verdict::Accepted => {
                    ctx.statistics.increment(Counter::Accepted);
                    reporter.solution(ctx.walk.vertices());
                }
            }

            if let Some(every) = self.progress_interval {
                if ctx.statistics.get(Counter::Explored) % every == 0 {
                    reporter.progress(&ctx.statistics, ctx.counter.frontier());
                }
            }
        }
    }
}
