// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary entry point: run the icosahedron routing search to exhaustion.
//!
//! Prints every accepted walk to stdout as a comma-separated vertex list,
//! one line per solution, and logs periodic progress to stderr. The run is
//! long; progress lines include the enumeration frontier so it is visible
//! that the search is advancing.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use icosa_route::engine::PrintReporter;
use icosa_route::state::Counter;
use icosa_route::{Problem, Search};

#[derive(Parser)]
#[command(name = "icosa")]
#[command(about = "Exhaustive search for single-strip LED routings of the icosahedron")]
struct Cmd {
    /// Log a progress line every N explored walks (0 disables)
    #[arg(long, default_value_t = 100_000_000)]
    progress_every: u64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let search =
        Search::new(Problem::icosahedron()).with_progress_interval(cmd.progress_every);
    tracing::info!("starting exhaustive icosahedron walk search");

    let statistics = search.run(&mut PrintReporter);

    tracing::info!(
        explored = statistics.get(Counter::Explored),
        pruned = statistics.get(Counter::Pruned),
        rejected_coverage = statistics.get(Counter::RejectedCoverage),
        rejected_median = statistics.get(Counter::RejectedMedian),
        accepted = statistics.get(Counter::Accepted),
        "search exhausted"
    );
    Ok(())
}
