// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for single-strip LED routings of the icosahedron.
//!
//! The physical problem: route one LED strip along every edge of a regular
//! icosahedron (12 vertices of degree 5, 30 edges) as a single continuous
//! walk of exactly 35 edge traversals starting at vertex 0, such that the
//! edge crossed at the exact midpoint of the walk is traversed a second time
//! elsewhere. Cutting the strip at the midpoint then yields two equal-length
//! halves without abandoning the midpoint edge.
//!
//! # Architecture
//!
//! The search is a constrained enumeration over a nominally 5^35-value
//! decision space, organized as five small components:
//!
//! - [`geometry`]: the static graph tables and the [`Topology`] abstraction
//!   the engine runs over;
//! - [`counter`]: a 35-digit base-5 odometer encoding "which neighbor next"
//!   decisions, with a suffix-maxing pruning primitive;
//! - [`walk`]: materialization of a counter value into the concrete
//!   36-vertex sequence;
//! - [`validate`]: the incremental constraint checker that prunes dead
//!   prefixes at the earliest violating position and applies the two global
//!   acceptance checks (full edge coverage, midpoint-edge revisit);
//! - [`engine`]: the driver loop and the reporting collaborator.
//!
//! All mutable state lives in a [`SearchContext`] owned by the driver for
//! the duration of a run; the graph tables are immutable constants. The
//! search is single-threaded and deterministic: re-running produces the
//! identical ordered sequence of accepted walks.

pub mod context;
pub mod counter;
pub mod engine;
pub mod geometry;
pub mod state;
pub mod validate;
pub mod walk;

// Re-export commonly used types
pub use context::{Problem, SearchContext};
pub use counter::ChoiceCounter;
pub use engine::{Reporter, Search};
pub use geometry::{Icosahedron, Topology};
pub use validate::Verdict;
