// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph model: the topology abstraction, the icosahedron tables, and the
//! problem constants.

pub mod constants;
pub mod icosahedron;
pub mod topology;

pub use icosahedron::Icosahedron;
pub use topology::{EdgeId, Topology, Vertex};
