// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Path materialization.
//!
//! A [`Walk`] is the concrete vertex sequence a choice counter denotes. It
//! is derived data: regenerated from the counter after every increment,
//! never stored independently. The buffer is allocated once and reused for
//! the whole search.

use crate::counter::ChoiceCounter;
use crate::geometry::{Topology, Vertex};

/// Reusable buffer holding one materialized walk.
#[derive(Debug, Clone)]
pub struct Walk {
    vertices: Vec<Vertex>,
}

impl Walk {
    /// Create a walk buffer for `walk_vertices` vertex visits.
    pub fn new(walk_vertices: usize) -> Self {
        assert!(walk_vertices >= 1);
        Self {
            vertices: vec![0; walk_vertices],
        }
    }

    /// Expand `counter` into the vertex sequence it denotes.
    ///
    /// `vertices[0]` is `start`; each subsequent vertex is the neighbor of
    /// its predecessor selected by the corresponding counter digit.
    pub fn materialize<T: Topology>(&mut self, topology: &T, start: Vertex, counter: &ChoiceCounter) {
        let choices = counter.digits();
        assert_eq!(choices.len() + 1, self.vertices.len());
        self.vertices[0] = start;
        for (i, &choice) in choices.iter().enumerate() {
            self.vertices[i + 1] = topology.neighbor(self.vertices[i], choice as usize);
        }
    }

    /// The visited vertices, in order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertex visits.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}
