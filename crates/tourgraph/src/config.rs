//! Configuration for the TSP solvers.

use crate::graph::VertexId;
use serde::{Deserialize, Serialize};

/// Configuration for tour construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Vertex the approximate tour starts and ends at
    pub anchor: VertexId,

    /// Seed for the neighbor shuffle (None = seed from entropy)
    pub seed: Option<u64>,

    /// Maximum number of 2-opt sweeps over the approximate tour
    /// (0 = keep the plain spanning-tree tour)
    pub improvement_passes: usize,

    /// Refuse exhaustive search above this many vertices (None = no limit)
    pub max_exact_vertices: Option<usize>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            anchor: 0,
            seed: None,
            improvement_passes: 0,
            max_exact_vertices: None,
        }
    }
}

impl TourConfig {
    /// Create config whose random choices are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Create config that polishes the approximate tour with 2-opt
    pub fn improved() -> Self {
        Self {
            improvement_passes: 16,
            ..Default::default()
        }
    }

    /// Set the anchor vertex
    pub fn with_anchor(mut self, anchor: VertexId) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of 2-opt sweeps
    pub fn with_improvement_passes(mut self, passes: usize) -> Self {
        self.improvement_passes = passes;
        self
    }

    /// Set the exhaustive search vertex limit
    pub fn with_max_exact_vertices(mut self, limit: usize) -> Self {
        self.max_exact_vertices = Some(limit);
        self
    }
}
