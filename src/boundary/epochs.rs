//! Epoch-stepped boundary snapshots for the perceptron scene.

use serde::{Deserialize, Serialize};

use crate::boundary::linear::LinearBoundary;

/// A fixed ordered sequence of boundary snapshots, one per training epoch,
/// monotonically improving separation. Indexing past the end clamps to the
/// last (converged) snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochTrack {
    snapshots: Vec<LinearBoundary>,
}

impl EpochTrack {
    /// `snapshots` must be non-empty.
    pub fn new(snapshots: Vec<LinearBoundary>) -> Self {
        assert!(!snapshots.is_empty(), "epoch track needs at least one snapshot");
        EpochTrack { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Boundary after `epoch` training epochs, clamped to the converged
    /// snapshot for out-of-range indices.
    pub fn at(&self, epoch: usize) -> LinearBoundary {
        self.snapshots[epoch.min(self.snapshots.len() - 1)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinearBoundary> {
        self.snapshots.iter()
    }
}
