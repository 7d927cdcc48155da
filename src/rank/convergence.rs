// src/rank/convergence.rs
use serde::Serialize;

/// Distances needed before the plateau test may fire.
pub const PLATEAU_MIN_SAMPLES: usize = 3;

/// Per-iteration distances between successive rank vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConvergenceTrace {
    distances: Vec<f64>,
}

impl ConvergenceTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, distance: f64) {
        self.distances.push(distance);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.distances.last().copied()
    }

    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Plateau test: the last two distances differ by less than `epsilon`.
    ///
    /// This looks at the change in error, not the error itself, so it can fire
    /// while the distance is still large if it shrinks at a steady rate.
    #[must_use]
    pub fn has_plateaued(&self, epsilon: f64) -> bool {
        match self.distances.as_slice() {
            [.., prev, last] if self.distances.len() >= PLATEAU_MIN_SAMPLES => {
                (last - prev).abs() < epsilon
            }
            _ => false,
        }
    }
}
