// src/rank/config.rs
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Parameters of a ranking run. Doubles as the `[rank]` table of `linkrank.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor: weight of rank flowing through links versus the uniform term.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Plateau threshold on the change between consecutive distances.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Update nodes within an iteration on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            beta: default_beta(),
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            parallel: false,
        }
    }
}

fn default_beta() -> f64 { 0.85 }
fn default_epsilon() -> f64 { 1e-6 }
fn default_max_iterations() -> usize { 1000 }

impl RankConfig {
    #[must_use]
    pub fn new(beta: f64, epsilon: f64) -> Self {
        Self {
            beta,
            epsilon,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects numerically meaningless settings.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() || !(0.0..=1.0).contains(&self.beta) {
            return Err(RankError::InvalidParameter(format!(
                "beta must be in [0,1], got {}",
                self.beta
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(RankError::InvalidParameter(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidParameter(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
