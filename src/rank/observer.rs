// src/rank/observer.rs
//! Per-iteration progress hooks.
//!
//! Observers are told about each completed iteration after its distance is
//! measured. They see values only and cannot influence the run.

use std::time::Duration;

/// One completed update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationEvent {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Distance between this iteration's ranks and the previous ones.
    pub distance: f64,
    /// Wall time since the run started.
    pub elapsed: Duration,
}

pub trait RankObserver {
    fn on_iteration(&mut self, event: &IterationEvent);
}

impl<F> RankObserver for F
where
    F: FnMut(&IterationEvent),
{
    fn on_iteration(&mut self, event: &IterationEvent) {
        self(event);
    }
}
