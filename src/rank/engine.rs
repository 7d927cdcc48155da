// src/rank/engine.rs
//! Damped power iteration.
//!
//! Each step computes, for every node `p` in the rank universe,
//!
//! ```text
//! rank'(p) = (1 - beta) / n + sum over i in inbound(p) of beta * rank(i) / out_degree(i)
//! ```
//!
//! reading only the previous snapshot. Ranks are not renormalized between
//! steps. The run stops once the distance between successive snapshots has
//! plateaued (see [`ConvergenceTrace::has_plateaued`]) or fails when the
//! iteration ceiling is reached first.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use super::vector::RankKeys;
use super::{ConvergenceTrace, IterationEvent, RankConfig, RankObserver, RankVector};
use crate::error::{RankError, Result};
use crate::graph::GraphIndex;

/// Outcome of a ranking run.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRun {
    pub ranks: RankVector,
    pub trace: ConvergenceTrace,
    pub converged: bool,
}

impl RankRun {
    /// Number of update steps performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }
}

pub struct RankEngine<'g> {
    graph: &'g GraphIndex,
    config: RankConfig,
    nodes: Arc<RankKeys>,
}

impl<'g> RankEngine<'g> {
    /// # Errors
    /// Returns [`RankError::InvalidParameter`] for a bad config and
    /// [`RankError::EmptyGraph`] when no node has an outbound edge.
    pub fn new(graph: &'g GraphIndex, config: RankConfig) -> Result<Self> {
        config.validate()?;
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        let nodes: Arc<RankKeys> = Arc::new(graph.universe().map(str::to_string).collect());
        Ok(Self {
            graph,
            config,
            nodes,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Runs to convergence without progress reporting.
    ///
    /// # Errors
    /// See [`RankEngine::run_with`].
    pub fn run(&self) -> Result<RankRun> {
        self.run_with(&mut |_: &IterationEvent| {})
    }

    /// Runs to convergence, reporting every iteration to `observer`.
    ///
    /// # Errors
    /// Returns [`RankError::DegreeZero`] if an inbound contributor has no
    /// outbound edges, and [`RankError::NonConvergence`] (carrying the last
    /// snapshot) if `max_iterations` steps pass without a plateau.
    pub fn run_with(&self, observer: &mut dyn RankObserver) -> Result<RankRun> {
        let started = Instant::now();
        let mut ranks = RankVector::uniform(Arc::clone(&self.nodes));
        let mut trace = ConvergenceTrace::new();

        for iteration in 0..self.config.max_iterations {
            let updated = self.step(&ranks)?;
            let distance = ranks.distance(&updated);
            ranks = updated;
            trace.push(distance);

            log::debug!("Iteration: {iteration} loss: {distance}");
            observer.on_iteration(&IterationEvent {
                iteration,
                distance,
                elapsed: started.elapsed(),
            });

            if trace.has_plateaued(self.config.epsilon) {
                log::info!(
                    "converged after {} iterations in {:?}",
                    trace.len(),
                    started.elapsed()
                );
                return Ok(RankRun {
                    ranks,
                    trace,
                    converged: true,
                });
            }
        }

        let iterations = trace.len();
        let last_distance = trace.last().unwrap_or(f64::NAN);
        log::warn!("no plateau after {iterations} iterations (last distance {last_distance:e})");
        Err(RankError::NonConvergence {
            iterations,
            last_distance,
            partial: Box::new(RankRun {
                ranks,
                trace,
                converged: false,
            }),
        })
    }

    /// Produces the next snapshot from `prev`, which is left untouched.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidParameter`] if `prev` was not taken over
    /// this engine's rank universe, and [`RankError::DegreeZero`] on a
    /// contributor without outbound edges.
    pub fn step(&self, prev: &RankVector) -> Result<RankVector> {
        if !prev.is_keyed_by(&self.nodes) {
            return Err(RankError::InvalidParameter(format!(
                "snapshot covers {} nodes that do not match this graph's {} ranked nodes",
                prev.len(),
                self.nodes.len()
            )));
        }
        let universe = self.graph.universe_ids();
        let scores: Vec<f64> = if self.config.parallel {
            universe
                .par_iter()
                .map(|&p| self.updated_rank(p, prev.scores()))
                .collect::<Result<_>>()?
        } else {
            universe
                .iter()
                .map(|&p| self.updated_rank(p, prev.scores()))
                .collect::<Result<_>>()?
        };
        Ok(prev.successor(scores))
    }

    #[allow(clippy::cast_precision_loss)]
    fn updated_rank(&self, page: usize, prev: &[f64]) -> Result<f64> {
        let beta = self.config.beta;
        let mut rank = (1.0 - beta) / self.nodes.len() as f64;

        for &contributor in self.graph.inbound_ids(page) {
            let degree = self.graph.out_degree_of(contributor);
            let slot = self
                .graph
                .slot_of(contributor)
                .filter(|_| degree > 0)
                .ok_or_else(|| RankError::DegreeZero {
                    node: self.graph.name_of(page).to_string(),
                    contributor: self.graph.name_of(contributor).to_string(),
                })?;
            rank += beta * prev[slot] / degree as f64;
        }

        Ok(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::Edge;

    fn graph(pairs: &[(&str, &str)]) -> GraphIndex {
        GraphIndex::build(pairs.iter().map(|(a, b)| Edge::new(*a, *b)))
    }

    #[test]
    fn initial_vector_is_uniform() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
        let engine = RankEngine::new(&g, RankConfig::default()).unwrap();
        let init = RankVector::uniform(Arc::clone(&engine.nodes));
        assert!(init.scores().iter().all(|s| (*s - 0.25).abs() < 1e-15));
    }

    #[test]
    fn step_leaves_previous_snapshot_intact() {
        let g = graph(&[("a", "b"), ("b", "a"), ("a", "c")]);
        let engine = RankEngine::new(&g, RankConfig::new(0.8, 1e-6)).unwrap();
        let init = RankVector::uniform(Arc::clone(&engine.nodes));
        let before = init.clone();
        let next = engine.step(&init).unwrap();
        assert_eq!(init, before);
        assert_ne!(next, init);
    }

    #[test]
    fn node_without_inbound_gets_only_teleport_mass() {
        // "s" points at "a" but nothing points at "s".
        let g = graph(&[("s", "a"), ("a", "s2"), ("s2", "a")]);
        let engine = RankEngine::new(&g, RankConfig::new(0.8, 1e-6)).unwrap();
        let next = engine
            .step(&RankVector::uniform(Arc::clone(&engine.nodes)))
            .unwrap();
        let expected = (1.0 - 0.8) / 3.0;
        assert!((next.get("s").unwrap() - expected).abs() < 1e-15);
    }

    #[test]
    fn step_rejects_snapshot_from_another_graph() {
        let single = graph(&[("x", "x")]);
        let foreign = RankEngine::new(&single, RankConfig::default())
            .unwrap()
            .step(&RankVector::uniform(Arc::new(
                std::iter::once("x".to_string()).collect(),
            )))
            .unwrap();

        let cycle = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let engine = RankEngine::new(&cycle, RankConfig::default()).unwrap();
        let err = engine.step(&foreign).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)), "{err}");
    }

    #[test]
    fn step_rejects_same_size_snapshot_with_other_keys() {
        let other = graph(&[("p", "q"), ("q", "r"), ("r", "p")]);
        let foreign = RankEngine::new(&other, RankConfig::default())
            .unwrap()
            .run()
            .unwrap()
            .ranks;

        let cycle = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let engine = RankEngine::new(&cycle, RankConfig::default()).unwrap();
        assert!(engine.step(&foreign).is_err());
    }

    #[test]
    fn step_accepts_snapshot_from_an_equal_graph() {
        let pairs = [("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")];
        let first = graph(&pairs);
        let second = graph(&pairs);
        let ranks = RankEngine::new(&first, RankConfig::default())
            .unwrap()
            .run()
            .unwrap()
            .ranks;
        let engine = RankEngine::new(&second, RankConfig::default()).unwrap();
        assert!(engine.step(&ranks).is_ok());
    }

    #[test]
    fn parallel_and_serial_steps_agree() {
        let g = graph(&[
            ("1", "2"),
            ("1", "3"),
            ("2", "3"),
            ("3", "1"),
            ("4", "3"),
            ("4", "1"),
            ("4", "4"),
        ]);
        let serial = RankEngine::new(&g, RankConfig::default()).unwrap().run().unwrap();
        let parallel = RankEngine::new(&g, RankConfig::default().with_parallel(true))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(serial, parallel);
    }
}
