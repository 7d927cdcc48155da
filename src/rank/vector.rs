// src/rank/vector.rs
//! Rank snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::NodeId;

/// The rank universe of one graph: node ids in slot order plus the reverse map.
#[derive(Debug, Default, PartialEq)]
pub struct RankKeys {
    nodes: Vec<NodeId>,
    slots: HashMap<NodeId, usize>,
}

impl RankKeys {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn slot(&self, node: &str) -> Option<usize> {
        self.slots.get(node).copied()
    }
}

impl FromIterator<NodeId> for RankKeys {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut keys = Self::default();
        for node in iter {
            if !keys.slots.contains_key(&node) {
                keys.slots.insert(node.clone(), keys.nodes.len());
                keys.nodes.push(node);
            }
        }
        keys
    }
}

/// Scores for the rank universe at one iteration.
///
/// Snapshots taken from the same graph share one key set, so a snapshot is
/// never mutated after it is produced; each iteration builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    keys: Arc<RankKeys>,
    scores: Vec<f64>,
}

impl RankVector {
    pub(crate) fn new(keys: Arc<RankKeys>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(keys.len(), scores.len());
        Self { keys, scores }
    }

    /// A vector where every node holds `1 / n`.
    pub(crate) fn uniform(keys: Arc<RankKeys>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let share = 1.0 / keys.len() as f64;
        let scores = vec![share; keys.len()];
        Self { keys, scores }
    }

    /// Same keys, new scores.
    pub(crate) fn successor(&self, scores: Vec<f64>) -> Self {
        Self::new(Arc::clone(&self.keys), scores)
    }

    /// True if this snapshot is laid out over exactly `keys`.
    pub(crate) fn is_keyed_by(&self, keys: &Arc<RankKeys>) -> bool {
        Arc::ptr_eq(&self.keys, keys) || *self.keys == **keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of `node`, if it is in the rank universe.
    #[must_use]
    pub fn get(&self, node: &str) -> Option<f64> {
        self.keys.slot(node).map(|slot| self.scores[slot])
    }

    /// `(node, score)` pairs in source-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.keys
            .nodes
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Total mass. Not renormalized, so generally not 1.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Euclidean distance over the keys both vectors share.
    ///
    /// Snapshots from one run share their keys and are compared slot by
    /// slot; anything else is joined by node id.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let squared: f64 = if self.is_keyed_by(&other.keys) {
            self.scores
                .iter()
                .zip(&other.scores)
                .map(|(a, b)| (a - b).powi(2))
                .sum()
        } else {
            self.iter()
                .filter_map(|(node, a)| other.get(node).map(|b| (a - b).powi(2)))
                .sum()
        };
        squared.sqrt()
    }
}
