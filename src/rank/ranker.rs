// src/rank/ranker.rs
use super::RankVector;
use crate::graph::NodeId;

/// Orders a rank vector by score, highest first.
pub struct Ranker;

impl Ranker {
    /// Sorts by descending score. The sort is stable, so equal scores keep
    /// source-discovery order.
    #[must_use]
    pub fn rank(ranks: &RankVector) -> Vec<(NodeId, f64)> {
        let mut ordered: Vec<(NodeId, f64)> = ranks
            .iter()
            .map(|(node, score)| (node.to_string(), score))
            .collect();
        ordered.sort_by(|a, b| b.1.total_cmp(&a.1));
        ordered
    }

    /// The `k` highest-ranked nodes.
    #[must_use]
    pub fn top(ranks: &RankVector, k: usize) -> Vec<(NodeId, f64)> {
        let mut ordered = Self::rank(ranks);
        ordered.truncate(k);
        ordered
    }
}
