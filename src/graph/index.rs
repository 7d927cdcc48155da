// src/graph/index.rs
//! Outbound/inbound adjacency built from an edge stream.

use std::collections::HashMap;

use super::NodeId;
use crate::edges::Edge;
use crate::error::Result;

/// Bidirectional adjacency over interned node ids.
///
/// Every node seen in either position gets a dense id in first-seen order.
/// The rank universe is the set of nodes that own an outbound entry, kept in
/// the order they were first seen as a source. Target-only nodes live in the
/// inbound index but are never ranked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphIndex {
    nodes: Vec<NodeId>,
    ids: HashMap<NodeId, usize>,
    outbound: Vec<Vec<usize>>,
    inbound: Vec<Vec<usize>>,
    /// Node id -> position in `universe`, `None` for target-only nodes.
    slots: Vec<Option<usize>>,
    universe: Vec<usize>,
    edge_count: usize,
}

impl GraphIndex {
    /// Builds the index in a single pass. Duplicate edges are kept.
    #[must_use]
    pub fn build<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut index = Self::default();
        for edge in edges {
            index.push_edge(&edge.from, &edge.to);
        }
        index
    }

    /// Builds the index from a fallible edge stream, stopping at the first error.
    ///
    /// # Errors
    /// Propagates the first parse error; no partial index is returned.
    pub fn try_build<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Edge>>,
    {
        let mut index = Self::default();
        for edge in edges {
            let edge = edge?;
            index.push_edge(&edge.from, &edge.to);
        }
        Ok(index)
    }

    /// Builds an index from explicit adjacency lists.
    ///
    /// Unlike [`GraphIndex::build`] the two sides are not derived from each
    /// other, so the result may be inconsistent: an inbound contributor need
    /// not own an outbound entry, and an outbound key may have no targets.
    /// The engine reports such contributors as [`crate::RankError::DegreeZero`].
    #[must_use]
    pub fn from_adjacency<O, I>(outbound: O, inbound: I) -> Self
    where
        O: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let mut index = Self::default();
        for (from, targets) in outbound {
            let from = index.intern(&from);
            index.enroll(from);
            for to in targets {
                let to = index.intern(&to);
                index.outbound[from].push(to);
                index.edge_count += 1;
            }
        }
        for (to, sources) in inbound {
            let to = index.intern(&to);
            for from in sources {
                let from = index.intern(&from);
                index.inbound[to].push(from);
            }
        }
        index
    }

    fn push_edge(&mut self, from: &str, to: &str) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.enroll(from);
        self.outbound[from].push(to);
        self.inbound[to].push(from);
        self.edge_count += 1;
    }

    fn intern(&mut self, node: &str) -> usize {
        if let Some(&id) = self.ids.get(node) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(node.to_string());
        self.ids.insert(node.to_string(), id);
        self.outbound.push(Vec::new());
        self.inbound.push(Vec::new());
        self.slots.push(None);
        id
    }

    fn enroll(&mut self, id: usize) {
        if self.slots[id].is_none() {
            self.slots[id] = Some(self.universe.len());
            self.universe.push(id);
        }
    }

    /// Number of ranked nodes (distinct sources).
    #[must_use]
    pub fn n_pages(&self) -> usize {
        self.universe.len()
    }

    /// Number of distinct nodes in either position.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// Ranked nodes in source-discovery order.
    pub fn universe(&self) -> impl Iterator<Item = &str> + '_ {
        self.universe.iter().map(|&id| self.nodes[id].as_str())
    }

    /// True if `node` owns an outbound entry.
    #[must_use]
    pub fn is_source(&self, node: &str) -> bool {
        self.id(node).is_some_and(|id| self.slots[id].is_some())
    }

    /// Count of outbound edges recorded for `node`; zero when it has none.
    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.id(node).map_or(0, |id| self.outbound[id].len())
    }

    /// Targets of `node` in insertion order.
    #[must_use]
    pub fn outbound(&self, node: &str) -> Vec<&str> {
        self.id(node)
            .map(|id| self.names(&self.outbound[id]))
            .unwrap_or_default()
    }

    /// Sources pointing at `node` in insertion order.
    #[must_use]
    pub fn inbound(&self, node: &str) -> Vec<&str> {
        self.id(node)
            .map(|id| self.names(&self.inbound[id]))
            .unwrap_or_default()
    }

    fn id(&self, node: &str) -> Option<usize> {
        self.ids.get(node).copied()
    }

    fn names(&self, ids: &[usize]) -> Vec<&str> {
        ids.iter().map(|&id| self.nodes[id].as_str()).collect()
    }

    pub(crate) fn universe_ids(&self) -> &[usize] {
        &self.universe
    }

    pub(crate) fn inbound_ids(&self, id: usize) -> &[usize] {
        &self.inbound[id]
    }

    pub(crate) fn out_degree_of(&self, id: usize) -> usize {
        self.outbound[id].len()
    }

    pub(crate) fn slot_of(&self, id: usize) -> Option<usize> {
        self.slots[id]
    }

    pub(crate) fn name_of(&self, id: usize) -> &str {
        &self.nodes[id]
    }
}
