// src/graph/mod.rs
pub mod index;

pub use index::GraphIndex;

/// Opaque node identifier, taken verbatim from the edge source.
pub type NodeId = String;
