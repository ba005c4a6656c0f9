//! Caller-facing graph capabilities
//!
//! A layout never inspects the caller's nodes and edges beyond what these
//! traits expose: nodes are compared by identity, edges name their two
//! endpoint nodes. Both are carried through the simulation as opaque payloads.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Opaque node identity used as the key of a layout's attachment map.
///
/// Implemented for every `Eq + Hash` type.
pub trait Node: Eq + Hash {}

impl<T: Eq + Hash> Node for T {}

/// An edge between two nodes of a graph.
pub trait Edge {
    /// The node type this edge connects.
    type Node: Node;

    /// The node the edge starts from.
    fn source(&self) -> &Self::Node;

    /// The node the edge points to.
    fn target(&self) -> &Self::Node;
}

/// A directed edge from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleEdge<N> {
    source: N,
    target: N,
}

impl<N> SimpleEdge<N> {
    /// Creates a new edge from `source` to `target`.
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N: Node> Edge for SimpleEdge<N> {
    type Node = N;

    fn source(&self) -> &N {
        &self.source
    }

    fn target(&self) -> &N {
        &self.target
    }
}

impl<N: Node> Edge for (N, N) {
    type Node = N;

    fn source(&self) -> &N {
        &self.0
    }

    fn target(&self) -> &N {
        &self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_edge_endpoints() {
        let edge = SimpleEdge::new("a", "b");
        assert_eq!(*edge.source(), "a");
        assert_eq!(*edge.target(), "b");
    }

    #[test]
    fn test_tuple_edge_endpoints() {
        let edge = (1u32, 2u32);
        assert_eq!(*edge.source(), 1);
        assert_eq!(*edge.target(), 2);
    }
}
