//! TOML graph input and layout output formats.
//!
//! An input graph lists its nodes by name and its edges by endpoint names:
//!
//! ```toml
//! nodes = ["a", "b", "c"]
//!
//! [[edges]]
//! source = "a"
//! target = "b"
//! ```
//!
//! The output records where every node ended up, in input order.

use serde::{Deserialize, Serialize};

use smog::{geometry::Vector, graph::SimpleEdge, identifier::NodeId};

use crate::error::CliError;

/// A graph read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    nodes: Vec<NodeId>,

    #[serde(default)]
    edges: Vec<SimpleEdge<NodeId>>,
}

impl GraphFile {
    /// Parses a graph from TOML text.
    pub fn parse(source: &str) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|err| CliError::Graph(err.to_string()))
    }

    /// Returns the nodes in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the edges in declaration order.
    pub fn edges(&self) -> &[SimpleEdge<NodeId>] {
        &self.edges
    }

    /// Splits the graph into its node and edge lists.
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<SimpleEdge<NodeId>>) {
        (self.nodes, self.edges)
    }
}

/// Final position of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    id: NodeId,
    x: f64,
    y: f64,
}

impl NodePosition {
    pub fn new(id: NodeId, position: Vector) -> Self {
        Self {
            id,
            x: position.x(),
            y: position.y(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Result of a layout run, written to the output file.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    iterations: usize,
    converged: bool,
    kinetic_energy: f64,
    nodes: Vec<NodePosition>,
}

impl LayoutOutput {
    pub fn new(
        iterations: usize,
        converged: bool,
        kinetic_energy: f64,
        nodes: Vec<NodePosition>,
    ) -> Self {
        Self {
            iterations,
            converged,
            kinetic_energy,
            nodes,
        }
    }

    /// Number of steps taken.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the engine reported it needed no further steps.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Kinetic energy after the last step.
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    pub fn nodes(&self) -> &[NodePosition] {
        &self.nodes
    }

    /// Renders the output as TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string(self).map_err(|err| CliError::Output(err.to_string()))
    }
}
