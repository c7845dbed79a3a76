use std::fmt;
use serde::{Serialize, Deserialize};

/// Identity of a node: its layer plus its position within that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub layer: usize,
    pub index: usize,
}

impl NodeId {
    pub fn new(layer: usize, index: usize) -> NodeId {
        NodeId { layer, index }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neuron-{}-{}", self.layer, self.index)
    }
}

/// One neuron of the rendered network.
///
/// `x`/`y` are fixed at generation time; `value` is rewritten by every
/// propagation run and holds only the latest activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Node {
        Node { id, x, y, value: 0.0 }
    }

    pub fn layer(&self) -> usize {
        self.id.layer
    }
}
