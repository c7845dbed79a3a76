use serde::{Serialize, Deserialize};
use crate::{propagation::signal::Signal, topology::{edge::Edge, node::Node}};

/// Everything a renderer needs to draw one frame of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub signals: Vec<Signal>,
}
