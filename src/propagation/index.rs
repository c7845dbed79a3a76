use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::NetworkError;
use crate::topology::{edge::{Edge, EdgeId}, node::{Node, NodeId}};

/// Lookup tables over a node/edge list, built once per graph.
///
/// All values are positions into the slices the index was built from, so an
/// index is only valid alongside those exact slices.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    nodes: HashMap<NodeId, usize>,
    edges: HashMap<(NodeId, NodeId), usize>,
    layers: Vec<Vec<usize>>,
    incoming: HashMap<NodeId, Vec<usize>>,
    outgoing: HashMap<NodeId, Vec<usize>>,
}

impl GraphIndex {
    /// Validates the graph with `check_graph` and builds the lookup tables.
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Result<GraphIndex, NetworkError> {
        check_graph(nodes, edges)?;
        let mut index = GraphIndex::default();

        for (pos, node) in nodes.iter().enumerate() {
            index.nodes.insert(node.id, pos);
            let layer = node.layer();
            if index.layers.len() <= layer {
                index.layers.resize_with(layer + 1, Vec::new);
            }
            index.layers[layer].push(pos);
        }
        for layer in &mut index.layers {
            layer.sort_by_key(|&pos| nodes[pos].id.index);
        }

        for (pos, edge) in edges.iter().enumerate() {
            index.edges.insert((edge.source, edge.target), pos);
            index.outgoing.entry(edge.source).or_default().push(pos);
            index.incoming.entry(edge.target).or_default().push(pos);
        }
        Ok(index)
    }

    pub fn node_position(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(&id).copied()
    }

    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<usize> {
        self.edges.get(&(source, target)).copied()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Node positions of one layer, in index order. Empty when out of range.
    pub fn layer(&self, layer: usize) -> &[usize] {
        self.layers.get(layer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of the edges that end at `id`.
    pub fn incoming(&self, id: NodeId) -> &[usize] {
        self.incoming.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of the edges that start at `id`.
    pub fn outgoing(&self, id: NodeId) -> &[usize] {
        self.outgoing.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Checks that a node/edge list is a layered graph the engine can walk.
///
/// Layers must be numbered 0..L with no gaps, node indices 0..n within each
/// layer, every edge id equal to its position, and every edge must join two
/// existing nodes of adjacent layers, at most once, with a finite weight.
pub fn check_graph(nodes: &[Node], edges: &[Edge]) -> Result<(), NetworkError> {
    let invalid = |msg: String| -> Result<(), NetworkError> {
        Err(NetworkError::InvalidTopologyConfig(msg))
    };
    if nodes.is_empty() {
        return invalid("graph has no nodes".to_owned());
    }

    let mut layers: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for node in nodes {
        if !layers.entry(node.id.layer).or_default().insert(node.id.index) {
            return invalid(format!("duplicate node {}", node.id));
        }
    }
    for (expected, (&layer, indices)) in layers.iter().enumerate() {
        if layer != expected {
            return invalid(format!("layer {expected} is missing"));
        }
        if indices.iter().enumerate().any(|(i, &index)| i != index) {
            return invalid(format!("layer {layer} has a gap in its node indices"));
        }
    }

    let exists = |id: NodeId| layers.get(&id.layer).is_some_and(|set| set.contains(&id.index));
    let mut joined = HashSet::with_capacity(edges.len());
    for (pos, edge) in edges.iter().enumerate() {
        if edge.id != EdgeId(pos) {
            return invalid(format!("edge at position {pos} has id {}", edge.id));
        }
        for end in [edge.source, edge.target] {
            if !exists(end) {
                return invalid(format!("{} references unknown node {end}", edge.id));
            }
        }
        if edge.target.layer != edge.source.layer + 1 {
            return invalid(format!(
                "{} joins {} to {}, which are not adjacent layers",
                edge.id, edge.source, edge.target
            ));
        }
        if !joined.insert((edge.source, edge.target)) {
            return invalid(format!("{} duplicates an earlier edge", edge.id));
        }
        if !edge.weight.is_finite() {
            return invalid(format!("{} has a non-finite weight", edge.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{generate, LayoutConfig};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn lookups_agree_with_the_lists() {
        let (nodes, edges) =
            generate(&LayoutConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let index = GraphIndex::build(&nodes, &edges).unwrap();

        assert_eq!(index.layer_count(), 4);
        assert_eq!(index.layer(1).len(), 6);
        assert!(index.layer(4).is_empty());

        for (pos, node) in nodes.iter().enumerate() {
            assert_eq!(index.node_position(node.id), Some(pos));
        }
        for (pos, edge) in edges.iter().enumerate() {
            assert_eq!(index.edge_between(edge.source, edge.target), Some(pos));
        }
        assert_eq!(index.edge_between(NodeId::new(0, 0), NodeId::new(2, 0)), None);
    }

    #[test]
    fn fan_in_and_fan_out() {
        let (nodes, edges) =
            generate(&LayoutConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let index = GraphIndex::build(&nodes, &edges).unwrap();
        assert_eq!(index.outgoing(NodeId::new(0, 2)).len(), 6);
        assert_eq!(index.incoming(NodeId::new(0, 2)).len(), 0);
        assert_eq!(index.incoming(NodeId::new(3, 1)).len(), 6);
        assert_eq!(index.outgoing(NodeId::new(3, 1)).len(), 0);
    }

    #[test]
    fn layers_are_ordered_by_index_even_when_shuffled() {
        let (mut nodes, edges) =
            generate(&LayoutConfig::new(vec![3, 2], 800.0, 600.0, 100.0), &mut StdRng::seed_from_u64(1))
                .unwrap();
        nodes.reverse();
        let index = GraphIndex::build(&nodes, &edges).unwrap();
        let order: Vec<usize> = index.layer(0).iter().map(|&p| nodes[p].id.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    fn small_graph() -> (Vec<Node>, Vec<Edge>) {
        generate(&LayoutConfig::new(vec![2, 2, 1], 800.0, 600.0, 100.0), &mut StdRng::seed_from_u64(2))
            .unwrap()
    }

    fn assert_rejected(nodes: &[Node], edges: &[Edge], needle: &str) {
        match GraphIndex::build(nodes, edges) {
            Err(NetworkError::InvalidTopologyConfig(msg)) => {
                assert!(msg.contains(needle), "{msg:?} does not mention {needle:?}")
            }
            other => panic!("expected rejection mentioning {needle:?}, got {other:?}"),
        }
    }

    #[test]
    fn huge_layer_number_is_rejected_without_allocating() {
        let (mut nodes, edges) = small_graph();
        nodes[4].id = NodeId::new(1_000_000_000_000, 0);
        assert_rejected(&nodes, &edges, "layer 2 is missing");
    }

    #[test]
    fn malformed_graphs_are_rejected() {
        let (nodes, edges) = small_graph();
        assert_rejected(&[], &[], "no nodes");

        let mut dup = nodes.clone();
        dup[1].id = NodeId::new(0, 0);
        assert_rejected(&dup, &edges, "duplicate node");

        let mut gap = nodes.clone();
        gap[1].id = NodeId::new(0, 5);
        assert_rejected(&gap, &edges, "gap in its node indices");

        let mut renumbered = edges.clone();
        renumbered[2].id = EdgeId(7);
        assert_rejected(&nodes, &renumbered, "position 2");

        let mut dangling = edges.clone();
        dangling[0].target = NodeId::new(1, 9);
        assert_rejected(&nodes, &dangling, "unknown node");

        let mut skip = edges.clone();
        skip[0].target = NodeId::new(2, 0);
        assert_rejected(&nodes, &skip, "not adjacent");

        let mut repeated = edges.clone();
        repeated[1].target = repeated[0].target;
        assert_rejected(&nodes, &repeated, "duplicates");

        let mut nan = edges.clone();
        nan[3].weight = f64::NAN;
        assert_rejected(&nodes, &nan, "non-finite weight");
    }
}
