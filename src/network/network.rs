use rand::Rng;
use crate::error::NetworkError;
use crate::network::snapshot::NetworkSnapshot;
use crate::propagation::{
    engine::propagate_indexed, index::GraphIndex, input::InputVector, rule::PropagationRule,
    signal::Signal,
};
use crate::topology::{edge::{Edge, EdgeId}, generator::generate, layout::LayoutConfig, node::{Node, NodeId}};

/// A generated graph together with its lookup index.
///
/// Cloning a `Network` gives an independent copy of the node values, which is
/// how callers run overlapping propagations.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: GraphIndex,
}

impl TryFrom<NetworkSnapshot> for Network {
    type Error = NetworkError;

    /// Rebuilds a network from a snapshot; the signals are dropped.
    fn try_from(snapshot: NetworkSnapshot) -> Result<Self, Self::Error> {
        Network::from_parts(snapshot.nodes, snapshot.edges)
    }
}

impl Network {
    /// Generates a fresh graph; see `topology::generate`.
    pub fn generate<R: Rng + ?Sized>(layout: &LayoutConfig, rng: &mut R) -> Result<Network, NetworkError> {
        let (nodes, edges) = generate(layout, rng)?;
        Network::from_parts(nodes, edges)
    }

    /// Wraps an existing node/edge list, rejecting anything that is not a
    /// contiguous, densely layered graph (see `propagation::index::check_graph`).
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Network, NetworkError> {
        let index = GraphIndex::build(&nodes, &edges)?;
        Ok(Network { nodes, edges, index })
    }

    /// Propagates with the default last-writer-wins rule.
    pub fn propagate(&mut self, input: &InputVector) -> Result<Vec<Signal>, NetworkError> {
        self.propagate_with_rule(input, PropagationRule::default())
    }

    pub fn propagate_with_rule(
        &mut self,
        input: &InputVector,
        rule: PropagationRule,
    ) -> Result<Vec<Signal>, NetworkError> {
        propagate_indexed(&mut self.nodes, &self.edges, &self.index, input, rule)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.node_position(id).map(|pos| &self.nodes[pos])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).filter(|e| e.id == id)
    }

    pub fn layer_count(&self) -> usize {
        self.index.layer_count()
    }

    /// Nodes of one layer in index order.
    pub fn layer(&self, layer: usize) -> impl Iterator<Item = &Node> + '_ {
        self.index.layer(layer).iter().map(move |&pos| &self.nodes[pos])
    }

    pub fn input_size(&self) -> usize {
        self.index.layer(0).len()
    }

    pub fn output_size(&self) -> usize {
        self.index.layer(self.layer_count().saturating_sub(1)).len()
    }

    /// Current values of the output layer.
    pub fn outputs(&self) -> Vec<f64> {
        self.layer(self.layer_count().saturating_sub(1)).map(|n| n.value).collect()
    }

    /// Edges arriving at `id`, for the inspection panel.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.index.incoming(id).iter().map(move |&pos| &self.edges[pos])
    }

    /// Edges leaving `id`.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.index.outgoing(id).iter().map(move |&pos| &self.edges[pos])
    }

    /// Captures the current state together with the signals of the last run.
    pub fn snapshot(&self, signals: &[Signal]) -> NetworkSnapshot {
        NetworkSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            signals: signals.to_vec(),
        }
    }

    /// Serializes the graph (without signals) to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn network(seed: u64) -> Network {
        Network::generate(&LayoutConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn sizes_and_lookups() {
        let net = network(1);
        assert_eq!(net.layer_count(), 4);
        assert_eq!(net.input_size(), 4);
        assert_eq!(net.output_size(), 4);
        assert_eq!(net.layer(2).count(), 6);

        let id = NodeId::new(2, 5);
        assert_eq!(net.node(id).map(|n| n.id), Some(id));
        assert!(net.node(NodeId::new(4, 0)).is_none());
        assert_eq!(net.edge(EdgeId(10)).map(|e| e.id), Some(EdgeId(10)));
        assert!(net.edge(EdgeId(84)).is_none());
    }

    #[test]
    fn inspection_edges() {
        let net = network(1);
        let id = NodeId::new(1, 3);
        assert!(net.incoming(id).all(|e| e.target == id && e.source.layer == 0));
        assert!(net.outgoing(id).all(|e| e.source == id && e.target.layer == 2));
        assert_eq!(net.incoming(id).count(), 4);
        assert_eq!(net.outgoing(id).count(), 6);
    }

    #[test]
    fn clones_propagate_independently() {
        let mut a = network(2);
        let mut b = a.clone();
        a.propagate(&InputVector::new(vec![1.0, 1.0, 1.0, 1.0], "a").unwrap()).unwrap();
        b.propagate(&InputVector::new(vec![0.0, 0.0, 0.0, 0.0], "b").unwrap()).unwrap();
        assert_eq!(a.layer(0).map(|n| n.value).collect::<Vec<_>>(), vec![1.0; 4]);
        assert_eq!(b.layer(0).map(|n| n.value).collect::<Vec<_>>(), vec![0.0; 4]);
        assert!(b.layer(1).all(|n| n.value == 0.5));
    }

    #[test]
    fn json_reload_rebuilds_the_index() {
        let net = network(3);
        let json = net.to_json().unwrap();
        let snapshot: NetworkSnapshot = serde_json::from_str(&json).unwrap();
        let mut back = Network::try_from(snapshot).unwrap();
        assert_eq!(back.nodes().len(), net.nodes().len());
        for (a, b) in back.edges().iter().zip(net.edges()) {
            assert_eq!((a.id, a.source, a.target), (b.id, b.source, b.target));
            assert_abs_diff_eq!(a.weight, b.weight, epsilon = 1e-12);
        }
        let signals = back.propagate(&InputVector::new(vec![1.0; 4], "reload").unwrap()).unwrap();
        assert_eq!(signals.len(), net.edges().len());
    }

    #[test]
    fn untrusted_snapshot_with_far_layer_is_rejected() {
        let json = r#"{
            "nodes": [
                {"id": {"layer": 0, "index": 0}, "x": 100.0, "y": 300.0, "value": 0.0},
                {"id": {"layer": 1000000000000, "index": 0}, "x": 700.0, "y": 300.0, "value": 0.0}
            ],
            "edges": [],
            "signals": []
        }"#;
        let snapshot: NetworkSnapshot = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Network::try_from(snapshot),
            Err(NetworkError::InvalidTopologyConfig(_))
        ));
    }

    #[test]
    fn from_parts_rejects_layer_skipping_edges() {
        let net = network(4);
        let mut edges = net.edges().to_vec();
        edges[0].target = NodeId::new(3, 0);
        assert!(Network::from_parts(net.nodes().to_vec(), edges).is_err());
        assert!(Network::from_parts(net.nodes().to_vec(), net.edges().to_vec()).is_ok());
    }
}
