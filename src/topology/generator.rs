use rand::Rng;
use tracing::debug;

use crate::error::NetworkError;
use crate::topology::{
    edge::{Edge, EdgeId},
    layout::LayoutConfig,
    node::{Node, NodeId},
};

/// Builds the laid-out nodes and the dense weighted edge set.
///
/// Nodes come out layer by layer, each layer in index order, all with a value
/// of 0. Edges join every node of layer `L` to every node of layer `L + 1`,
/// ordered by layer pair, then source index, then target index. Each weight is
/// one `rng.gen::<f64>()` draw taken in that same order, so a seeded `rng`
/// reproduces the exact weight sequence.
pub fn generate<R: Rng + ?Sized>(
    layout: &LayoutConfig,
    rng: &mut R,
) -> Result<(Vec<Node>, Vec<Edge>), NetworkError> {
    layout.validate()?;

    let sizes = &layout.layer_sizes;
    let mut nodes = Vec::with_capacity(sizes.iter().sum());
    for (layer, &count) in sizes.iter().enumerate() {
        let x = layout.layer_x(layer);
        for index in 0..count {
            nodes.push(Node::new(NodeId::new(layer, index), x, layout.node_y(index, count)));
        }
    }

    let edge_count = sizes.windows(2).map(|w| w[0] * w[1]).sum();
    let mut edges = Vec::with_capacity(edge_count);
    for (layer, pair) in sizes.windows(2).enumerate() {
        for source in 0..pair[0] {
            for target in 0..pair[1] {
                edges.push(Edge {
                    id: EdgeId(edges.len()),
                    source: NodeId::new(layer, source),
                    target: NodeId::new(layer + 1, target),
                    weight: rng.gen::<f64>(),
                });
            }
        }
    }

    debug!(
        layers = sizes.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "generated network topology"
    );
    Ok((nodes, edges))
}
