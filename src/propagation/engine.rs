use tracing::{debug, warn};

use crate::activation::sigmoid;
use crate::error::NetworkError;
use crate::propagation::{index::GraphIndex, input::InputVector, rule::PropagationRule, signal::Signal};
use crate::topology::{edge::Edge, node::Node};

/// Runs `input` through the graph using the default last-writer-wins rule.
///
/// On success every node value is rewritten (input nodes verbatim, all others
/// through the sigmoid) and one `Signal` per evaluated edge is returned. A
/// malformed graph (see `index::check_graph`) or a shape mismatch leaves
/// `nodes` untouched.
pub fn propagate(
    nodes: &mut [Node],
    edges: &[Edge],
    input: &InputVector,
) -> Result<Vec<Signal>, NetworkError> {
    propagate_with_rule(nodes, edges, input, PropagationRule::default())
}

pub fn propagate_with_rule(
    nodes: &mut [Node],
    edges: &[Edge],
    input: &InputVector,
    rule: PropagationRule,
) -> Result<Vec<Signal>, NetworkError> {
    let index = GraphIndex::build(nodes, edges)?;
    propagate_indexed(nodes, edges, &index, input, rule)
}

/// Same as `propagate_with_rule` but reuses an index built from these exact
/// `nodes` and `edges`.
pub(crate) fn propagate_indexed(
    nodes: &mut [Node],
    edges: &[Edge],
    index: &GraphIndex,
    input: &InputVector,
    rule: PropagationRule,
) -> Result<Vec<Signal>, NetworkError> {
    let input_layer = index.layer(0);
    if input.len() != input_layer.len() {
        warn!(
            label = input.label(),
            expected = input_layer.len(),
            actual = input.len(),
            "rejected input with wrong shape"
        );
        return Err(NetworkError::InvalidInputShape {
            expected: input_layer.len(),
            actual: input.len(),
        });
    }

    for (&pos, &value) in input_layer.iter().zip(input.values()) {
        nodes[pos].value = value;
    }

    let mut signals = Vec::with_capacity(edges.len());
    // Strictly ascending: a layer only reads values finalised by the previous one.
    for layer in 0..index.layer_count().saturating_sub(1) {
        let sources = index.layer(layer);
        let targets = index.layer(layer + 1);
        let mut sums: Vec<Option<f64>> = vec![None; targets.len()];

        for &s in sources {
            let (source_id, source_value) = (nodes[s].id, nodes[s].value);
            for (slot, &t) in targets.iter().enumerate() {
                let Some(e) = index.edge_between(source_id, nodes[t].id) else {
                    continue;
                };
                let edge = &edges[e];
                let raw = source_value * edge.weight;
                signals.push(Signal::new(signals.len(), edge.id, raw));

                match rule {
                    PropagationRule::LastWriterWins => nodes[t].value = sigmoid(raw),
                    PropagationRule::WeightedSum => {
                        *sums[slot].get_or_insert(0.0) += raw;
                    }
                }
            }
        }

        if rule == PropagationRule::WeightedSum {
            for (&t, sum) in targets.iter().zip(sums) {
                if let Some(sum) = sum {
                    nodes[t].value = sigmoid(sum);
                }
            }
        }
    }

    debug!(
        label = input.label(),
        ?rule,
        signals = signals.len(),
        "propagated input"
    );
    Ok(signals)
}
