use serde::{Serialize, Deserialize};

/// How a target node's value is derived from its incoming edges.
///
/// - `LastWriterWins` — each evaluated edge overwrites the target with
///   `sigmoid(source * weight)`, so the target ends up holding the value of
///   the last incoming edge in iteration order (the highest source index).
///   This is the behaviour the visualisation has always shown.
/// - `WeightedSum`    — the target becomes `sigmoid(Σ source * weight)` over
///   all incoming edges, the conventional dense-layer forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationRule {
    #[default]
    LastWriterWins,
    WeightedSum,
}
