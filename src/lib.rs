pub mod activation;
pub mod error;
pub mod history;
pub mod network;
pub mod propagation;
pub mod samples;
pub mod topology;

// Convenience re-exports
pub use activation::sigmoid;
pub use error::NetworkError;
pub use history::{RunLog, RunRecord};
pub use network::{Network, NetworkSnapshot, VisualizationSpec};
pub use propagation::{propagate, propagate_with_rule, GraphIndex, InputVector, PropagationRule, Signal};
pub use samples::{builtin_examples, find_example, Example};
pub use topology::{generate, Edge, EdgeId, LayoutConfig, Node, NodeId};
