use thiserror::Error;

/// Precondition failures raised by generation and propagation.
///
/// Every variant is detected before any node is written, so a rejected call
/// leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("input vector has {actual} values but the input layer has {expected} nodes")]
    InvalidInputShape { expected: usize, actual: usize },

    #[error("invalid topology configuration: {0}")]
    InvalidTopologyConfig(String),

    #[error("invalid input value: {0}")]
    InvalidInputValue(String),
}
