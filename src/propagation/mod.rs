pub mod engine;
pub mod index;
pub mod input;
pub mod rule;
pub mod signal;

pub use engine::{propagate, propagate_with_rule};
pub use index::GraphIndex;
pub use input::InputVector;
pub use rule::PropagationRule;
pub use signal::Signal;
