pub mod dataset;

pub use dataset::{builtin_examples, find_example, Example};
