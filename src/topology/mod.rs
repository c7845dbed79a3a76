pub mod edge;
pub mod generator;
pub mod layout;
pub mod node;

pub use edge::{Edge, EdgeId};
pub use generator::generate;
pub use layout::LayoutConfig;
pub use node::{Node, NodeId};
