use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::propagation::rule::PropagationRule;
use crate::topology::layout::{
    LayoutConfig, DEFAULT_HEIGHT, DEFAULT_LAYER_SIZES, DEFAULT_PADDING, DEFAULT_WIDTH,
};

/// A serializable description of a visualisation session: network shape,
/// canvas, weight seed and propagation rule.
///
/// Every field falls back to its default when missing, so `{}` is a valid
/// spec file describing the stock 4-6-6-4 network on an 800x600 canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSpec {
    /// Node count per layer, input first.
    #[serde(default = "default_layer_sizes")]
    pub layer_sizes: Vec<usize>,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Weight seed. `None` draws weights from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rule: PropagationRule,
}

fn default_layer_sizes() -> Vec<usize> { DEFAULT_LAYER_SIZES.to_vec() }
fn default_width() -> f64 { DEFAULT_WIDTH }
fn default_height() -> f64 { DEFAULT_HEIGHT }
fn default_padding() -> f64 { DEFAULT_PADDING }

impl Default for VisualizationSpec {
    fn default() -> Self {
        VisualizationSpec {
            layer_sizes: default_layer_sizes(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
            seed: None,
            rule: PropagationRule::default(),
        }
    }
}

impl VisualizationSpec {
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::new(self.layer_sizes.clone(), self.width, self.height, self.padding)
    }

    /// Generates the network this spec describes, seeded when `seed` is set.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::generate(&self.layout(), &mut rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `VisualizationSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<VisualizationSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
