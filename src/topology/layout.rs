use serde::{Serialize, Deserialize};
use crate::error::NetworkError;

pub const DEFAULT_LAYER_SIZES: [usize; 4] = [4, 6, 6, 4];
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_PADDING: f64 = 100.0;

/// Shape of the network and the canvas it is laid out on.
///
/// Fields:
/// - `layer_sizes` — node count per layer, input first
/// - `width`       — canvas width
/// - `height`      — canvas height
/// - `padding`     — margin kept clear on every side of the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub layer_sizes: Vec<usize>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            layer_sizes: DEFAULT_LAYER_SIZES.to_vec(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl LayoutConfig {
    pub fn new(layer_sizes: Vec<usize>, width: f64, height: f64, padding: f64) -> LayoutConfig {
        LayoutConfig { layer_sizes, width, height, padding }
    }

    /// Rejects configurations the layout formulas cannot place nodes on.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.layer_sizes.is_empty() {
            return Err(NetworkError::InvalidTopologyConfig(
                "at least one layer is required".to_owned(),
            ));
        }
        if let Some(layer) = self.layer_sizes.iter().position(|&n| n == 0) {
            return Err(NetworkError::InvalidTopologyConfig(format!(
                "layer {layer} has no nodes"
            )));
        }
        for (name, v) in [("width", self.width), ("height", self.height), ("padding", self.padding)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(NetworkError::InvalidTopologyConfig(format!(
                    "{name} must be a positive finite number, got {v}"
                )));
            }
        }
        if 2.0 * self.padding >= self.width || 2.0 * self.padding >= self.height {
            return Err(NetworkError::InvalidTopologyConfig(format!(
                "padding {} leaves no drawable area on a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Horizontal position of a layer. Layers are spread evenly between the
    /// left and right padding; a lone layer sits in the middle.
    pub fn layer_x(&self, layer: usize) -> f64 {
        let layers = self.layer_count();
        if layers < 2 {
            return self.width / 2.0;
        }
        let usable = self.width - 2.0 * self.padding;
        self.padding + (usable / (layers - 1) as f64) * layer as f64
    }

    /// Vertical position of node `index` in a layer of `count` nodes.
    pub fn node_y(&self, index: usize, count: usize) -> f64 {
        let usable = self.height - 2.0 * self.padding;
        let spacing = usable / (count + 1) as f64;
        self.padding + spacing * (index + 1) as f64
    }
}
