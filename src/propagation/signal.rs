use serde::{Serialize, Deserialize};
use crate::topology::edge::EdgeId;

/// Transient record of one edge's contribution during a single run.
///
/// `value` is the raw pre-activation product `source.value * weight`.
/// `progress` is the animation position along the edge in `[0, 1]`; the
/// engine emits every signal at 0 and the renderer advances it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: usize,
    pub edge: EdgeId,
    pub value: f64,
    pub progress: f64,
}

impl Signal {
    pub fn new(id: usize, edge: EdgeId, value: f64) -> Signal {
        Signal { id, edge, value, progress: 0.0 }
    }

    /// Moves the signal along its edge, clamping at the target.
    /// Returns `true` once the signal has arrived.
    pub fn advance(&mut self, delta: f64) -> bool {
        self.progress = (self.progress + delta).clamp(0.0, 1.0);
        self.is_arrived()
    }

    pub fn is_arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_target() {
        let mut s = Signal::new(0, EdgeId(3), 0.4);
        assert!(!s.advance(0.6));
        assert!(s.advance(0.6));
        assert_eq!(s.progress, 1.0);
    }
}
