use serde::{Serialize, Deserialize};
use crate::propagation::input::InputVector;

/// One completed propagation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based run number.
    pub run: usize,
    pub label: String,
    pub inputs: Vec<f64>,
    /// Output-layer values after the run.
    pub outputs: Vec<f64>,
}

/// Append-only history of runs.
///
/// Nodes only ever hold the latest activation; anything that compares runs
/// (such as a chart of every submitted input) reads from here instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunLog {
    records: Vec<RunRecord>,
}

impl RunLog {
    pub fn new() -> RunLog {
        RunLog::default()
    }

    pub fn record(&mut self, input: &InputVector, outputs: Vec<f64>) -> &RunRecord {
        let run = self.records.len() + 1;
        self.records.push(RunRecord {
            run,
            label: input.label().to_owned(),
            inputs: input.values().to_vec(),
            outputs,
        });
        &self.records[run - 1]
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// The `component`-th input across every run, in insertion order.
    /// Positions line up with `labels()`; a run whose input is too short
    /// leaves a `None` gap in its slot.
    pub fn series(&self, component: usize) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.inputs.get(component).copied()).collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_appended_in_order() {
        let mut log = RunLog::new();
        let a = InputVector::new(vec![1.0, 2.0], "a").unwrap();
        let b = InputVector::new(vec![3.0, 4.0], "b").unwrap();
        assert_eq!(log.record(&a, vec![0.1]).run, 1);
        assert_eq!(log.record(&b, vec![0.2]).run, 2);

        assert_eq!(log.labels(), vec!["a", "b"]);
        assert_eq!(log.series(0), vec![Some(1.0), Some(3.0)]);
        assert_eq!(log.series(1), vec![Some(2.0), Some(4.0)]);
        assert_eq!(log.series(2), vec![None, None]);
        assert_eq!(log.records()[1].outputs, vec![0.2]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn series_keeps_a_slot_for_every_label() {
        let mut log = RunLog::new();
        log.record(&InputVector::new(vec![1.0], "short").unwrap(), vec![]);
        log.record(&InputVector::new(vec![2.0, 9.0], "long").unwrap(), vec![]);

        assert_eq!(log.labels(), vec!["short", "long"]);
        assert_eq!(log.series(0), vec![Some(1.0), Some(2.0)]);
        assert_eq!(log.series(1), vec![None, Some(9.0)]);
        assert_eq!(log.series(1).len(), log.labels().len());
    }
}
