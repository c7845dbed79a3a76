use serde::{Deserialize, Deserializer, Serialize};
use crate::error::NetworkError;

/// One externally supplied input: an ordered list of finite values plus a
/// display label. The label never takes part in the computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputVector {
    values: Vec<f64>,
    label: String,
}

/// Deserializing goes through `InputVector::new`, so loaded inputs obey the
/// same checks as constructed ones.
impl<'de> Deserialize<'de> for InputVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            values: Vec<f64>,
            label: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        InputVector::new(raw.values, raw.label).map_err(serde::de::Error::custom)
    }
}

impl InputVector {
    pub fn new(values: Vec<f64>, label: impl Into<String>) -> Result<InputVector, NetworkError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(NetworkError::InvalidInputValue("label must not be empty".to_owned()));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(NetworkError::InvalidInputValue(format!(
                "component {i} is not a finite number ({})",
                values[i]
            )));
        }
        Ok(InputVector { values, label })
    }

    /// Parses comma-separated numbers, e.g. `"5.1, 3.5, 1.4, 0.2"`.
    pub fn parse(text: &str, label: impl Into<String>) -> Result<InputVector, NetworkError> {
        let values = text
            .split(',')
            .enumerate()
            .map(|(i, raw)| {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(NetworkError::InvalidInputValue(format!("component {i} is empty")));
                }
                raw.parse::<f64>().map_err(|_| {
                    NetworkError::InvalidInputValue(format!("component {i} is not a number: {raw:?}"))
                })
            })
            .collect::<Result<Vec<f64>, NetworkError>>()?;
        InputVector::new(values, label)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
