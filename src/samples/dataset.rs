use serde::{Serialize, Deserialize};
use crate::propagation::input::InputVector;

/// A named example dataset offered to the user, with one display label per
/// input component and a few ready-made inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub name: String,
    pub description: String,
    pub input_labels: Vec<String>,
    pub sample_data: Vec<InputVector>,
}

impl Example {
    pub fn input_size(&self) -> usize {
        self.input_labels.len()
    }

    /// Looks up a sample by its label.
    pub fn sample(&self, label: &str) -> Option<&InputVector> {
        self.sample_data.iter().find(|s| s.label() == label)
    }
}

fn example(
    id: &str,
    name: &str,
    description: &str,
    input_labels: &[&str],
    rows: &[(&[f64], &str)],
) -> Example {
    Example {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        input_labels: input_labels.iter().map(|s| (*s).to_owned()).collect(),
        sample_data: rows
            .iter()
            .map(|(values, label)| {
                InputVector::new(values.to_vec(), *label)
                    .unwrap_or_else(|e| panic!("built-in example {id:?} row {label:?}: {e}"))
            })
            .collect(),
    }
}

/// The datasets shipped with the visualiser. Both have four inputs to match
/// the default input layer.
pub fn builtin_examples() -> Vec<Example> {
    vec![
        example(
            "iris",
            "Iris Flower Classification",
            "Classify iris flowers based on sepal length, sepal width, petal length, and petal width.",
            &["Sepal Length", "Sepal Width", "Petal Length", "Petal Width"],
            &[
                (&[5.1, 3.5, 1.4, 0.2][..], "Setosa"),
                (&[7.0, 3.2, 4.7, 1.4][..], "Versicolor"),
                (&[6.3, 3.3, 6.0, 2.5][..], "Virginica"),
            ],
        ),
        example(
            "house",
            "House Price Prediction",
            "Predict house prices based on square footage, bedrooms, bathrooms, and age.",
            &["Square Ft", "Bedrooms", "Bathrooms", "Age"],
            &[
                (&[2500.0, 4.0, 2.5, 15.0][..], "Rs.450,000"),
                (&[1800.0, 3.0, 2.0, 25.0][..], "Rs.320,000"),
                (&[3200.0, 5.0, 3.0, 5.0][..], "Rs.580,000"),
            ],
        ),
    ]
}

/// Finds a built-in example by id.
pub fn find_example(id: &str) -> Option<Example> {
    builtin_examples().into_iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_matches_its_labels() {
        let examples = builtin_examples();
        assert_eq!(examples.len(), 2);
        for ex in &examples {
            assert_eq!(ex.sample_data.len(), 3, "{}", ex.id);
            assert!(ex.sample_data.iter().all(|s| s.len() == ex.input_size()));
        }
    }

    #[test]
    fn lookup_by_id_and_label() {
        let iris = find_example("iris").unwrap();
        assert_eq!(iris.sample("Virginica").unwrap().values(), &[6.3, 3.3, 6.0, 2.5]);
        assert!(iris.sample("Daisy").is_none());
        assert!(find_example("mnist").is_none());
    }
}
