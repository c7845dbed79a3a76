use neuroflow::{find_example, LayoutConfig, Network, PropagationRule};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut network = Network::generate(&LayoutConfig::default(), &mut StdRng::seed_from_u64(42))
        .expect("default layout is valid");
    let iris = find_example("iris").expect("iris is built in");

    for rule in [PropagationRule::LastWriterWins, PropagationRule::WeightedSum] {
        println!("{rule:?}");
        for sample in &iris.sample_data {
            let signals = network.propagate_with_rule(sample, rule).expect("iris has four inputs");
            let outputs: Vec<String> = network.outputs().iter().map(|v| format!("{v:.4}")).collect();
            println!(
                "  {:<10} -> [{}] ({} signals)",
                sample.label(),
                outputs.join(", "),
                signals.len()
            );
        }
    }
}
