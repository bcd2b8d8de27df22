use cascade_nn::{Network, PropagationMode};

fn main() {
    let mut network = Network::with_mode(&[2, 3, 1], PropagationMode::Reset)
        .expect("valid layer sizes");

    println!("Layer sizes: {:?}", network.layer_sizes());

    // A zeroed network maps everything to 0; give it something to do.
    network.randomize_weights();
    network.set_inputs(&[0.5, -1.25]).expect("two input values");

    for pass in 1..=3 {
        network.propagate();
        println!("Pass {pass}: outputs = {:?}", network.outputs());
    }
}
