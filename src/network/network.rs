use rand::prelude::*;

use crate::error::{NetworkError, Result};
use crate::network::connection::UnitId;
use crate::network::spec::PropagationMode;
use crate::network::unit::Unit;

/// A dense feed-forward network of scalar units.
///
/// Topology is fixed at construction: every unit in layer `i` owns exactly
/// one connection to every unit in layer `i + 1`. After construction only
/// unit values and connection weights change. There is no activation
/// function; each unit forwards its raw linear value, so the whole network
/// computes a linear map of its inputs.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Vec<Unit>>,
    mode: PropagationMode,
}

impl Network {
    /// Builds a zeroed network from an ordered list of layer sizes, input
    /// layer first.
    ///
    /// Fails if fewer than two sizes are given or any size is zero; nothing
    /// is allocated on failure. All weights start at 0, so a fresh network
    /// maps every input to all-zero outputs until weights are populated.
    pub fn new(layer_sizes: &[usize]) -> Result<Network> {
        Network::with_mode(layer_sizes, PropagationMode::default())
    }

    /// Like [`Network::new`] but with an explicit propagation mode.
    pub fn with_mode(layer_sizes: &[usize], mode: PropagationMode) -> Result<Network> {
        if layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidArgument(format!(
                "a network needs at least an input and an output layer, got {} sizes",
                layer_sizes.len()
            )));
        }
        if let Some(position) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidArgument(format!(
                "layer {position} has no units; every layer needs at least one"
            )));
        }

        let mut layers: Vec<Vec<Unit>> = layer_sizes
            .iter()
            .map(|&size| (0..size).map(|_| Unit::new()).collect())
            .collect();

        for layer in 0..layers.len() - 1 {
            let next_len = layers[layer + 1].len();
            for index in 0..layers[layer].len() {
                layers[layer][index].wire_to(UnitId { layer, index }, next_len)?;
            }
        }

        Ok(Network { layers, mode })
    }

    /// Overwrites the input layer's values positionally. Fails without
    /// touching any unit if `values` does not match the input layer's size.
    pub fn set_inputs(&mut self, values: &[f64]) -> Result<()> {
        let input_layer = &mut self.layers[0];
        if values.len() != input_layer.len() {
            return Err(NetworkError::InvalidArgument(format!(
                "got {} input values for an input layer of {} units",
                values.len(),
                input_layer.len()
            )));
        }
        for (unit, &value) in input_layer.iter_mut().zip(values) {
            unit.value = value;
        }
        Ok(())
    }

    /// Runs one forward pass: layers are visited left to right, every unit
    /// depositing `value * weight` into each of its destinations.
    ///
    /// Under [`PropagationMode::Accumulate`] downstream values are never
    /// cleared, so repeated calls without resetting inputs keep compounding.
    /// Under [`PropagationMode::Reset`] each layer is zeroed just before it
    /// receives contributions, making every call a pure function of the
    /// current inputs and weights.
    pub fn propagate(&mut self) {
        for layer in 0..self.layers.len() - 1 {
            let (upstream, downstream) = self.layers.split_at_mut(layer + 1);
            let next = downstream[0].as_mut_slice();
            if self.mode == PropagationMode::Reset {
                for unit in next.iter_mut() {
                    unit.value = 0.0;
                }
            }
            for unit in &upstream[layer] {
                unit.propagate_forward(next);
            }
        }
    }

    /// Values of the output layer, in layer order. Pure read.
    pub fn outputs(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1]
            .iter()
            .map(|unit| unit.value)
            .collect()
    }

    pub fn mode(&self) -> PropagationMode {
        self.mode
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(|layer| layer.len()).collect()
    }

    /// Read-only view of one layer's units.
    pub fn layer(&self, layer: usize) -> Option<&[Unit]> {
        self.layers.get(layer).map(|units| units.as_slice())
    }

    pub fn input_len(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }

    /// Weight of the connection from unit `from` in `layer` to unit `to` in
    /// the next layer.
    pub fn weight(&self, layer: usize, from: usize, to: usize) -> Result<f64> {
        let connection = self
            .layers
            .get(layer)
            .and_then(|units| units.get(from))
            .and_then(|unit| unit.connections().get(to))
            .ok_or_else(|| Network::no_such_connection(layer, from, to))?;
        Ok(connection.weight())
    }

    pub fn set_weight(&mut self, layer: usize, from: usize, to: usize, weight: f64) -> Result<()> {
        let connection = self
            .layers
            .get_mut(layer)
            .and_then(|units| units.get_mut(from))
            .and_then(|unit| unit.connections_mut().get_mut(to))
            .ok_or_else(|| Network::no_such_connection(layer, from, to))?;
        connection.set_weight(weight);
        Ok(())
    }

    /// Sets every connection weight in the network to `weight`.
    pub fn fill_weights(&mut self, weight: f64) {
        for layer in &mut self.layers {
            for unit in layer {
                for connection in unit.connections_mut() {
                    connection.set_weight(weight);
                }
            }
        }
    }

    /// Draws every connection weight uniformly from [-1, 1].
    pub fn randomize_weights(&mut self) {
        let mut rng = rand::thread_rng();
        for layer in &mut self.layers {
            for unit in layer {
                for connection in unit.connections_mut() {
                    connection.set_weight(rng.gen::<f64>() * 2.0 - 1.0);
                }
            }
        }
    }

    fn no_such_connection(layer: usize, from: usize, to: usize) -> NetworkError {
        NetworkError::InvalidArgument(format!(
            "no connection from unit {layer}:{from} to unit {}:{to}",
            layer + 1
        ))
    }
}
