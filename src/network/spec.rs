use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;

/// What happens to downstream unit values at the start of each forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropagationMode {
    /// Downstream values are never cleared; repeated passes keep adding on
    /// top of whatever the units already hold.
    #[default]
    Accumulate,
    /// Each layer is zeroed right before it receives contributions, so every
    /// pass depends only on the current inputs and weights.
    Reset,
}

/// A fully serializable description of a network architecture.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any live
/// network, making it possible to store an architecture before building it.
/// Weights are never part of a spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the spec file stem.
    pub name: String,
    /// Ordered unit counts, input layer first.
    pub layer_sizes: Vec<usize>,
    /// Forward-pass semantics; defaults to the accumulating behavior.
    #[serde(default)]
    pub propagation: PropagationMode,
}

impl NetworkSpec {
    /// Builds a zeroed network with this spec's layer sizes and mode.
    pub fn build(&self) -> Result<Network> {
        Network::with_mode(&self.layer_sizes, self.propagation)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
