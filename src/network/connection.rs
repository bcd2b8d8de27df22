use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Position of a unit inside a network: `layer` indexes into the layer list,
/// `index` into that layer's units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitId {
    pub layer: usize,
    pub index: usize,
}

/// A directed weighted edge between two units in adjacent layers.
///
/// Endpoints are stored as index pairs into the owning network's per-layer
/// unit storage, so a connection never owns or shares ownership of the units
/// it joins. Topology is fixed for the connection's lifetime; only the weight
/// is mutable.
#[derive(Debug, Clone)]
pub struct Connection {
    weight: f64,
    source: UnitId,
    destination: UnitId,
}

impl Connection {
    /// Creates a zero-weight connection. The destination must sit in the
    /// layer directly after the source, otherwise `InvalidArgument`.
    pub fn between(source: UnitId, destination: UnitId) -> Result<Connection> {
        if destination.layer != source.layer + 1 {
            return Err(NetworkError::InvalidArgument(format!(
                "connection must join adjacent layers, got layer {} -> layer {}",
                source.layer, destination.layer
            )));
        }
        Ok(Connection {
            weight: 0.0,
            source,
            destination,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn source(&self) -> UnitId {
        self.source
    }

    pub fn destination(&self) -> UnitId {
        self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_adjacent_layers_with_zero_weight() {
        let source = UnitId { layer: 0, index: 1 };
        let destination = UnitId { layer: 1, index: 0 };
        let connection = Connection::between(source, destination).unwrap();

        assert_eq!(connection.weight(), 0.0);
        assert_eq!(connection.source(), source);
        assert_eq!(connection.destination(), destination);
    }

    #[test]
    fn rejects_non_adjacent_endpoints() {
        let same_layer = Connection::between(
            UnitId { layer: 1, index: 0 },
            UnitId { layer: 1, index: 1 },
        );
        assert!(matches!(same_layer, Err(NetworkError::InvalidArgument(_))));

        let backwards = Connection::between(
            UnitId { layer: 2, index: 0 },
            UnitId { layer: 1, index: 0 },
        );
        assert!(matches!(backwards, Err(NetworkError::InvalidArgument(_))));
    }
}
