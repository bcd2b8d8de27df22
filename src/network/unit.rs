use crate::error::{NetworkError, Result};
use crate::network::connection::{Connection, UnitId};

/// A single computational node: a scalar accumulator plus the owned, ordered
/// list of outgoing connections into the next layer. Output-layer units have
/// no connections.
#[derive(Debug, Clone)]
pub struct Unit {
    pub value: f64,
    outgoing: Vec<Connection>,
}

impl Unit {
    pub(crate) fn new() -> Unit {
        Unit {
            value: 0.0,
            outgoing: Vec::new(),
        }
    }

    /// Read-only view of the outgoing connections, in destination order.
    pub fn connections(&self) -> &[Connection] {
        &self.outgoing
    }

    pub(crate) fn connections_mut(&mut self) -> &mut [Connection] {
        &mut self.outgoing
    }

    /// Wires this unit to every unit of the next layer: one zero-weight
    /// connection per destination, in order. A unit may only be wired once;
    /// wiring it again would duplicate its edges.
    pub(crate) fn wire_to(&mut self, source: UnitId, next_layer_len: usize) -> Result<()> {
        if !self.outgoing.is_empty() {
            return Err(NetworkError::InvalidArgument(format!(
                "unit {}:{} is already wired",
                source.layer, source.index
            )));
        }
        self.outgoing.reserve(next_layer_len);
        for index in 0..next_layer_len {
            let destination = UnitId {
                layer: source.layer + 1,
                index,
            };
            self.outgoing.push(Connection::between(source, destination)?);
        }
        Ok(())
    }

    /// Adds `value * weight` into each connected unit of the next layer.
    /// Contributions accumulate; a destination keeps whatever it already held
    /// and receives one addition per incoming connection.
    pub(crate) fn propagate_forward(&self, next_layer: &mut [Unit]) {
        for connection in &self.outgoing {
            next_layer[connection.destination().index].value += self.value * connection.weight();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_to_creates_one_connection_per_destination() {
        let mut unit = Unit::new();
        let source = UnitId { layer: 0, index: 0 };
        unit.wire_to(source, 3).unwrap();

        assert_eq!(unit.connections().len(), 3);
        for (index, connection) in unit.connections().iter().enumerate() {
            assert_eq!(connection.source(), source);
            assert_eq!(connection.destination(), UnitId { layer: 1, index });
            assert_eq!(connection.weight(), 0.0);
        }
    }

    #[test]
    fn wiring_twice_is_rejected() {
        let mut unit = Unit::new();
        let source = UnitId { layer: 0, index: 0 };
        unit.wire_to(source, 2).unwrap();

        let rewire = unit.wire_to(source, 2);
        assert!(matches!(rewire, Err(NetworkError::InvalidArgument(_))));
        assert_eq!(unit.connections().len(), 2);
    }

    #[test]
    fn propagate_forward_accumulates_into_destinations() {
        let mut unit = Unit::new();
        unit.value = 3.0;
        unit.wire_to(UnitId { layer: 0, index: 0 }, 2).unwrap();
        unit.connections_mut()[0].set_weight(2.0);
        unit.connections_mut()[1].set_weight(-1.0);

        let mut next = vec![Unit::new(), Unit::new()];
        next[0].value = 10.0;

        unit.propagate_forward(&mut next);
        assert_eq!(next[0].value, 16.0);
        assert_eq!(next[1].value, -3.0);
    }
}
