pub mod connection;
pub mod network;
pub mod spec;
pub mod unit;

pub use connection::{Connection, UnitId};
pub use network::Network;
pub use spec::{NetworkSpec, PropagationMode};
pub use unit::Unit;
