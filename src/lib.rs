pub mod error;
pub mod network;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use network::connection::{Connection, UnitId};
pub use network::network::Network;
pub use network::spec::{NetworkSpec, PropagationMode};
pub use network::unit::Unit;
