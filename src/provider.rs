//! Provider configuration (data), the proof-gate implementation (behavior), and the
//! alias-keyed registry that replaces host-managed provider factories.

pub mod config;
pub mod proof_gate;
pub mod registry;

pub use config::*;
pub use proof_gate::*;
pub use registry::*;
